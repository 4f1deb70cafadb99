//! Progress snapshots for the persistence collaborator
//!
//! The core hands out a versioned, serializable snapshot of everything a
//! "Continue" needs: score, credits, level, upgrade levels, and weapon/ammo
//! state. Storage is someone else's problem; this module only shapes the
//! data and round-trips it through JSON. Snapshots from another version are
//! rejected, not migrated.

use serde::{Deserialize, Serialize};

use crate::sim::entity::WeaponKind;
use crate::sim::formula::Morale;
use crate::sim::state::{GameState, SimConfig};
use crate::upgrades::UpgradeLevels;

/// Bumped on any incompatible snapshot change
pub const SAVE_VERSION: u32 = 1;

/// Everything needed to resume a run at the start of its current level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveSnapshot {
    pub version: u32,
    pub score: u64,
    pub credits: u64,
    pub level: u32,
    pub upgrades: UpgradeLevels,
    pub weapon: WeaponKind,
    pub ammo: Option<u32>,
    pub morale: Morale,
}

impl SaveSnapshot {
    /// Capture the persistable slice of a running game
    pub fn capture(state: &GameState) -> Self {
        Self {
            version: SAVE_VERSION,
            score: state.score,
            credits: state.credits,
            level: state.level,
            upgrades: state.config.upgrades.clone(),
            weapon: state.player.weapon.kind,
            ammo: state.player.weapon.ammo,
            morale: state.config.morale,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a snapshot, rejecting unknown versions. Returns None (with a
    /// log line) rather than guessing at a migration.
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<SaveSnapshot>(json) {
            Ok(snapshot) if snapshot.version == SAVE_VERSION => Some(snapshot),
            Ok(snapshot) => {
                log::warn!(
                    "rejecting snapshot with version {} (expected {SAVE_VERSION})",
                    snapshot.version
                );
                None
            }
            Err(err) => {
                log::warn!("unreadable snapshot: {err}");
                None
            }
        }
    }

    /// Rebuild a game state at the start of the saved level
    pub fn restore(&self, view: glam::Vec2, seed: u64) -> GameState {
        let config = SimConfig {
            view,
            starting_level: self.level,
            morale: self.morale,
            upgrades: self.upgrades.clone(),
            weapon: self.weapon,
        };
        let mut state = GameState::new(config, seed);
        state.score = self.score;
        state.credits = self.credits;
        state.player.weapon.ammo = self.ammo;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{VIEW_HEIGHT, VIEW_WIDTH};
    use crate::upgrades::UpgradeKind;
    use glam::Vec2;

    fn view() -> Vec2 {
        Vec2::new(VIEW_WIDTH, VIEW_HEIGHT)
    }

    #[test]
    fn test_json_round_trip() {
        let mut state = GameState::new(SimConfig::default(), 42);
        state.score = 12345;
        state.credits = 678;
        let snapshot = SaveSnapshot::capture(&state);

        let json = snapshot.to_json().unwrap();
        let parsed = SaveSnapshot::from_json(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_version_mismatch_rejected() {
        let mut snapshot = SaveSnapshot::capture(&GameState::new(SimConfig::default(), 42));
        snapshot.version = 99;
        let json = snapshot.to_json().unwrap();
        assert!(SaveSnapshot::from_json(&json).is_none());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(SaveSnapshot::from_json("not json").is_none());
        assert!(SaveSnapshot::from_json("{}").is_none());
    }

    #[test]
    fn test_restore_reproduces_derived_stats() {
        let mut config = SimConfig::default();
        config.upgrades.set_level(UpgradeKind::Damage, 4);
        config.upgrades.set_level(UpgradeKind::Health, 2);
        config.morale = Morale::Proud;
        let state = GameState::new(config, 7);

        let snapshot = SaveSnapshot::capture(&state);
        let json = snapshot.to_json().unwrap();
        let restored = SaveSnapshot::from_json(&json).unwrap().restore(view(), 7);

        // Identical formula-derived stats on both sides of the round trip
        assert_eq!(restored.player.max_health, state.player.max_health);
        assert_eq!(restored.player.shot_damage(), state.player.shot_damage());
        assert_eq!(restored.player.fire_rate, state.player.fire_rate);
        assert_eq!(restored.player.credit_mult, state.player.credit_mult);
        assert_eq!(restored.level, state.level);
    }
}
