//! Permanent upgrade levels and purchase costs
//!
//! The upgrade/economy screen lives outside the core; it reads levels and
//! next-purchase prices from here, debits credits on `GameState`, and hands
//! the raised levels back when the player continues to the next level.

use serde::{Deserialize, Serialize};

use crate::sim::formula::{self, PlayerStat};

/// Purchasable upgrade tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeKind {
    Health,
    Shield,
    Damage,
    FireRate,
    Speed,
    Ammo,
    CreditGain,
    PassiveIncome,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 8] = [
        UpgradeKind::Health,
        UpgradeKind::Shield,
        UpgradeKind::Damage,
        UpgradeKind::FireRate,
        UpgradeKind::Speed,
        UpgradeKind::Ammo,
        UpgradeKind::CreditGain,
        UpgradeKind::PassiveIncome,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UpgradeKind::Health => "Hull",
            UpgradeKind::Shield => "Shield",
            UpgradeKind::Damage => "Damage",
            UpgradeKind::FireRate => "Fire Rate",
            UpgradeKind::Speed => "Thrusters",
            UpgradeKind::Ammo => "Ammo Bays",
            UpgradeKind::CreditGain => "Salvage",
            UpgradeKind::PassiveIncome => "Contracts",
        }
    }

    /// Highest purchasable level
    pub fn max_level(&self) -> u32 {
        match self {
            UpgradeKind::Ammo | UpgradeKind::CreditGain | UpgradeKind::PassiveIncome => 5,
            _ => 10,
        }
    }

    /// Player stat this upgrade raises
    pub fn stat(&self) -> PlayerStat {
        match self {
            UpgradeKind::Health => PlayerStat::Health,
            UpgradeKind::Shield => PlayerStat::Shield,
            UpgradeKind::Damage => PlayerStat::Damage,
            UpgradeKind::FireRate => PlayerStat::FireRate,
            UpgradeKind::Speed => PlayerStat::Speed,
            UpgradeKind::Ammo => PlayerStat::AmmoMultiplier,
            UpgradeKind::CreditGain => PlayerStat::CreditMultiplier,
            UpgradeKind::PassiveIncome => PlayerStat::PassiveIncome,
        }
    }
}

/// Current level per upgrade track, clamped to each track's max
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeLevels {
    levels: [u8; 8],
}

impl UpgradeLevels {
    pub fn new() -> Self {
        Self::default()
    }

    fn index(kind: UpgradeKind) -> usize {
        UpgradeKind::ALL.iter().position(|k| *k == kind).unwrap()
    }

    /// Level for a track, already clamped to its max
    pub fn level(&self, kind: UpgradeKind) -> u32 {
        (self.levels[Self::index(kind)] as u32).min(kind.max_level())
    }

    /// Set a track's level; out-of-range values clamp
    pub fn set_level(&mut self, kind: UpgradeKind, level: u32) {
        self.levels[Self::index(kind)] = level.min(kind.max_level()) as u8;
    }

    /// Raise a track by one. Returns false at the cap.
    pub fn raise(&mut self, kind: UpgradeKind) -> bool {
        let current = self.level(kind);
        if current >= kind.max_level() {
            return false;
        }
        self.set_level(kind, current + 1);
        true
    }

    /// Cost of the next level, or None at the cap
    pub fn next_cost(&self, kind: UpgradeKind) -> Option<u64> {
        let current = self.level(kind);
        if current >= kind.max_level() {
            None
        } else {
            Some(formula::upgrade_cost(kind, current))
        }
    }

    /// Derived stat value for a track at its current level
    pub fn stat_value(&self, kind: UpgradeKind) -> f32 {
        formula::player_stat(kind.stat(), self.level(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_level_clamps() {
        let mut levels = UpgradeLevels::new();
        levels.set_level(UpgradeKind::Ammo, 99);
        assert_eq!(levels.level(UpgradeKind::Ammo), UpgradeKind::Ammo.max_level());
    }

    #[test]
    fn test_raise_stops_at_cap() {
        let mut levels = UpgradeLevels::new();
        for _ in 0..UpgradeKind::Speed.max_level() {
            assert!(levels.raise(UpgradeKind::Speed));
        }
        assert!(!levels.raise(UpgradeKind::Speed));
        assert_eq!(levels.next_cost(UpgradeKind::Speed), None);
    }

    #[test]
    fn test_next_cost_tracks_level() {
        let mut levels = UpgradeLevels::new();
        let first = levels.next_cost(UpgradeKind::Damage).unwrap();
        levels.raise(UpgradeKind::Damage);
        let second = levels.next_cost(UpgradeKind::Damage).unwrap();
        assert!(second > first);
    }
}
