//! Game state and lifecycle transitions
//!
//! `GameState` owns every mutable gameplay value: the player, all entity
//! collections, counters, the seeded RNG, and the spawn director. Nothing
//! outside `sim` mutates it except through the lifecycle methods here
//! (`continue_to_next_level`, `retry`, `spend_credits`).

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::upgrades::UpgradeLevels;

use super::entity::{Asteroid, Boss, Enemy, Hunter, Player, PowerUp, Projectile, WeaponKind};
use super::formula::{AsteroidSize, EnemyKind, Morale, PowerUpKind};
use super::spawn::SpawnDirector;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Frozen; the scheduler keeps firing but ticks are no-ops
    Paused,
    /// Boss down, delay elapsed; the upgrade screen takes over
    LevelComplete,
    /// Player hull reached zero
    GameOver,
    /// Level-10 boss defeated
    Victory,
}

/// Immutable configuration injected at startup. Replaces any notion of a
/// global settings singleton: callers build one explicitly.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Viewport dimensions in pixels
    pub view: Vec2,
    pub starting_level: u32,
    pub morale: Morale,
    pub upgrades: UpgradeLevels,
    pub weapon: WeaponKind,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            view: Vec2::new(VIEW_WIDTH, VIEW_HEIGHT),
            starting_level: 1,
            morale: Morale::default(),
            upgrades: UpgradeLevels::new(),
            weapon: WeaponKind::Pulse,
        }
    }
}

/// Discrete gameplay events for the narrative/achievement collaborators.
/// Drained by the embedding layer after each tick; the core attaches no
/// meaning to them beyond emission.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    EnemyKilled {
        kind: EnemyKind,
        credits: u64,
        score: u64,
        pos: Vec2,
    },
    HunterKilled {
        credits: u64,
        score: u64,
        pos: Vec2,
    },
    BossDefeated {
        level: u32,
        credits: u64,
        score: u64,
        pos: Vec2,
    },
    AsteroidDestroyed {
        size: AsteroidSize,
        credits: u64,
        score: u64,
        pos: Vec2,
    },
    PlayerDamaged {
        amount: u32,
    },
    PowerUpCollected {
        kind: PowerUpKind,
        score: u64,
    },
    LevelCompleted {
        level: u32,
    },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: SimConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub level: u32,
    pub tick_count: u64,
    pub score: u64,
    pub credits: u64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub hunters: Vec<Hunter>,
    pub boss: Option<Boss>,
    pub asteroids: Vec<Asteroid>,
    pub projectiles: Vec<Projectile>,
    pub powerups: Vec<PowerUp>,
    pub director: SpawnDirector,
    pub events: Vec<GameEvent>,
    /// Fractional passive-income carry between ticks
    pub(super) income_accum: f32,
}

impl GameState {
    /// Start a fresh run from an injected config and seed
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let level = config.starting_level.clamp(1, LEVEL_COUNT);
        let player =
            Player::from_loadout(&config.upgrades, config.morale, config.weapon, config.view);
        log::info!("new run: level {level}, seed {seed}");
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            level,
            tick_count: 0,
            score: 0,
            credits: 0,
            player,
            enemies: Vec::new(),
            hunters: Vec::new(),
            boss: None,
            asteroids: Vec::new(),
            projectiles: Vec::new(),
            powerups: Vec::new(),
            director: SpawnDirector::for_level(level),
            events: Vec::new(),
            income_accum: 0.0,
            config,
        }
    }

    pub fn view(&self) -> Vec2 {
        self.config.view
    }

    /// Hand events to the collaborators; clears the queue
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Debit credits for an upgrade purchase. Returns false (and leaves the
    /// balance untouched) when there are not enough.
    pub fn spend_credits(&mut self, amount: u64) -> bool {
        if self.credits < amount {
            return false;
        }
        self.credits -= amount;
        true
    }

    /// Leave the upgrade screen and start the next level. The upgrade
    /// collaborator passes back the (possibly raised) levels and the
    /// narrative layer the current morale; the player is rebuilt from them.
    pub fn continue_to_next_level(&mut self, upgrades: UpgradeLevels, morale: Morale) {
        debug_assert_eq!(self.phase, GamePhase::LevelComplete);
        let weapon = self.player.weapon.kind;
        self.level += 1;
        self.config.upgrades = upgrades;
        self.config.morale = morale;
        self.player =
            Player::from_loadout(&self.config.upgrades, morale, weapon, self.config.view);
        self.clear_field();
        self.director = SpawnDirector::for_level(self.level);
        self.phase = GamePhase::Playing;
        log::info!("continuing to level {}", self.level);
    }

    /// Reset all progress to initial values and restart at level 1
    pub fn retry(&mut self) {
        let mut config = self.config.clone();
        config.starting_level = 1;
        config.upgrades = UpgradeLevels::new();
        *self = GameState::new(config, self.seed);
    }

    fn clear_field(&mut self) {
        self.enemies.clear();
        self.hunters.clear();
        self.boss = None;
        self.asteroids.clear();
        self.projectiles.clear();
        self.powerups.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_run_defaults() {
        let state = GameState::new(SimConfig::default(), 42);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level, 1);
        assert!(state.boss.is_none());
        assert_eq!(state.credits, 0);
    }

    #[test]
    fn test_starting_level_clamps() {
        let config = SimConfig {
            starting_level: 99,
            ..SimConfig::default()
        };
        assert_eq!(GameState::new(config, 1).level, LEVEL_COUNT);
    }

    #[test]
    fn test_spend_credits_guards_balance() {
        let mut state = GameState::new(SimConfig::default(), 42);
        state.credits = 100;
        assert!(!state.spend_credits(150));
        assert_eq!(state.credits, 100);
        assert!(state.spend_credits(60));
        assert_eq!(state.credits, 40);
    }

    #[test]
    fn test_retry_resets_progress() {
        let mut state = GameState::new(SimConfig::default(), 42);
        state.score = 9000;
        state.credits = 500;
        state.level = 7;
        state.phase = GamePhase::GameOver;
        state.retry();
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.credits, 0);
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
