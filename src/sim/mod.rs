//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, every timer is a tick counter
//! - Seeded RNG only (owned by `GameState`)
//! - No rendering or platform dependencies
//!
//! The per-tick pipeline is: input -> player -> enemies/hunters -> boss ->
//! projectiles -> powerups -> asteroids -> spawn director -> collision
//! resolution -> terminal checks. See `tick::tick`.

pub mod collision;
pub mod entity;
pub mod formula;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{resolve, Rect};
pub use entity::{
    Asteroid, Boss, BossPhase, Enemy, Hunter, HunterBehavior, HunterSpecial, MovePattern, Player,
    PowerUp, Projectile, SpecialFlags, Weapon, WeaponKind,
};
pub use formula::{
    AsteroidSize, BossAttack, EnemyKind, EnemyStats, Morale, MoraleModifiers, PlayerStat,
    PowerUpKind, RewardSource,
};
pub use spawn::SpawnDirector;
pub use state::{GameEvent, GamePhase, GameState, SimConfig};
pub use tick::{tick, TickInput};
