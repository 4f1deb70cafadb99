//! Nova Strike - a wave-based 2D arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic fixed-step simulation (entities, spawning, collisions, formulas)
//! - `upgrades`: Permanent upgrade levels and purchase costs
//! - `save`: Serializable progress snapshots for the persistence layer
//!
//! Rendering, input capture, and storage are external collaborators: the sim
//! consumes normalized `TickInput` intents and exposes read-only entity state
//! plus a drained event stream each tick.

pub mod save;
pub mod sim;
pub mod upgrades;

pub use save::SaveSnapshot;
pub use sim::{tick, GamePhase, GameState, SimConfig, TickInput};
pub use upgrades::{UpgradeKind, UpgradeLevels};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default viewport dimensions (pixels)
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;

    /// Player movement clamp inset from the viewport edges
    pub const PLAYER_MARGIN: f32 = 20.0;
    /// Enemies self-remove this far below the viewport bottom
    pub const OFFSCREEN_BOTTOM: f32 = 50.0;
    /// Projectiles are culled this far outside any viewport edge
    pub const PROJECTILE_MARGIN: f32 = 20.0;

    /// Final level; defeating its boss wins the game
    pub const LEVEL_COUNT: u32 = 10;
}

/// Angle (radians) of the ray from `from` to `to`
#[inline]
pub fn aim_angle(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Unit vector for an angle
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}
