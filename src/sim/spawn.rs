//! Wave, hunter, and boss spawning policy
//!
//! A tick-counted state machine gated by the kill counter:
//! - timed enemy waves while no boss is up and the field is below capacity
//! - a one-shot hunter escort at half the boss threshold
//! - the boss itself once the per-level kill threshold is met, guarded so a
//!   level can never produce a second boss

use glam::Vec2;
use rand::Rng;

use super::entity::{Asteroid, Boss, Enemy, Hunter, HunterBehavior, HunterSpecial, MovePattern};
use super::formula::{AsteroidSize, EnemyKind};
use super::state::GameState;

/// Ticks between wave spawns
pub const WAVE_INTERVAL_TICKS: u32 = 120;
/// Maximum live regular enemies
pub const ENEMY_CAP: usize = 12;
/// Enemies per wave before level scaling
pub const WAVE_BASE_COUNT: u32 = 3;
/// Chance of one asteroid accompanying a wave
const ASTEROID_CHANCE: f64 = 0.3;
/// Ticks from boss defeat to the level-complete transition
pub const LEVEL_CLEAR_DELAY_TICKS: u32 = 120;
/// Kills required for the level-1 boss; grows per level
const BOSS_KILLS_BASE: u32 = 10;
const BOSS_KILLS_PER_LEVEL: u32 = 5;
/// Hunters dispatched at half the boss threshold
const HUNTER_CAP: u32 = 3;

/// Spawn bookkeeping for one level
#[derive(Debug, Clone)]
pub struct SpawnDirector {
    pub wave_timer: u32,
    pub kill_count: u32,
    /// Kill threshold that triggers the boss
    pub kills_for_boss: u32,
    /// Set on boss defeat; prevents a second spawn within the level
    pub boss_defeated: bool,
    /// The hunter escort fires once per level
    pub hunters_dispatched: bool,
    /// Tick countdown from boss defeat to the level-complete transition
    pub level_clear_timer: Option<u32>,
}

impl SpawnDirector {
    /// Fresh director with all guards reset - called at every level start
    pub fn for_level(level: u32) -> Self {
        Self {
            wave_timer: 0,
            kill_count: 0,
            kills_for_boss: BOSS_KILLS_BASE + (level.max(1) - 1) * BOSS_KILLS_PER_LEVEL,
            boss_defeated: false,
            hunters_dispatched: false,
            level_clear_timer: None,
        }
    }

    pub fn record_kill(&mut self) {
        self.kill_count += 1;
    }
}

/// One director tick. Boss gating takes priority over wave spawning.
pub fn run(state: &mut GameState) {
    let level = state.level;
    let view = state.view();

    // Boss gate: threshold met, none active, none defeated this level.
    // A set guard silently no-ops (policy, not an error).
    if state.director.kill_count >= state.director.kills_for_boss
        && state.boss.is_none()
        && !state.director.boss_defeated
    {
        state.boss = Some(Boss::new(level, view));
        log::info!(
            "boss spawned at level {level} after {} kills",
            state.director.kill_count
        );
        return;
    }

    // Hunter escort heralds the boss at half the threshold
    if !state.director.hunters_dispatched
        && state.boss.is_none()
        && state.director.kill_count >= state.director.kills_for_boss / 2
    {
        state.director.hunters_dispatched = true;
        let count = (1 + level / 3).min(HUNTER_CAP);
        for _ in 0..count {
            let behavior = match state.rng.random_range(0..3) {
                0 => HunterBehavior::Persistent,
                1 => HunterBehavior::Aggressive,
                _ => HunterBehavior::Flanking,
            };
            let special = match state.rng.random_range(0..3) {
                0 => HunterSpecial::Tracker,
                1 => HunterSpecial::Burst,
                _ => HunterSpecial::Cloak,
            };
            let x = state.rng.random_range(60.0..view.x - 60.0);
            state.hunters.push(Hunter::new(behavior, special, level, x));
        }
        log::info!("{count} hunters dispatched at level {level}");
    }

    // Timed waves while a boss is not holding the field
    state.director.wave_timer += 1;
    if state.director.wave_timer >= WAVE_INTERVAL_TICKS
        && state.enemies.len() < ENEMY_CAP
        && state.boss.is_none()
    {
        state.director.wave_timer = 0;
        let capacity = (ENEMY_CAP - state.enemies.len()) as u32;
        let count = (WAVE_BASE_COUNT + level / 2).min(capacity);
        for _ in 0..count {
            let kind = roll_enemy_kind(state, level);
            let pattern = if state.rng.random_bool(0.4) {
                MovePattern::Zigzag
            } else {
                MovePattern::Straight
            };
            let x = state.rng.random_range(40.0..view.x - 40.0);
            state.enemies.push(Enemy::new(kind, level, x, pattern));
        }
        log::debug!("wave of {count} spawned at level {level}");

        if state.rng.random_bool(ASTEROID_CHANCE) {
            spawn_asteroid(state, level, view);
        }
    }
}

fn roll_enemy_kind(state: &mut GameState, level: u32) -> EnemyKind {
    // Heavier hulls enter the mix as levels rise
    let roll: u32 = state.rng.random_range(0..100);
    if level >= 3 && roll < 15 + level.min(10) {
        EnemyKind::Heavy
    } else if level >= 2 && roll < 50 {
        EnemyKind::Fighter
    } else {
        EnemyKind::Scout
    }
}

fn spawn_asteroid(state: &mut GameState, level: u32, view: Vec2) {
    let size = match state.rng.random_range(0..3) {
        0 => AsteroidSize::Small,
        1 => AsteroidSize::Medium,
        _ => AsteroidSize::Large,
    };
    let speed_range = match size {
        AsteroidSize::Small => 120.0..200.0,
        AsteroidSize::Medium => 90.0..150.0,
        AsteroidSize::Large => 60.0..110.0,
    };
    let fall_speed = state.rng.random_range(speed_range);
    let spin = state.rng.random_range(-2.0..2.0);
    let x = state.rng.random_range(50.0..view.x - 50.0);
    state.asteroids.push(Asteroid::new(size, level, x, fall_speed, spin));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::SimConfig;

    #[test]
    fn test_boss_spawns_at_kill_threshold() {
        let mut state = GameState::new(SimConfig::default(), 42);
        state.director.kill_count = 10;
        state.director.kills_for_boss = 10;
        assert!(state.boss.is_none());

        run(&mut state);
        assert!(state.boss.is_some());
    }

    #[test]
    fn test_defeated_guard_blocks_respawn() {
        let mut state = GameState::new(SimConfig::default(), 42);
        state.director.kill_count = 10;
        state.director.kills_for_boss = 10;
        state.director.boss_defeated = true;

        run(&mut state);
        assert!(state.boss.is_none(), "guard must suppress a second boss");
    }

    #[test]
    fn test_no_wave_while_boss_active() {
        let mut state = GameState::new(SimConfig::default(), 42);
        state.boss = Some(Boss::new(1, state.view()));
        state.director.wave_timer = WAVE_INTERVAL_TICKS;

        run(&mut state);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_wave_respects_capacity() {
        let mut state = GameState::new(SimConfig::default(), 42);
        state.director.wave_timer = WAVE_INTERVAL_TICKS;
        for _ in 0..ENEMY_CAP - 1 {
            state
                .enemies
                .push(Enemy::new(EnemyKind::Scout, 1, 100.0, MovePattern::Straight));
        }

        run(&mut state);
        assert!(state.enemies.len() <= ENEMY_CAP);
    }

    #[test]
    fn test_hunters_dispatch_once() {
        let mut state = GameState::new(SimConfig::default(), 42);
        state.director.kill_count = state.director.kills_for_boss / 2;

        run(&mut state);
        let first = state.hunters.len();
        assert!(first > 0);

        run(&mut state);
        assert_eq!(state.hunters.len(), first, "escort must not repeat");
    }

    #[test]
    fn test_guard_resets_per_level() {
        let director = SpawnDirector::for_level(3);
        assert!(!director.boss_defeated);
        assert!(!director.hunters_dispatched);
        assert_eq!(director.kill_count, 0);
    }
}
