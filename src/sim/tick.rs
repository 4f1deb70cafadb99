//! Fixed timestep simulation tick
//!
//! One call advances the world exactly one tick. The per-tick order is
//! fixed: input -> player -> enemies/hunters -> boss -> projectiles ->
//! powerups -> asteroids -> spawn director -> collision resolution ->
//! terminal checks. Reordering any of these changes observable behavior.

use glam::Vec2;

use crate::consts::*;

use super::state::{GameEvent, GamePhase, GameState};
use super::{collision, spawn};

/// Deadzone (squared pixels) below which a pointer drag is ignored
const DRAG_DEADZONE_SQ: f32 = 64.0;

/// Normalized input intents for a single tick. The input collaborator maps
/// whatever device it has onto this; the core never sees a device.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer drag in progress
    pub pointer_active: bool,
    /// Current pointer position
    pub pointer: Vec2,
    /// Position where the drag started
    pub pointer_origin: Vec2,
    /// Held movement keys
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Edge-triggered pause toggle
    pub pause: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.pause {
        state.phase = match state.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            other => other,
        };
    }

    // Paused and terminal phases are no-op ticks; the scheduler keeps
    // firing but nothing advances, and tick-counted timers freeze exactly.
    if state.phase != GamePhase::Playing {
        return;
    }

    state.tick_count += 1;
    let view = state.view();

    // Player: movement, timers, auto-fire, passive income
    let dir = move_intent(input);
    state.player.steer(dir, view);
    state.player.tick_timers();

    let mut new_shots = Vec::new();
    state.player.try_fire(&mut new_shots);

    if state.player.passive_income > 0.0 {
        state.income_accum += state.player.passive_income * SIM_DT;
        if state.income_accum >= 1.0 {
            let whole = state.income_accum.floor();
            state.credits += whole as u64;
            state.income_accum -= whole;
        }
    }

    let player_pos = state.player.pos;

    // Entity updates; retain drops the self-removed
    state
        .enemies
        .retain_mut(|enemy| !enemy.update(player_pos, view, &mut new_shots));
    state
        .hunters
        .retain_mut(|hunter| !hunter.update(player_pos, view, &mut new_shots));

    if let Some(boss) = state.boss.as_mut() {
        boss.update(player_pos, &mut state.rng, &mut new_shots);
    }

    state.projectiles.append(&mut new_shots);
    state
        .projectiles
        .retain_mut(|shot| !shot.update(Some(player_pos), view));

    state.powerups.retain_mut(|p| !p.update(view));
    state.asteroids.retain_mut(|a| !a.update(view));

    spawn::run(state);
    collision::resolve(state);

    // Terminal conditions
    if state.player.health <= 0.0 {
        state.phase = GamePhase::GameOver;
        log::info!(
            "game over at level {} with score {}",
            state.level,
            state.score
        );
        return;
    }

    if let Some(remaining) = state.director.level_clear_timer {
        if remaining <= 1 {
            state.director.level_clear_timer = None;
            if state.level >= LEVEL_COUNT {
                state.phase = GamePhase::Victory;
                log::info!("victory with score {}", state.score);
            } else {
                state.phase = GamePhase::LevelComplete;
                state
                    .events
                    .push(GameEvent::LevelCompleted { level: state.level });
            }
        } else {
            state.director.level_clear_timer = Some(remaining - 1);
        }
    }
}

/// Movement direction from the tick's input intents. A pointer drag wins
/// over keys; both produce a unit (or zero) vector.
fn move_intent(input: &TickInput) -> Vec2 {
    if input.pointer_active {
        let drag = input.pointer - input.pointer_origin;
        if drag.length_squared() > DRAG_DEADZONE_SQ {
            return drag.normalize();
        }
        return Vec2::ZERO;
    }

    let mut dir = Vec2::ZERO;
    if input.left {
        dir.x -= 1.0;
    }
    if input.right {
        dir.x += 1.0;
    }
    if input.up {
        dir.y -= 1.0;
    }
    if input.down {
        dir.y += 1.0;
    }
    if dir != Vec2::ZERO {
        dir = dir.normalize();
    }
    dir
}
