//! Nova Strike headless driver
//!
//! Runs the simulation at the fixed timestep with a simple autopilot so a
//! whole run can be exercised (and profiled) without a renderer. Usage:
//!
//!   nova-strike [seed] [ticks]

use glam::Vec2;

use nova_strike::consts::*;
use nova_strike::sim::{tick, GamePhase, GameState, SimConfig, TickInput};
use nova_strike::SaveSnapshot;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    let max_ticks: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(20 * 60 * TICK_RATE as u64);

    let mut state = GameState::new(SimConfig::default(), seed);
    log::info!("driving up to {max_ticks} ticks with seed {seed}");

    for _ in 0..max_ticks {
        let input = autopilot(&state);
        tick(&mut state, &input);

        for event in state.drain_events() {
            log::debug!("{event:?}");
        }

        match state.phase {
            GamePhase::LevelComplete => {
                // Spend what we can, cheapest track first, then continue
                let mut upgrades = state.config.upgrades.clone();
                loop {
                    let affordable = nova_strike::UpgradeKind::ALL
                        .iter()
                        .filter_map(|&k| upgrades.next_cost(k).map(|c| (c, k)))
                        .filter(|&(cost, _)| cost <= state.credits)
                        .min_by_key(|&(cost, _)| cost);
                    let Some((cost, kind)) = affordable else { break };
                    state.spend_credits(cost);
                    upgrades.raise(kind);
                    log::info!("bought {} for {cost}", kind.as_str());
                }
                let morale = state.config.morale;
                state.continue_to_next_level(upgrades, morale);

                if let Ok(json) = SaveSnapshot::capture(&state).to_json() {
                    log::debug!("checkpoint: {json}");
                }
            }
            GamePhase::GameOver | GamePhase::Victory => break,
            _ => {}
        }
    }

    println!(
        "finished: {:?} at level {} - score {}, credits {}, {} ticks",
        state.phase, state.level, state.score, state.credits, state.tick_count
    );
}

/// Minimal pilot: dodge toward the widest gap between hostile projectiles,
/// otherwise drift back to center
fn autopilot(state: &GameState) -> TickInput {
    let player = state.player.pos;
    let mut input = TickInput::default();

    let threat = state
        .projectiles
        .iter()
        .filter(|p| !p.from_player && p.pos.y < player.y && (p.pos.x - player.x).abs() < 60.0)
        .map(|p| p.pos)
        .min_by(|a, b| a.y.total_cmp(&b.y));

    let target_x = match threat {
        Some(shot) if shot.x >= player.x => (player.x - 120.0).max(PLAYER_MARGIN),
        Some(_) => (player.x + 120.0).min(state.view().x - PLAYER_MARGIN),
        None => state.view().x / 2.0,
    };

    if (target_x - player.x).abs() > 8.0 {
        input.pointer_active = true;
        input.pointer_origin = player;
        input.pointer = Vec2::new(target_x, player.y);
    }
    input
}
