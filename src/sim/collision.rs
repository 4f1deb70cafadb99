//! Collision detection and resolution
//!
//! One pass per tick, after all entity updates. Ship-like entities and
//! projectiles use axis-aligned rectangle overlap; asteroids use their
//! circular volume. Category order is fixed and a player projectile scores
//! against at most one target per tick. Removals are collected as index
//! lists during the scan and applied afterward in descending order, so the
//! collections are never mutated mid-iteration.

use glam::Vec2;
use rand::Rng;

use super::entity::PowerUp;
use super::formula::{self, PowerUpKind, RewardSource};
use super::spawn::LEVEL_CLEAR_DELAY_TICKS;
use super::state::{GameEvent, GameState};

/// Damage multiplier when an enemy hull rams the player
const BODY_CRASH_MULT: f32 = 2.0;
/// Flat damage for brushing an asteroid
const ASTEROID_BODY_DAMAGE: f32 = 15.0;
/// Chance a destroyed enemy or hunter drops a powerup
const POWERUP_DROP_CHANCE: f64 = 0.12;

/// Axis-aligned bounding rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_center(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Circle-vs-rectangle test via the closest point on the rectangle
#[inline]
pub fn circle_hits_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = center.clamp(rect.min, rect.max);
    center.distance_squared(closest) <= radius * radius
}

/// Resolve every collision category for this tick
pub fn resolve(state: &mut GameState) {
    let player_bounds = state.player.bounds();
    let level = state.level;

    let mut dead_shots: Vec<usize> = Vec::new();
    let mut dead_enemies: Vec<usize> = Vec::new();
    let mut dead_hunters: Vec<usize> = Vec::new();
    let mut dead_asteroids: Vec<usize> = Vec::new();
    let mut boss_defeated = false;

    // 1. Hostile projectiles vs player. The whole category is skipped while
    // invulnerable, so those projectiles survive the frame. A hit grants
    // invulnerability immediately, ending the category for this tick.
    if !state.player.is_invulnerable() {
        for (i, shot) in state.projectiles.iter().enumerate() {
            if shot.from_player {
                continue;
            }
            if shot.bounds().overlaps(&player_bounds) {
                dead_shots.push(i);
                state.player.take_damage(shot.damage);
                state.events.push(GameEvent::PlayerDamaged {
                    amount: shot.damage as u32,
                });
                break;
            }
        }
    }

    // 2. Player projectiles vs enemies, hunters, boss, asteroids - fixed
    // order, first hit consumes the projectile (piercing shots survive but
    // still score at most once per tick).
    for (i, shot) in state.projectiles.iter().enumerate() {
        if !shot.from_player {
            continue;
        }
        let bounds = shot.bounds();
        let mut consumed = false;

        for (j, enemy) in state.enemies.iter_mut().enumerate() {
            if dead_enemies.contains(&j) {
                continue;
            }
            if bounds.overlaps(&enemy.bounds()) {
                if enemy.take_damage(shot.damage) {
                    dead_enemies.push(j);
                }
                consumed = true;
                break;
            }
        }

        if !consumed {
            for (j, hunter) in state.hunters.iter_mut().enumerate() {
                if dead_hunters.contains(&j) {
                    continue;
                }
                if bounds.overlaps(&hunter.bounds()) {
                    if hunter.take_damage(shot.damage) {
                        dead_hunters.push(j);
                    }
                    consumed = true;
                    break;
                }
            }
        }

        if !consumed && !boss_defeated {
            if let Some(boss) = state.boss.as_mut() {
                if bounds.overlaps(&boss.bounds()) {
                    if boss.take_damage(shot.damage) {
                        boss_defeated = true;
                    }
                    consumed = true;
                }
            }
        }

        if !consumed {
            for (j, asteroid) in state.asteroids.iter_mut().enumerate() {
                if dead_asteroids.contains(&j) {
                    continue;
                }
                if circle_hits_rect(asteroid.pos, asteroid.radius, &bounds) {
                    if asteroid.take_damage(shot.damage) {
                        dead_asteroids.push(j);
                    }
                    consumed = true;
                    break;
                }
            }
        }

        if consumed && !shot.special.piercing {
            dead_shots.push(i);
        }
    }

    // 3. Player body vs enemies: double the enemy's damage stat, and the
    // collision destroys the enemy outright.
    if !state.player.is_invulnerable() {
        for (j, enemy) in state.enemies.iter().enumerate() {
            if dead_enemies.contains(&j) {
                continue;
            }
            if player_bounds.overlaps(&enemy.bounds()) {
                let amount = enemy.damage * BODY_CRASH_MULT;
                state.player.take_damage(amount);
                state.events.push(GameEvent::PlayerDamaged {
                    amount: amount as u32,
                });
                dead_enemies.push(j);
                break;
            }
        }
    }

    // 4. Player body vs asteroids: flat damage, the rock survives
    if !state.player.is_invulnerable() {
        for asteroid in state.asteroids.iter() {
            if circle_hits_rect(asteroid.pos, asteroid.radius, &player_bounds) {
                state.player.take_damage(ASTEROID_BODY_DAMAGE);
                state.events.push(GameEvent::PlayerDamaged {
                    amount: ASTEROID_BODY_DAMAGE as u32,
                });
                break;
            }
        }
    }

    // 5. Player vs powerups: never gated by invulnerability
    let mut collected: Vec<usize> = Vec::new();
    for (j, powerup) in state.powerups.iter().enumerate() {
        if powerup.bounds().overlaps(&player_bounds) {
            collected.push(j);
        }
    }
    for &j in &collected {
        let kind = state.powerups[j].kind;
        let restore = formula::powerup_restore(kind);
        match kind {
            PowerUpKind::Health => {
                state.player.health =
                    (state.player.health + restore).min(state.player.max_health);
            }
            PowerUpKind::Shield => {
                state.player.shield =
                    (state.player.shield + restore).min(state.player.max_shield);
            }
        }
        state.score += formula::POWERUP_SCORE;
        state.events.push(GameEvent::PowerUpCollected {
            kind,
            score: formula::POWERUP_SCORE,
        });
    }

    // Apply all removals in descending index order so earlier indices stay
    // valid, granting rewards as entities leave.
    for i in collected.into_iter().rev() {
        state.powerups.remove(i);
    }

    dead_shots.sort_unstable();
    for i in dead_shots.into_iter().rev() {
        state.projectiles.remove(i);
    }

    dead_enemies.sort_unstable();
    for j in dead_enemies.into_iter().rev() {
        let enemy = state.enemies.remove(j);
        state.director.record_kill();
        let credits = grant_rewards(state, enemy.kind.into(), level);
        state.events.push(GameEvent::EnemyKilled {
            kind: enemy.kind,
            credits,
            score: formula::score_reward(enemy.kind.into(), level),
            pos: enemy.pos,
        });
        roll_drop(state, enemy.pos);
    }

    dead_hunters.sort_unstable();
    for j in dead_hunters.into_iter().rev() {
        let hunter = state.hunters.remove(j);
        state.director.record_kill();
        let credits = grant_rewards(state, RewardSource::Hunter, level);
        state.events.push(GameEvent::HunterKilled {
            credits,
            score: formula::score_reward(RewardSource::Hunter, level),
            pos: hunter.pos,
        });
        roll_drop(state, hunter.pos);
    }

    dead_asteroids.sort_unstable();
    for j in dead_asteroids.into_iter().rev() {
        let asteroid = state.asteroids.remove(j);
        let source = RewardSource::Asteroid(asteroid.size);
        let credits = grant_rewards(state, source, level);
        state.events.push(GameEvent::AsteroidDestroyed {
            size: asteroid.size,
            credits,
            score: formula::score_reward(source, level),
            pos: asteroid.pos,
        });
    }

    if boss_defeated {
        on_boss_defeated(state);
    }
}

/// Credits (multiplier-scaled) and score for a destroyed source
fn grant_rewards(state: &mut GameState, source: RewardSource, level: u32) -> u64 {
    let credits =
        (formula::credit_reward(source, level) as f64 * state.player.credit_mult as f64) as u64;
    state.credits += credits;
    state.score += formula::score_reward(source, level);
    credits
}

fn roll_drop(state: &mut GameState, pos: Vec2) {
    if state.rng.random_bool(POWERUP_DROP_CHANCE) {
        let kind = if state.rng.random_bool(0.5) {
            PowerUpKind::Health
        } else {
            PowerUpKind::Shield
        };
        state.powerups.push(PowerUp::new(kind, pos));
    }
}

/// Boss down: set the per-level guard, pay out, drop the reward powerup,
/// and start the delayed level-complete transition.
fn on_boss_defeated(state: &mut GameState) {
    let Some(boss) = state.boss.take() else {
        return;
    };
    let level = state.level;
    state.director.boss_defeated = true;
    state.director.level_clear_timer = Some(LEVEL_CLEAR_DELAY_TICKS);

    let credits = grant_rewards(state, RewardSource::Boss, level);
    state.events.push(GameEvent::BossDefeated {
        level,
        credits,
        score: formula::score_reward(RewardSource::Boss, level),
        pos: boss.pos,
    });

    let kind = if state.rng.random_bool(0.5) {
        PowerUpKind::Health
    } else {
        PowerUpKind::Shield
    };
    state.powerups.push(PowerUp::new(kind, boss.pos));
    log::info!("level {level} boss defeated, {credits} credits awarded");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Boss, Enemy, Hunter, HunterBehavior, HunterSpecial, MovePattern,
        Projectile, SpecialFlags};
    use crate::sim::formula::EnemyKind;
    use crate::sim::state::SimConfig;

    fn state() -> GameState {
        GameState::new(SimConfig::default(), 42)
    }

    fn enemy_at(pos: Vec2) -> Enemy {
        let mut enemy = Enemy::new(EnemyKind::Scout, 1, pos.x, MovePattern::Straight);
        enemy.pos = pos;
        enemy
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::from_center(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Rect::from_center(Vec2::new(15.0, 0.0), Vec2::splat(10.0));
        let c = Rect::from_center(Vec2::new(30.0, 0.0), Vec2::splat(4.0));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_circle_hits_rect() {
        let rect = Rect::from_center(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        assert!(circle_hits_rect(Vec2::new(15.0, 0.0), 6.0, &rect));
        assert!(!circle_hits_rect(Vec2::new(20.0, 0.0), 6.0, &rect));
    }

    #[test]
    fn test_projectile_hits_at_most_one_target() {
        let mut state = state();
        let pos = Vec2::new(200.0, 200.0);
        state.enemies.push(enemy_at(pos));
        state.enemies.push(enemy_at(pos));
        state
            .projectiles
            .push(Projectile::from_player(pos, Vec2::ZERO, 10.0, SpecialFlags::default()));

        resolve(&mut state);

        // Scout health is 10: exactly one of the stacked enemies dies
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].health, state.enemies[0].max_health);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_scout_killed_awards_credits() {
        let mut state = state();
        let pos = Vec2::new(200.0, 200.0);
        state.enemies.push(enemy_at(pos));
        state
            .projectiles
            .push(Projectile::from_player(pos, Vec2::ZERO, 10.0, SpecialFlags::default()));

        resolve(&mut state);

        assert!(state.enemies.is_empty());
        assert_eq!(state.credits, formula::credit_reward(RewardSource::Scout, 1));
        assert_eq!(state.director.kill_count, 1);
        assert!(matches!(
            state.events.iter().find(|e| matches!(e, GameEvent::EnemyKilled { .. })),
            Some(GameEvent::EnemyKilled { kind: EnemyKind::Scout, .. })
        ));
    }

    #[test]
    fn test_invulnerable_player_shot_survives() {
        let mut state = state();
        state.player.take_damage(1.0); // starts the invulnerability window
        let health = state.player.health;
        let shield = state.player.shield;
        state
            .projectiles
            .push(Projectile::hostile(state.player.pos, Vec2::ZERO, 10.0));

        resolve(&mut state);

        // Category skipped: no damage, and the projectile is still there
        assert_eq!(state.player.health, health);
        assert_eq!(state.player.shield, shield);
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_hostile_shot_damages_and_is_removed() {
        let mut state = state();
        state
            .projectiles
            .push(Projectile::hostile(state.player.pos, Vec2::ZERO, 10.0));

        resolve(&mut state);

        assert_eq!(state.player.shield, state.player.max_shield - 10.0);
        assert!(state.projectiles.is_empty());
        assert!(state.player.is_invulnerable());
    }

    #[test]
    fn test_body_crash_double_damage() {
        let mut state = state();
        let enemy = enemy_at(state.player.pos);
        let expected = enemy.damage * BODY_CRASH_MULT;
        state.enemies.push(enemy);

        resolve(&mut state);

        assert!(state.enemies.is_empty(), "crash destroys the enemy");
        let absorbed = state.player.max_shield - state.player.shield;
        assert_eq!(absorbed, expected);
        assert_eq!(state.director.kill_count, 1);
    }

    #[test]
    fn test_asteroid_brush_leaves_asteroid() {
        let mut state = state();
        let mut asteroid = crate::sim::entity::Asteroid::new(
            crate::sim::formula::AsteroidSize::Large,
            1,
            state.player.pos.x,
            80.0,
            0.5,
        );
        asteroid.pos = state.player.pos;
        state.asteroids.push(asteroid);

        resolve(&mut state);

        assert_eq!(state.asteroids.len(), 1);
        let absorbed = state.player.max_shield - state.player.shield;
        assert_eq!(absorbed, ASTEROID_BODY_DAMAGE);
    }

    #[test]
    fn test_powerup_collected_while_invulnerable() {
        let mut state = state();
        state.player.take_damage(20.0);
        let shield_after_hit = state.player.shield;
        state
            .powerups
            .push(PowerUp::new(PowerUpKind::Shield, state.player.pos));

        resolve(&mut state);

        assert!(state.powerups.is_empty());
        assert!(state.player.shield > shield_after_hit);
        assert_eq!(state.score, formula::POWERUP_SCORE);
    }

    #[test]
    fn test_boss_defeat_sets_guard_and_schedules_clear() {
        let mut state = state();
        let mut boss = Boss::new(1, state.view());
        boss.pos = Vec2::new(400.0, 110.0);
        boss.health = 5.0;
        state.boss = Some(boss);
        state.projectiles.push(Projectile::from_player(
            Vec2::new(400.0, 110.0),
            Vec2::ZERO,
            10.0,
            SpecialFlags::default(),
        ));

        resolve(&mut state);

        assert!(state.boss.is_none());
        assert!(state.director.boss_defeated);
        assert_eq!(state.director.level_clear_timer, Some(LEVEL_CLEAR_DELAY_TICKS));
        assert_eq!(state.powerups.len(), 1, "boss drops a reward powerup");
        assert!(state.credits > 0);
    }

    #[test]
    fn test_piercing_shot_survives_hit() {
        let mut state = state();
        let pos = Vec2::new(200.0, 200.0);
        state.enemies.push(enemy_at(pos));
        let special = SpecialFlags {
            piercing: true,
            ..SpecialFlags::default()
        };
        state
            .projectiles
            .push(Projectile::from_player(pos, Vec2::ZERO, 10.0, special));

        resolve(&mut state);

        assert!(state.enemies.is_empty());
        assert_eq!(state.projectiles.len(), 1, "piercing shot is not consumed");
    }

    #[test]
    fn test_dead_hunter_removed_once() {
        let mut state = state();
        let pos = Vec2::new(300.0, 200.0);
        let mut hunter = Hunter::new(HunterBehavior::Persistent, HunterSpecial::Burst, 1, pos.x);
        hunter.pos = pos;
        hunter.health = 5.0;
        state.hunters.push(hunter);
        // Two shots on the same tick; the second must not double-process
        for _ in 0..2 {
            state
                .projectiles
                .push(Projectile::from_player(pos, Vec2::ZERO, 10.0, SpecialFlags::default()));
        }

        resolve(&mut state);

        assert!(state.hunters.is_empty());
        assert_eq!(state.director.kill_count, 1);
    }
}
