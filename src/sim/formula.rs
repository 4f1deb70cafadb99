//! Stat and reward formulas
//!
//! Pure functions over immutable base-constant tables. Everything the game
//! shows as a number (health bars, damage, costs, rewards) is derived here
//! from upgrade levels, the game level, and the morale state. No function in
//! this module reads or writes any state, so every value is golden-testable.

use serde::{Deserialize, Serialize};

use crate::consts::TICK_RATE;
use crate::upgrades::UpgradeKind;

/// Player stats the upgrade system can raise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStat {
    Health,
    Shield,
    Damage,
    FireRate,
    Speed,
    AmmoMultiplier,
    CreditMultiplier,
    PassiveIncome,
}

/// Regular enemy hull types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Scout,
    Fighter,
    Heavy,
}

/// Derived combat stats for an enemy or hunter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub health: f32,
    pub damage: f32,
    pub speed: f32,
    /// Shots per second; deliberately not level-scaled
    pub fire_rate: f32,
}

/// Boss attack patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossAttack {
    Spread,
    Aimed,
    Circle,
}

/// Asteroid size classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidSize {
    Small,
    Medium,
    Large,
}

impl AsteroidSize {
    pub fn radius(&self) -> f32 {
        match self {
            AsteroidSize::Small => 14.0,
            AsteroidSize::Medium => 24.0,
            AsteroidSize::Large => 38.0,
        }
    }

    pub fn health(&self) -> f32 {
        match self {
            AsteroidSize::Small => 10.0,
            AsteroidSize::Medium => 25.0,
            AsteroidSize::Large => 50.0,
        }
    }
}

/// Reward-granting entity categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardSource {
    Scout,
    Fighter,
    Heavy,
    Hunter,
    Boss,
    Asteroid(AsteroidSize),
}

impl From<EnemyKind> for RewardSource {
    fn from(kind: EnemyKind) -> Self {
        match kind {
            EnemyKind::Scout => RewardSource::Scout,
            EnemyKind::Fighter => RewardSource::Fighter,
            EnemyKind::Heavy => RewardSource::Heavy,
        }
    }
}

/// Powerup drop types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    Health,
    Shield,
}

/// Family-welfare morale state; multiplicatively modifies player combat stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Morale {
    Starving,
    Worried,
    #[default]
    Hopeful,
    Grateful,
    Proud,
}

/// Multiplicative stat factors for a morale tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoraleModifiers {
    pub damage: f32,
    pub speed: f32,
    pub fire_rate: f32,
    pub shield_regen: f32,
    pub credit_bonus: f32,
}

/// Base value and per-level increment for each player stat
const fn player_base(stat: PlayerStat) -> (f32, f32) {
    match stat {
        PlayerStat::Health => (100.0, 20.0),
        PlayerStat::Shield => (50.0, 15.0),
        PlayerStat::Damage => (10.0, 2.0),
        PlayerStat::FireRate => (2.0, 0.25),
        PlayerStat::Speed => (250.0, 15.0),
        PlayerStat::AmmoMultiplier => (1.0, 0.1),
        PlayerStat::CreditMultiplier => (1.0, 0.1),
        PlayerStat::PassiveIncome => (0.0, 5.0),
    }
}

/// Linear player stat: `base + level * increment`
///
/// No upper bound is enforced here; callers clamp the level to the upgrade's
/// max before asking.
pub fn player_stat(stat: PlayerStat, upgrade_level: u32) -> f32 {
    let (base, increment) = player_base(stat);
    base + upgrade_level as f32 * increment
}

/// Purchase price for the next level of an upgrade:
/// `floor(base_cost * multiplier^current_level)`
///
/// Strictly increasing in `current_level` for every kind.
pub fn upgrade_cost(kind: UpgradeKind, current_level: u32) -> u64 {
    let (base, mult): (f64, f64) = match kind {
        UpgradeKind::Health => (100.0, 1.5),
        UpgradeKind::Shield => (120.0, 1.5),
        UpgradeKind::Damage => (150.0, 1.6),
        UpgradeKind::FireRate => (180.0, 1.6),
        UpgradeKind::Speed => (80.0, 1.4),
        UpgradeKind::Ammo => (90.0, 1.45),
        UpgradeKind::CreditGain => (200.0, 1.7),
        UpgradeKind::PassiveIncome => (250.0, 1.8),
    };
    (base * mult.powi(current_level as i32)).floor() as u64
}

/// Per-level scaling rates, independent per stat
const HEALTH_SCALE_RATE: f32 = 0.25;
const DAMAGE_SCALE_RATE: f32 = 0.15;
const SPEED_SCALE_RATE: f32 = 0.05;

fn scale(base: f32, level: u32, rate: f32) -> f32 {
    let level = level.max(1);
    base * (1.0 + (level - 1) as f32 * rate)
}

/// Combat stats for a regular enemy at a game level.
///
/// Health/damage/speed scale with level; fire rate does not. Level 0 is
/// clamped to level 1.
pub fn enemy_stats(kind: EnemyKind, level: u32) -> EnemyStats {
    let (health, damage, speed, fire_rate) = match kind {
        EnemyKind::Scout => (10.0, 5.0, 120.0, 0.8),
        EnemyKind::Fighter => (25.0, 10.0, 90.0, 1.2),
        EnemyKind::Heavy => (60.0, 18.0, 55.0, 0.6),
    };
    EnemyStats {
        health: scale(health, level, HEALTH_SCALE_RATE),
        damage: scale(damage, level, DAMAGE_SCALE_RATE),
        speed: scale(speed, level, SPEED_SCALE_RATE),
        fire_rate,
    }
}

/// Combat stats for a hunter (elite) at a game level; same scaling rule
pub fn hunter_stats(level: u32) -> EnemyStats {
    EnemyStats {
        health: scale(80.0, level, HEALTH_SCALE_RATE),
        damage: scale(12.0, level, DAMAGE_SCALE_RATE),
        speed: scale(140.0, level, SPEED_SCALE_RATE),
        fire_rate: 1.5,
    }
}

/// Hand-tuned boss health curve for levels 1-10
const BOSS_HEALTH: [u32; 10] = [
    500, 900, 1500, 2300, 3400, 4800, 6600, 8800, 11500, 15000,
];

/// Boss health table lookup; out-of-range levels clamp to the level-1 value
pub fn boss_health(level: u32) -> u32 {
    if (1..=10).contains(&level) {
        BOSS_HEALTH[(level - 1) as usize]
    } else {
        BOSS_HEALTH[0]
    }
}

/// Boss projectile damage: fixed percentage modifier per attack pattern
pub fn boss_attack_damage(base_damage: f32, attack: BossAttack) -> u32 {
    let modifier = match attack {
        BossAttack::Spread => 0.7,
        BossAttack::Aimed => 1.0,
        BossAttack::Circle => 0.5,
    };
    (base_damage * modifier).floor() as u32
}

const CREDIT_BASE: f64 = 10.0;
const SCORE_BASE: f64 = 100.0;

fn source_multiplier(source: RewardSource) -> f64 {
    match source {
        RewardSource::Scout => 1.0,
        RewardSource::Fighter => 2.0,
        RewardSource::Heavy => 4.0,
        RewardSource::Hunter => 7.5,
        RewardSource::Boss => 50.0,
        RewardSource::Asteroid(AsteroidSize::Small) => 0.5,
        RewardSource::Asteroid(AsteroidSize::Medium) => 1.0,
        RewardSource::Asteroid(AsteroidSize::Large) => 2.0,
    }
}

/// Credits granted for destroying a source at a game level
pub fn credit_reward(source: RewardSource, level: u32) -> u64 {
    let level_mult = 1.0 + (level.max(1) - 1) as f64 * 0.2;
    (CREDIT_BASE * source_multiplier(source) * level_mult).floor() as u64
}

/// Score granted for destroying a source at a game level
pub fn score_reward(source: RewardSource, level: u32) -> u64 {
    let level_mult = 1.0 + (level.max(1) - 1) as f64 * 0.25;
    (SCORE_BASE * source_multiplier(source) * level_mult).floor() as u64
}

/// Restore amount applied when the player collects a powerup
pub fn powerup_restore(kind: PowerUpKind) -> f32 {
    match kind {
        PowerUpKind::Health => 30.0,
        PowerUpKind::Shield => 25.0,
    }
}

/// Score bonus for collecting any powerup
pub const POWERUP_SCORE: u64 = 50;

/// Stat factors per morale tier. Hopeful is the neutral tier and the
/// fallback for any state the narrative layer adds later.
pub fn morale_modifiers(morale: Morale) -> MoraleModifiers {
    match morale {
        Morale::Starving => MoraleModifiers {
            damage: 0.85,
            speed: 0.90,
            fire_rate: 0.85,
            shield_regen: 0.70,
            credit_bonus: 1.00,
        },
        Morale::Worried => MoraleModifiers {
            damage: 0.95,
            speed: 0.95,
            fire_rate: 0.95,
            shield_regen: 0.85,
            credit_bonus: 1.00,
        },
        Morale::Hopeful => MoraleModifiers {
            damage: 1.0,
            speed: 1.0,
            fire_rate: 1.0,
            shield_regen: 1.0,
            credit_bonus: 1.0,
        },
        Morale::Grateful => MoraleModifiers {
            damage: 1.05,
            speed: 1.05,
            fire_rate: 1.05,
            shield_regen: 1.10,
            credit_bonus: 1.10,
        },
        Morale::Proud => MoraleModifiers {
            damage: 1.15,
            speed: 1.10,
            fire_rate: 1.10,
            shield_regen: 1.25,
            credit_bonus: 1.20,
        },
    }
}

/// Damage per player hit: `floor(weapon_base * (damage_stat / 10) * morale)`
///
/// At zero upgrades the damage stat is 10, so the multiplier is exactly 1
/// and a base-10 weapon deals 10 per hit.
pub fn player_hit_damage(weapon_base: f32, damage_stat: f32, morale: Morale) -> u32 {
    let factor = morale_modifiers(morale).damage;
    (weapon_base * (damage_stat / 10.0) * factor).floor() as u32
}

/// Ticks between shots for a fire rate in shots per second
pub fn ticks_per_shot(fire_rate: f32) -> u32 {
    (TICK_RATE as f32 / fire_rate.max(0.01)).round().max(1.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_stat_baseline() {
        assert_eq!(player_stat(PlayerStat::Health, 0), 100.0);
        assert_eq!(player_stat(PlayerStat::Damage, 0), 10.0);
        assert_eq!(player_stat(PlayerStat::Damage, 3), 16.0);
    }

    #[test]
    fn test_upgrade_cost_monotonic() {
        for kind in UpgradeKind::ALL {
            for level in 0..kind.max_level() {
                assert!(
                    upgrade_cost(kind, level + 1) > upgrade_cost(kind, level),
                    "{kind:?} cost not strictly increasing at level {level}"
                );
            }
        }
    }

    #[test]
    fn test_enemy_stats_monotonic() {
        let base = enemy_stats(EnemyKind::Heavy, 1).health;
        for level in 1..=10 {
            assert!(enemy_stats(EnemyKind::Heavy, level).health >= base);
        }
    }

    #[test]
    fn test_enemy_fire_rate_unscaled() {
        assert_eq!(
            enemy_stats(EnemyKind::Fighter, 1).fire_rate,
            enemy_stats(EnemyKind::Fighter, 10).fire_rate
        );
    }

    #[test]
    fn test_enemy_level_zero_clamps() {
        assert_eq!(enemy_stats(EnemyKind::Scout, 0), enemy_stats(EnemyKind::Scout, 1));
    }

    #[test]
    fn test_boss_health_golden() {
        assert_eq!(boss_health(1), 500);
        assert_eq!(boss_health(10), 15000);
    }

    #[test]
    fn test_boss_health_out_of_range() {
        assert_eq!(boss_health(0), boss_health(1));
        assert_eq!(boss_health(11), boss_health(1));
    }

    #[test]
    fn test_boss_attack_modifiers() {
        assert_eq!(boss_attack_damage(20.0, BossAttack::Spread), 14);
        assert_eq!(boss_attack_damage(20.0, BossAttack::Aimed), 20);
        assert_eq!(boss_attack_damage(20.0, BossAttack::Circle), 10);
    }

    #[test]
    fn test_baseline_hit_damage() {
        // Zero damage upgrade, weapon base 10: floor(10 * (10/10)) = 10
        let stat = player_stat(PlayerStat::Damage, 0);
        assert_eq!(player_hit_damage(10.0, stat, Morale::Hopeful), 10);
    }

    #[test]
    fn test_morale_neutral_tier() {
        let m = morale_modifiers(Morale::Hopeful);
        assert_eq!(m.damage, 1.0);
        assert_eq!(m.shield_regen, 1.0);
        assert_eq!(Morale::default(), Morale::Hopeful);
    }

    #[test]
    fn test_ticks_per_shot() {
        assert_eq!(ticks_per_shot(2.0), 30);
        assert_eq!(ticks_per_shot(0.0), 6000);
    }
}
