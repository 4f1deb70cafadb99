//! Entity definitions and per-tick behavior
//!
//! Every entity follows the same two-method contract:
//! - `update(..) -> bool`: advance one tick; true means "remove me this
//!   frame" for a non-damage reason (off-screen exit). Entities that shoot
//!   push into a shared projectile output vec.
//! - `take_damage(amount) -> bool`: subtract health; true means defeated.
//!   Never mutates a collection - the collision resolver owns removal and
//!   reward application.
//!
//! All timers are tick counters; nothing in here reads a clock.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::upgrades::{UpgradeKind, UpgradeLevels};
use crate::{aim_angle, heading, normalize_angle};

use super::collision::Rect;
use super::formula::{self, AsteroidSize, BossAttack, EnemyKind, Morale, PowerUpKind};

/// Player hull half-extents
pub const PLAYER_HALF: Vec2 = Vec2::new(20.0, 20.0);
/// Projectile half-extents
pub const PROJECTILE_HALF: Vec2 = Vec2::new(3.0, 6.0);
/// Powerup capsule half-extent (square)
pub const POWERUP_HALF: f32 = 12.0;
/// Boss hull half-extents
pub const BOSS_HALF: Vec2 = Vec2::new(70.0, 45.0);

/// Ticks of post-hit invulnerability
pub const INVULN_TICKS: u32 = 90;
/// Ticks without damage before shields start regenerating
pub const REGEN_DELAY_TICKS: u32 = 180;
/// Shield points regenerated per second (before morale scaling)
pub const SHIELD_REGEN_PER_SEC: f32 = 10.0;

const ENEMY_SHOT_SPEED: f32 = 300.0;
const HUNTER_SHOT_SPEED: f32 = 320.0;
const BOSS_SHOT_SPEED: f32 = 260.0;
const BOSS_ENTRY_SPEED: f32 = 60.0;
/// On-screen y the boss descends to before fighting
const BOSS_FIGHT_Y: f32 = 110.0;
const BOSS_OSC_FREQ: f32 = 0.02;
const BOSS_OSC_AMPLITUDE: f32 = 250.0;
const BOSS_ATTACK_INTERVAL: u32 = 100;

const ZIGZAG_FREQ: f32 = 0.08;

const PERSISTENT_HOVER: f32 = 180.0;
const CHARGE_INTERVAL: u32 = 90;
const FLANK_INTERVAL: u32 = 150;
const FLANK_OFFSET: f32 = 160.0;
const FLANK_HEIGHT: f32 = 120.0;
const CLOAK_DURATION: u32 = 120;
const CLOAK_COOLDOWN: u32 = 180;
const BURST_SPREAD: f32 = 0.15;

const HOMING_TURN_RATE: f32 = 0.08;
const HOMING_MAX_SPEED: f32 = 340.0;

const POWERUP_FALL_SPEED: f32 = 120.0;

fn enemy_half(kind: EnemyKind) -> Vec2 {
    match kind {
        EnemyKind::Scout => Vec2::splat(14.0),
        EnemyKind::Fighter => Vec2::splat(17.0),
        EnemyKind::Heavy => Vec2::splat(22.0),
    }
}

const HUNTER_HALF: Vec2 = Vec2::new(18.0, 18.0);

/// Special projectile properties. Carried on every projectile; the base
/// resolver honors `piercing` and `homing`, the rest are for weapon mods
/// layered on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialFlags {
    pub explosive: bool,
    pub piercing: bool,
    pub chain: bool,
    pub burn: bool,
    pub homing: bool,
}

/// Equippable weapon archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    Pulse,
    Twin,
    Lance,
}

impl WeaponKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeaponKind::Pulse => "Pulse Cannon",
            WeaponKind::Twin => "Twin Blaster",
            WeaponKind::Lance => "Ion Lance",
        }
    }

    pub fn base_damage(&self) -> f32 {
        match self {
            WeaponKind::Pulse => 10.0,
            WeaponKind::Twin => 7.0,
            WeaponKind::Lance => 16.0,
        }
    }

    pub fn projectile_speed(&self) -> f32 {
        match self {
            WeaponKind::Pulse => 480.0,
            WeaponKind::Twin => 460.0,
            WeaponKind::Lance => 560.0,
        }
    }

    /// Magazine size before ammo scaling; None means unlimited
    pub fn base_ammo(&self) -> Option<u32> {
        match self {
            WeaponKind::Pulse => None,
            WeaponKind::Twin => Some(240),
            WeaponKind::Lance => Some(80),
        }
    }

    pub fn special(&self) -> SpecialFlags {
        match self {
            WeaponKind::Lance => SpecialFlags {
                piercing: true,
                ..SpecialFlags::default()
            },
            _ => SpecialFlags::default(),
        }
    }
}

/// An equipped weapon with its remaining ammo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub ammo: Option<u32>,
}

impl Weapon {
    pub fn pulse() -> Self {
        Self {
            kind: WeaponKind::Pulse,
            ammo: None,
        }
    }

    /// Weapon with its magazine scaled by the ammo-multiplier stat
    pub fn with_ammo_multiplier(kind: WeaponKind, multiplier: f32) -> Self {
        Self {
            kind,
            ammo: kind.base_ammo().map(|n| (n as f32 * multiplier).floor() as u32),
        }
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Self::pulse()
    }
}

/// The player ship. Stats are derived once per level from upgrade levels and
/// morale via the formula layer, then cached here.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub shield: f32,
    pub max_shield: f32,
    pub speed: f32,
    pub weapon: Weapon,
    /// Damage upgrade stat, fed to the hit-damage formula per shot
    pub damage_stat: f32,
    pub morale: Morale,
    /// Shots per second, morale-scaled
    pub fire_rate: f32,
    /// Applied to every credit reward
    pub credit_mult: f32,
    /// Credits per second from the passive-income upgrade
    pub passive_income: f32,
    shield_regen_per_tick: f32,
    pub fire_cooldown: u32,
    pub invuln_ticks: u32,
    /// Ticks since last damage; shields regenerate past the delay
    regen_idle: u32,
}

impl Player {
    /// Build a player from the loadout the upgrade screen hands back
    pub fn from_loadout(
        upgrades: &UpgradeLevels,
        morale: Morale,
        weapon_kind: WeaponKind,
        view: Vec2,
    ) -> Self {
        let m = formula::morale_modifiers(morale);
        let max_health = upgrades.stat_value(UpgradeKind::Health);
        let max_shield = upgrades.stat_value(UpgradeKind::Shield);
        let damage_stat = upgrades.stat_value(UpgradeKind::Damage);
        let ammo_mult = upgrades.stat_value(UpgradeKind::Ammo);
        Self {
            pos: Vec2::new(view.x / 2.0, view.y - 80.0),
            health: max_health,
            max_health,
            shield: max_shield,
            max_shield,
            speed: upgrades.stat_value(UpgradeKind::Speed) * m.speed,
            weapon: Weapon::with_ammo_multiplier(weapon_kind, ammo_mult),
            damage_stat,
            morale,
            fire_rate: upgrades.stat_value(UpgradeKind::FireRate) * m.fire_rate,
            credit_mult: upgrades.stat_value(UpgradeKind::CreditGain) * m.credit_bonus,
            passive_income: upgrades.stat_value(UpgradeKind::PassiveIncome),
            shield_regen_per_tick: SHIELD_REGEN_PER_SEC * m.shield_regen / TICK_RATE as f32,
            fire_cooldown: 0,
            invuln_ticks: 0,
            regen_idle: 0,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, PLAYER_HALF)
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invuln_ticks > 0
    }

    /// Move along `dir` (already normalized or zero) and clamp to the view
    pub fn steer(&mut self, dir: Vec2, view: Vec2) {
        self.pos += dir * self.speed * SIM_DT;
        self.pos.x = self.pos.x.clamp(PLAYER_MARGIN, view.x - PLAYER_MARGIN);
        self.pos.y = self.pos.y.clamp(PLAYER_MARGIN, view.y - PLAYER_MARGIN);
    }

    /// Advance invulnerability, fire cooldown, and shield regeneration
    pub fn tick_timers(&mut self) {
        if self.invuln_ticks > 0 {
            self.invuln_ticks -= 1;
        }
        if self.fire_cooldown > 0 {
            self.fire_cooldown -= 1;
        }
        self.regen_idle = self.regen_idle.saturating_add(1);
        if self.regen_idle >= REGEN_DELAY_TICKS && self.shield < self.max_shield {
            self.shield = (self.shield + self.shield_regen_per_tick).min(self.max_shield);
        }
    }

    /// Shields absorb first, overflow hits the hull. Damage starts the
    /// invulnerability window and resets the regen idle timer.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if amount > 0.0 {
            let absorbed = amount.min(self.shield);
            self.shield -= absorbed;
            self.health -= amount - absorbed;
            self.regen_idle = 0;
            self.invuln_ticks = INVULN_TICKS;
        }
        self.health <= 0.0
    }

    /// Damage of one projectile from the currently equipped weapon
    pub fn shot_damage(&self) -> f32 {
        formula::player_hit_damage(self.weapon.kind.base_damage(), self.damage_stat, self.morale)
            as f32
    }

    /// Fire if the cooldown allows. An emptied magazine reverts to the
    /// pulse cannon before the shot.
    pub fn try_fire(&mut self, shots: &mut Vec<Projectile>) {
        if self.fire_cooldown > 0 {
            return;
        }
        if self.weapon.ammo == Some(0) {
            log::info!("{} empty, reverting to pulse cannon", self.weapon.kind.as_str());
            self.weapon = Weapon::pulse();
        }
        if let Some(ammo) = self.weapon.ammo.as_mut() {
            *ammo -= 1;
        }
        let kind = self.weapon.kind;
        let damage = self.shot_damage();
        let muzzle = self.pos - Vec2::new(0.0, PLAYER_HALF.y);
        let vel = Vec2::new(0.0, -kind.projectile_speed());
        match kind {
            WeaponKind::Twin => {
                for dx in [-10.0, 10.0] {
                    shots.push(Projectile::from_player(
                        muzzle + Vec2::new(dx, 0.0),
                        vel,
                        damage,
                        kind.special(),
                    ));
                }
            }
            _ => {
                shots.push(Projectile::from_player(muzzle, vel, damage, kind.special()));
            }
        }
        self.fire_cooldown = formula::ticks_per_shot(self.fire_rate);
    }
}

/// Enemy movement patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePattern {
    Straight,
    Zigzag,
}

/// A regular enemy ship
#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub speed: f32,
    pub damage: f32,
    pub fire_rate: f32,
    pub pattern: MovePattern,
    pub level: u32,
    move_timer: u32,
    shot_timer: u32,
}

impl Enemy {
    pub fn new(kind: EnemyKind, level: u32, x: f32, pattern: MovePattern) -> Self {
        let stats = formula::enemy_stats(kind, level);
        Self {
            kind,
            pos: Vec2::new(x, -enemy_half(kind).y * 2.0),
            health: stats.health,
            max_health: stats.health,
            speed: stats.speed,
            damage: stats.damage,
            fire_rate: stats.fire_rate,
            pattern,
            level,
            move_timer: 0,
            shot_timer: 0,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, enemy_half(self.kind))
    }

    /// Advance movement and shooting. Returns true once the ship has fallen
    /// past the removal threshold below the viewport.
    pub fn update(&mut self, player_pos: Vec2, view: Vec2, shots: &mut Vec<Projectile>) -> bool {
        self.move_timer += 1;
        self.pos.y += self.speed * SIM_DT;
        if self.pattern == MovePattern::Zigzag {
            let sway = (self.move_timer as f32 * ZIGZAG_FREQ).sin();
            self.pos.x += sway * self.speed * 0.9 * SIM_DT;
            let half = enemy_half(self.kind).x;
            self.pos.x = self.pos.x.clamp(half, view.x - half);
        }

        self.shot_timer += 1;
        if self.shot_timer >= formula::ticks_per_shot(self.fire_rate) {
            self.shot_timer = 0;
            let dir = heading(aim_angle(self.pos, player_pos));
            shots.push(Projectile::hostile(
                self.pos,
                dir * ENEMY_SHOT_SPEED,
                self.damage,
            ));
        }

        self.pos.y > view.y + OFFSCREEN_BOTTOM
    }

    pub fn take_damage(&mut self, amount: f32) -> bool {
        self.health -= amount;
        self.health <= 0.0
    }
}

/// Hunter steering policies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HunterBehavior {
    /// Continuously shadow the player from above
    Persistent,
    /// Periodically charge the player's position
    Aggressive,
    /// Periodically reposition to a lateral offset from the player
    Flanking,
}

impl HunterBehavior {
    /// Hunters hold the field until defeated; no behavior leaves by the
    /// bottom of the screen.
    pub fn despawns_off_screen(&self) -> bool {
        false
    }
}

/// Hunter special abilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HunterSpecial {
    /// Homing projectiles
    Tracker,
    /// Three-shot fixed spread
    Burst,
    /// Periodic no-shoot near-invisibility
    Cloak,
}

/// An elite enemy that escorts the boss threshold
#[derive(Debug, Clone)]
pub struct Hunter {
    pub pos: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub speed: f32,
    pub damage: f32,
    pub fire_rate: f32,
    pub behavior: HunterBehavior,
    pub special: HunterSpecial,
    pub level: u32,
    pub cloaked: bool,
    waypoint: Vec2,
    behavior_timer: u32,
    shot_timer: u32,
    cloak_timer: u32,
}

impl Hunter {
    pub fn new(behavior: HunterBehavior, special: HunterSpecial, level: u32, x: f32) -> Self {
        let stats = formula::hunter_stats(level);
        Self {
            pos: Vec2::new(x, -HUNTER_HALF.y * 2.0),
            health: stats.health,
            max_health: stats.health,
            speed: stats.speed,
            damage: stats.damage,
            fire_rate: stats.fire_rate,
            behavior,
            special,
            level,
            cloaked: false,
            waypoint: Vec2::new(x, 120.0),
            behavior_timer: 0,
            shot_timer: 0,
            cloak_timer: 0,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, HUNTER_HALF)
    }

    pub fn update(&mut self, player_pos: Vec2, view: Vec2, shots: &mut Vec<Projectile>) -> bool {
        self.behavior_timer += 1;

        match self.behavior {
            HunterBehavior::Persistent => {
                self.waypoint = player_pos - Vec2::new(0.0, PERSISTENT_HOVER);
            }
            HunterBehavior::Aggressive => {
                if self.behavior_timer % CHARGE_INTERVAL == 0 {
                    self.waypoint = player_pos;
                }
            }
            HunterBehavior::Flanking => {
                if self.behavior_timer % FLANK_INTERVAL == 0 {
                    let side = if (self.behavior_timer / FLANK_INTERVAL) % 2 == 0 {
                        -1.0
                    } else {
                        1.0
                    };
                    self.waypoint = player_pos + Vec2::new(side * FLANK_OFFSET, -FLANK_HEIGHT);
                }
            }
        }

        let to_waypoint = self.waypoint - self.pos;
        let dist = to_waypoint.length();
        if dist > 4.0 {
            let step = (self.speed * SIM_DT).min(dist);
            self.pos += to_waypoint / dist * step;
        }
        self.pos.x = self.pos.x.clamp(HUNTER_HALF.x, view.x - HUNTER_HALF.x);

        if self.special == HunterSpecial::Cloak {
            self.cloak_timer += 1;
            if self.cloaked {
                if self.cloak_timer >= CLOAK_DURATION {
                    self.cloaked = false;
                    self.cloak_timer = 0;
                }
            } else if self.cloak_timer >= CLOAK_COOLDOWN {
                self.cloaked = true;
                self.cloak_timer = 0;
            }
        }

        if !self.cloaked {
            self.shot_timer += 1;
            if self.shot_timer >= formula::ticks_per_shot(self.fire_rate) {
                self.shot_timer = 0;
                self.fire(player_pos, shots);
            }
        }

        // Per-type lifecycle policy: hunters currently never leave this way
        self.behavior.despawns_off_screen() && self.pos.y > view.y + OFFSCREEN_BOTTOM
    }

    fn fire(&self, player_pos: Vec2, shots: &mut Vec<Projectile>) {
        let angle = aim_angle(self.pos, player_pos);
        match self.special {
            HunterSpecial::Tracker => {
                let mut shot =
                    Projectile::hostile(self.pos, heading(angle) * HUNTER_SHOT_SPEED, self.damage);
                shot.special.homing = true;
                shots.push(shot);
            }
            HunterSpecial::Burst => {
                for offset in [-BURST_SPREAD, 0.0, BURST_SPREAD] {
                    shots.push(Projectile::hostile(
                        self.pos,
                        heading(angle + offset) * HUNTER_SHOT_SPEED,
                        self.damage,
                    ));
                }
            }
            HunterSpecial::Cloak => {
                shots.push(Projectile::hostile(
                    self.pos,
                    heading(angle) * HUNTER_SHOT_SPEED,
                    self.damage,
                ));
            }
        }
    }

    pub fn take_damage(&mut self, amount: f32) -> bool {
        self.health -= amount;
        self.health <= 0.0
    }
}

/// Boss lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossPhase {
    Entering,
    Fighting,
}

/// The level boss. At most one exists at a time; defeat is the only exit.
#[derive(Debug, Clone)]
pub struct Boss {
    pub pos: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub phase: BossPhase,
    pub level: u32,
    base_damage: f32,
    center_x: f32,
    attack_timer: u32,
    osc_timer: u32,
}

impl Boss {
    pub fn new(level: u32, view: Vec2) -> Self {
        let health = formula::boss_health(level) as f32;
        Self {
            pos: Vec2::new(view.x / 2.0, -BOSS_HALF.y),
            health,
            max_health: health,
            phase: BossPhase::Entering,
            level,
            base_damage: 12.0 + 2.0 * level as f32,
            center_x: view.x / 2.0,
            attack_timer: 0,
            osc_timer: 0,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, BOSS_HALF)
    }

    /// Descend, then oscillate and attack on a fixed interval. Never
    /// self-removes; the return value exists to satisfy the shared contract.
    pub fn update(&mut self, player_pos: Vec2, rng: &mut Pcg32, shots: &mut Vec<Projectile>) -> bool {
        match self.phase {
            BossPhase::Entering => {
                self.pos.y += BOSS_ENTRY_SPEED * SIM_DT;
                if self.pos.y >= BOSS_FIGHT_Y {
                    self.pos.y = BOSS_FIGHT_Y;
                    self.phase = BossPhase::Fighting;
                    log::info!("level {} boss engaged", self.level);
                }
            }
            BossPhase::Fighting => {
                self.osc_timer += 1;
                self.pos.x =
                    self.center_x + (self.osc_timer as f32 * BOSS_OSC_FREQ).sin() * BOSS_OSC_AMPLITUDE;

                self.attack_timer += 1;
                if self.attack_timer >= BOSS_ATTACK_INTERVAL {
                    self.attack_timer = 0;
                    let attack = match rng.random_range(0..3) {
                        0 => BossAttack::Spread,
                        1 => BossAttack::Aimed,
                        _ => BossAttack::Circle,
                    };
                    self.fire(attack, player_pos, shots);
                }
            }
        }
        false
    }

    fn fire(&self, attack: BossAttack, player_pos: Vec2, shots: &mut Vec<Projectile>) {
        use std::f32::consts::{FRAC_PI_2, TAU};
        let damage = formula::boss_attack_damage(self.base_damage, attack) as f32;
        let mouth = self.pos + Vec2::new(0.0, BOSS_HALF.y);
        match attack {
            BossAttack::Spread => {
                for offset in [-0.5, -0.25, 0.0, 0.25, 0.5] {
                    shots.push(Projectile::hostile(
                        mouth,
                        heading(FRAC_PI_2 + offset) * BOSS_SHOT_SPEED,
                        damage,
                    ));
                }
            }
            BossAttack::Aimed => {
                let dir = heading(aim_angle(mouth, player_pos));
                shots.push(Projectile::hostile(mouth, dir * BOSS_SHOT_SPEED, damage));
            }
            BossAttack::Circle => {
                for i in 0..8 {
                    let angle = TAU * i as f32 / 8.0;
                    shots.push(Projectile::hostile(
                        self.pos,
                        heading(angle) * BOSS_SHOT_SPEED,
                        damage,
                    ));
                }
            }
        }
    }

    pub fn take_damage(&mut self, amount: f32) -> bool {
        self.health -= amount;
        self.health <= 0.0
    }
}

/// A tumbling rock with a circular collision volume
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub size: AsteroidSize,
    pub pos: Vec2,
    pub radius: f32,
    pub health: f32,
    pub fall_speed: f32,
    pub rotation: f32,
    pub spin: f32,
    pub level: u32,
}

impl Asteroid {
    pub fn new(size: AsteroidSize, level: u32, x: f32, fall_speed: f32, spin: f32) -> Self {
        let radius = size.radius();
        Self {
            size,
            pos: Vec2::new(x, -radius),
            radius,
            health: size.health(),
            fall_speed,
            rotation: 0.0,
            spin,
            level,
        }
    }

    /// Fall and tumble; removed once fully below the viewport
    pub fn update(&mut self, view: Vec2) -> bool {
        self.pos.y += self.fall_speed * SIM_DT;
        self.rotation += self.spin * SIM_DT;
        self.pos.y - self.radius > view.y
    }

    pub fn take_damage(&mut self, amount: f32) -> bool {
        self.health -= amount;
        self.health <= 0.0
    }
}

/// A projectile from either side
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: f32,
    pub from_player: bool,
    pub special: SpecialFlags,
}

impl Projectile {
    pub fn from_player(pos: Vec2, vel: Vec2, damage: f32, special: SpecialFlags) -> Self {
        Self {
            pos,
            vel,
            damage,
            from_player: true,
            special,
        }
    }

    pub fn hostile(pos: Vec2, vel: Vec2, damage: f32) -> Self {
        Self {
            pos,
            vel,
            damage,
            from_player: false,
            special: SpecialFlags::default(),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, PROJECTILE_HALF)
    }

    /// Linear motion, with homing re-aim when flagged. Removed outside the
    /// viewport margin on any edge.
    pub fn update(&mut self, homing_target: Option<Vec2>, view: Vec2) -> bool {
        if self.special.homing {
            if let Some(target) = homing_target {
                let current = self.vel.y.atan2(self.vel.x);
                let desired = aim_angle(self.pos, target);
                let delta =
                    normalize_angle(desired - current).clamp(-HOMING_TURN_RATE, HOMING_TURN_RATE);
                let speed = self.vel.length().min(HOMING_MAX_SPEED);
                self.vel = heading(current + delta) * speed;
            }
        }
        self.pos += self.vel * SIM_DT;

        let m = PROJECTILE_MARGIN;
        self.pos.x < -m || self.pos.x > view.x + m || self.pos.y < -m || self.pos.y > view.y + m
    }
}

/// A falling restorative drop
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub pos: Vec2,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, pos: Vec2) -> Self {
        Self { kind, pos }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(POWERUP_HALF))
    }

    pub fn update(&mut self, view: Vec2) -> bool {
        self.pos.y += POWERUP_FALL_SPEED * SIM_DT;
        self.pos.y - POWERUP_HALF > view.y
    }
}
