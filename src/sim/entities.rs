//! Secondary entities: platforms, coins, enemies, particles
//!
//! Each advances independently and knows nothing about the others.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, Body};
use crate::consts::*;

/// Platform variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformKind {
    /// Full-width floor of the initial layout
    Ground,
    Plain,
    /// Relaunches the player on landing
    Spring,
    /// Slides horizontally, bouncing off the canvas edges
    Moving,
}

/// A solid platform drifting down the screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: PlatformKind,
    /// x: horizontal slide, y: scroll drift (pixels per tick)
    pub vel: Vec2,
    /// Jump impulse multiplier; > 1 makes a spring
    pub bounciness: f32,
}

impl Platform {
    fn with_kind(pos: Vec2, size: Vec2, kind: PlatformKind) -> Self {
        Self {
            pos,
            size,
            kind,
            vel: Vec2::new(0.0, PLATFORM_DRIFT),
            bounciness: 1.0,
        }
    }

    pub fn ground(canvas_width: f32, canvas_height: f32) -> Self {
        Self::with_kind(
            Vec2::new(0.0, canvas_height - GROUND_HEIGHT),
            Vec2::new(canvas_width, GROUND_HEIGHT),
            PlatformKind::Ground,
        )
    }

    pub fn plain(pos: Vec2, width: f32) -> Self {
        Self::with_kind(pos, Vec2::new(width, PLATFORM_HEIGHT), PlatformKind::Plain)
    }

    pub fn spring(pos: Vec2, width: f32) -> Self {
        Self {
            bounciness: SPRING_BOUNCINESS,
            ..Self::with_kind(pos, Vec2::new(width, PLATFORM_HEIGHT), PlatformKind::Spring)
        }
    }

    pub fn moving(pos: Vec2, width: f32, speed_x: f32) -> Self {
        let mut platform = Self::with_kind(pos, Vec2::new(width, PLATFORM_HEIGHT), PlatformKind::Moving);
        platform.vel.x = speed_x;
        platform
    }

    pub fn update(&mut self, canvas_width: f32) {
        self.pos.x += self.vel.x;

        if self.vel.x != 0.0 && (self.pos.x < 0.0 || self.pos.x + self.size.x > canvas_width) {
            self.vel.x = -self.vel.x;
        }

        self.pos.y += self.vel.y;
    }

    pub fn is_spring(&self) -> bool {
        self.bounciness > 1.0
    }
}

impl Body for Platform {
    fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A floating, spinning coin
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    pub size: Vec2,
    /// Cosmetic vertical offset (not part of the collision box)
    pub float_offset: f32,
    pub rotation: f32,
}

impl Coin {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::splat(COIN_SIZE),
            float_offset: 0.0,
            rotation: 0.0,
        }
    }

    /// Float follows the wall clock so it is independent of frame rate
    pub fn update(&mut self, wall_clock_ms: f64) {
        self.float_offset = (wall_clock_ms * COIN_FLOAT_SPEED).sin() as f32 * COIN_FLOAT_AMPLITUDE;
        self.rotation += COIN_SPIN;
    }
}

impl Body for Coin {
    fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A hostile walker crossing the screen from one side
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    /// +1 moving right, -1 moving left
    pub direction: f32,
}

impl Enemy {
    /// Direction is fixed by the side it enters from
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            size: Vec2::splat(ENEMY_SIZE),
            speed,
            direction: if pos.x < 0.0 { 1.0 } else { -1.0 },
        }
    }

    pub fn update(&mut self, wall_clock_ms: f64) {
        self.pos.x += self.speed * self.direction;
        self.pos.y += (wall_clock_ms * ENEMY_BOB_RATE).sin() as f32 * ENEMY_BOB_AMPLITUDE;
    }

    pub fn in_bounds(&self, canvas_width: f32) -> bool {
        self.pos.x > -ENEMY_CULL_MARGIN && self.pos.x < canvas_width + ENEMY_CULL_MARGIN
    }
}

impl Body for Enemy {
    fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// What produced a particle burst (drives its color)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BurstKind {
    Coin,
    Enemy,
}

/// A particle for visual effects
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub kind: BurstKind,
    /// Ticks left
    pub life: f32,
}

impl Particle {
    pub fn new(pos: Vec2, kind: BurstKind, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            vel: Vec2::new(
                rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
                rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
            ),
            size: PARTICLE_MIN_SIZE + rng.random::<f32>() * PARTICLE_SIZE_RANGE,
            kind,
            life: PARTICLE_LIFE,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.life -= 1.0;
        self.size *= PARTICLE_DECAY;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    pub fn alpha(&self) -> f32 {
        (self.life / PARTICLE_LIFE).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_platform_drifts_down() {
        let mut platform = Platform::plain(Vec2::new(100.0, 50.0), 120.0);
        platform.update(800.0);
        assert_eq!(platform.pos, Vec2::new(100.0, 51.0));
    }

    #[test]
    fn test_moving_platform_bounces_off_edges() {
        let mut platform = Platform::moving(Vec2::new(699.5, 0.0), 100.0, 1.0);
        platform.update(800.0);
        // Fully past the right edge: reversed
        assert_eq!(platform.vel.x, -1.0);
        platform.update(800.0);
        assert_eq!(platform.pos.x, 699.5);

        let mut platform = Platform::moving(Vec2::new(0.5, 0.0), 100.0, -1.0);
        platform.update(800.0);
        assert_eq!(platform.vel.x, 1.0);
    }

    #[test]
    fn test_spring_platform() {
        let platform = Platform::spring(Vec2::ZERO, 100.0);
        assert!(platform.is_spring());
        assert_eq!(platform.bounciness, SPRING_BOUNCINESS);
        assert!(!Platform::plain(Vec2::ZERO, 100.0).is_spring());
    }

    #[test]
    fn test_coin_float_follows_wall_clock() {
        let mut a = Coin::new(Vec2::ZERO);
        let mut b = Coin::new(Vec2::ZERO);
        a.update(1234.0);
        b.update(1234.0);
        b.update(1234.0);
        // Same wall time, different tick counts: same offset, different spin
        assert_eq!(a.float_offset, b.float_offset);
        assert!(a.float_offset.abs() <= COIN_FLOAT_AMPLITUDE);
        assert!(b.rotation > a.rotation);
    }

    #[test]
    fn test_enemy_direction_from_spawn_side() {
        assert_eq!(Enemy::new(Vec2::new(-30.0, 0.0), 1.0).direction, 1.0);
        assert_eq!(Enemy::new(Vec2::new(830.0, 0.0), 1.0).direction, -1.0);
    }

    #[test]
    fn test_enemy_crosses_from_left() {
        let mut enemy = Enemy::new(Vec2::new(-30.0, 200.0), 1.3);
        for _ in 0..100 {
            // Wall clock at zero keeps the bob flat
            enemy.update(0.0);
        }
        assert!((enemy.pos.x - 100.0).abs() < 0.01);
        assert_eq!(enemy.pos.y, 200.0);
        assert!(enemy.in_bounds(800.0));
    }

    #[test]
    fn test_enemy_culled_past_margin() {
        let enemy = Enemy::new(Vec2::new(-100.0, 0.0), 1.0);
        assert!(!enemy.in_bounds(800.0));
        let enemy = Enemy::new(Vec2::new(900.0, 0.0), 1.0);
        assert!(!enemy.in_bounds(800.0));
    }

    #[test]
    fn test_particle_lifetime() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut particle = Particle::new(Vec2::new(50.0, 50.0), BurstKind::Coin, &mut rng);
        assert!(particle.size >= PARTICLE_MIN_SIZE);
        assert!(particle.size < PARTICLE_MIN_SIZE + PARTICLE_SIZE_RANGE);
        assert!(particle.vel.x.abs() <= PARTICLE_MAX_SPEED);

        let size = particle.size;
        particle.update();
        assert!((particle.size - size * PARTICLE_DECAY).abs() < 1e-5);
        assert!((particle.alpha() - 0.99).abs() < 1e-5);

        for _ in 0..99 {
            particle.update();
        }
        assert!(!particle.is_alive());
        assert_eq!(particle.alpha(), 0.0);
    }
}
