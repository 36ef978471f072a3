//! The player character: input-driven movement, gravity, platform resolution

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, Body};
use super::entities::Platform;
use super::input::InputState;
use crate::consts::*;

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub facing_right: bool,
    pub jumping: bool,
    pub on_ground: bool,
    /// Jumps used since last landing (double jump support)
    pub jump_count: u32,
    pub invincible: bool,
    /// Remaining invincibility (ms)
    pub invincibility_timer: f32,
    /// Horizontal input was held this tick
    pub moving: bool,
    pub animation_frame: u32,
    pub animation_timer: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel: Vec2::ZERO,
            facing_right: true,
            jumping: false,
            on_ground: false,
            jump_count: 0,
            invincible: false,
            invincibility_timer: 0.0,
            moving: false,
            animation_frame: 0,
            animation_timer: 0.0,
        }
    }

    /// Advance one tick
    ///
    /// `bounds` is the canvas size. Only the horizontal extent is enforced here;
    /// falling out of the bottom is the world's concern.
    pub fn update(&mut self, dt_ms: f32, input: &InputState, platforms: &[Platform], bounds: Vec2) {
        self.moving = false;

        if input.left {
            self.vel.x = -PLAYER_SPEED;
            self.facing_right = false;
            self.moving = true;
        } else if input.right {
            self.vel.x = PLAYER_SPEED;
            self.facing_right = true;
            self.moving = true;
        } else {
            self.vel.x *= HORIZONTAL_DAMPING;
        }

        // Only the count limits air jumps
        if input.up && self.jump_count < MAX_JUMPS {
            self.vel.y = JUMP_IMPULSE;
            self.jumping = true;
            self.jump_count += 1;
        }

        self.vel.y += GRAVITY;
        self.pos += self.vel;
        self.clamp_horizontal(bounds.x);

        self.resolve_platforms(platforms);
        // Side push-out can land past an edge when a platform overhangs it
        self.clamp_horizontal(bounds.x);

        self.update_animation(dt_ms);

        if self.invincible {
            self.invincibility_timer -= dt_ms;
            if self.invincibility_timer <= 0.0 {
                self.invincible = false;
            }
        }
    }

    fn clamp_horizontal(&mut self, width: f32) {
        self.pos.x = self.pos.x.min(width - self.size.x).max(0.0);
    }

    /// Each overlapping platform applies its own full correction, in collection order
    fn resolve_platforms(&mut self, platforms: &[Platform]) {
        self.on_ground = false;

        for platform in platforms {
            if !self.collides_with(platform) {
                continue;
            }
            let other = platform.aabb();

            if self.vel.y > 0.0 && self.pos.y + self.size.y <= other.pos.y + LANDING_TOLERANCE {
                // Landed on top
                self.pos.y = other.pos.y - self.size.y;
                self.vel.y = 0.0;
                self.jumping = false;
                self.on_ground = true;
                self.jump_count = 0;

                if platform.bounciness > 1.0 {
                    // Spring: relaunch, counted as one jump used
                    self.vel.y = JUMP_IMPULSE * platform.bounciness;
                    self.jumping = true;
                    self.jump_count = 1;
                }
            } else if self.vel.y < 0.0 {
                // Bumped the underside
                self.pos.y = other.bottom();
                self.vel.y = 0.0;
            } else {
                if self.pos.x < other.pos.x {
                    self.pos.x = other.pos.x - self.size.x;
                } else {
                    self.pos.x = other.right();
                }
                self.vel.x = 0.0;
            }
        }
    }

    fn update_animation(&mut self, dt_ms: f32) {
        if self.moving {
            self.animation_timer += dt_ms;
            if self.animation_timer > ANIMATION_FRAME_MS {
                self.animation_frame = (self.animation_frame + 1) % ANIMATION_FRAMES;
                self.animation_timer = 0.0;
            }
        } else {
            self.animation_frame = 0;
        }
    }

    /// Take damage: start the invincibility window with a small upward knock.
    /// No-op while already invincible.
    pub fn hit(&mut self) {
        if self.invincible {
            return;
        }
        self.invincible = true;
        self.invincibility_timer = INVINCIBILITY_MS;
        self.vel.y = HIT_KNOCKBACK;
    }

    /// Respawn at `pos` with motion and jump state cleared.
    /// An active invincibility window is kept.
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.jumping = false;
        self.on_ground = false;
        self.jump_count = 0;
    }

    /// Render-side flicker: dimmed on every other 100ms slice of the window
    pub fn flicker_dimmed(&self) -> bool {
        self.invincible && (self.invincibility_timer / 100.0).floor() as i64 % 2 == 0
    }
}

impl Body for Player {
    fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}
