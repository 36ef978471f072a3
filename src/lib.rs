//! Pixel Jumper - a procedurally generated side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning, session state)
//! - `renderer`: Draw-call rendering onto an abstract 2D surface
//! - `platform`: Frame timing and keyboard mapping
//! - `ui`: HUD read-outs and transient messages
//! - `settings`: Canvas/seed configuration
//! - `app`: Per-frame glue binding the pieces together

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use app::Game;
pub use settings::{ConfigError, GameConfig};

/// Game configuration constants
///
/// Velocities are in pixels per tick, durations in milliseconds.
pub mod consts {
    /// Default canvas dimensions
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    /// Player body
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const JUMP_IMPULSE: f32 = -15.0;
    pub const GRAVITY: f32 = 0.5;
    pub const MAX_JUMPS: u32 = 2;
    /// Horizontal velocity multiplier when no direction is held
    pub const HORIZONTAL_DAMPING: f32 = 0.8;
    /// How far below a platform top the player's feet may be and still land on it
    pub const LANDING_TOLERANCE: f32 = 10.0;
    pub const INVINCIBILITY_MS: f32 = 1000.0;
    pub const HIT_KNOCKBACK: f32 = -10.0;
    pub const ANIMATION_FRAME_MS: f32 = 100.0;
    pub const ANIMATION_FRAMES: u32 = 4;
    /// Player spawn point offset from the bottom of the canvas
    pub const SPAWN_OFFSET_Y: f32 = 100.0;

    /// Platforms
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    /// Downward scroll speed of every platform
    pub const PLATFORM_DRIFT: f32 = 1.0;
    pub const PLATFORM_MIN_WIDTH: f32 = 80.0;
    pub const PLATFORM_MAX_WIDTH: f32 = 200.0;
    pub const INITIAL_PLATFORM_MIN_WIDTH: f32 = 100.0;
    pub const INITIAL_PLATFORM_COUNT: usize = 8;
    pub const INITIAL_PLATFORM_SPACING: f32 = 80.0;
    pub const GROUND_HEIGHT: f32 = 30.0;
    /// Spawned platforms appear just above the visible area
    pub const PLATFORM_SPAWN_Y: f32 = -20.0;
    pub const SPRING_BOUNCINESS: f32 = 1.5;
    /// Moving platforms get a horizontal speed in [-MAX, MAX)
    pub const MOVING_PLATFORM_MAX_SPEED: f32 = 1.5;
    pub const PLAIN_PLATFORM_CHANCE: f32 = 0.7;
    pub const SPRING_PLATFORM_CHANCE: f32 = 0.15;

    /// Coins
    pub const COIN_SIZE: f32 = 20.0;
    pub const COIN_FLOAT_SPEED: f64 = 0.05;
    pub const COIN_FLOAT_AMPLITUDE: f32 = 5.0;
    pub const COIN_SPIN: f32 = 0.05;
    pub const COIN_SCORE: u32 = 10;

    /// Enemies
    pub const ENEMY_SIZE: f32 = 30.0;
    pub const ENEMY_BASE_SPEED: f32 = 1.0;
    pub const ENEMY_SPEED_PER_LEVEL: f32 = 0.3;
    pub const ENEMY_BOB_RATE: f64 = 0.005;
    pub const ENEMY_BOB_AMPLITUDE: f32 = 0.5;
    /// Enemies enter this far outside the canvas edge
    pub const ENEMY_SPAWN_INSET: f32 = 30.0;
    /// Enemies are culled this far past either canvas edge
    pub const ENEMY_CULL_MARGIN: f32 = 100.0;

    /// Particles
    pub const PARTICLE_LIFE: f32 = 100.0;
    pub const PARTICLE_MIN_SIZE: f32 = 2.0;
    pub const PARTICLE_SIZE_RANGE: f32 = 5.0;
    pub const PARTICLE_MAX_SPEED: f32 = 3.0;
    pub const PARTICLE_DECAY: f32 = 0.98;
    pub const COIN_BURST: usize = 10;
    pub const ENEMY_BURST: usize = 15;

    /// Spawn periods
    pub const PLATFORM_SPAWN_MS: f32 = 2000.0;
    pub const COIN_SPAWN_MS: f32 = 1000.0;
    /// Divided by the current game speed
    pub const ENEMY_SPAWN_MS: f32 = 3000.0;
    /// Coins and enemies never spawn in the bottom strip of this height
    pub const SPAWN_BOTTOM_CLEARANCE: f32 = 100.0;

    /// Session
    pub const STARTING_LIVES: u32 = 3;
    pub const STARTING_LEVEL: u32 = 1;
    pub const SCORE_PER_LEVEL: u32 = 100;
    pub const GAME_SPEED_PER_LEVEL: f32 = 0.1;
    /// Falling this far below the canvas costs a life; platforms are culled at the same depth
    pub const FALL_MARGIN: f32 = 100.0;

    /// HUD message auto-hide delay
    pub const MESSAGE_DURATION_MS: f64 = 2000.0;
}
