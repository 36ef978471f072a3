//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time and wall-clock time are passed in, never read ambiently
//! - Seeded RNG only
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entities;
pub mod input;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Body};
pub use entities::{BurstKind, Coin, Enemy, Particle, Platform, PlatformKind};
pub use input::{InputSource, InputState};
pub use player::Player;
pub use spawn::{create_initial_platforms, spawn_coin, spawn_enemy, spawn_platform};
pub use state::{GameEvent, GamePhase, Snapshot, World};
pub use tick::{FrameTime, tick};
