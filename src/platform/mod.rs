//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame timing (elapsed deltas, the run-until-stopped loop contract)
//! - Keyboard mapping to the polled input record and control actions

pub mod input;
pub mod time;

pub use input::{ControlAction, KeyboardInput};
pub use time::{FixedStepTime, FrameClock, LoopControl, TimeSource, run_frames};
