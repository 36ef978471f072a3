//! Polled input record

use serde::{Deserialize, Serialize};

/// Directional/action flags read once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    /// Jump
    pub up: bool,
}

impl InputState {
    pub fn left() -> Self {
        Self {
            left: true,
            ..Default::default()
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Default::default()
        }
    }

    pub fn jump() -> Self {
        Self {
            up: true,
            ..Default::default()
        }
    }
}

/// Anything that can produce the current key state
pub trait InputSource {
    fn poll(&self) -> InputState;
}

impl InputSource for InputState {
    fn poll(&self) -> InputState {
        *self
    }
}
