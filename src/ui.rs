//! HUD model
//!
//! Three numeric read-outs plus one transient message. The host copies these
//! into whatever display it has (DOM elements on the web, log lines natively).

use crate::consts::MESSAGE_DURATION_MS;
use crate::sim::{GameEvent, World};

pub const WELCOME_MESSAGE: &str = "Press Start to begin!";

/// A message shown until a wall-clock deadline
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub text: String,
    pub hide_at_ms: f64,
}

/// Score/lives/level read-outs and the transient message line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hud {
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    message: Option<Message>,
}

impl Hud {
    pub fn new(world: &World) -> Self {
        let mut hud = Self::default();
        hud.sync(world);
        hud
    }

    /// Copy the counters from the world
    pub fn sync(&mut self, world: &World) {
        self.score = world.score;
        self.lives = world.lives;
        self.level = world.level;
    }

    /// Show `text` for the standard duration, replacing any current message
    pub fn show_message(&mut self, text: impl Into<String>, now_ms: f64) {
        self.message = Some(Message {
            text: text.into(),
            hide_at_ms: now_ms + MESSAGE_DURATION_MS,
        });
    }

    pub fn hide_message(&mut self) {
        self.message = None;
    }

    /// React to a simulation event
    pub fn apply(&mut self, event: &GameEvent, now_ms: f64) {
        match *event {
            GameEvent::Started => self.show_message("Game started! Good luck!", now_ms),
            GameEvent::Restarted => {
                self.hide_message();
                self.show_message("Ready? Press Start!", now_ms);
            }
            GameEvent::LevelUp { level } => self.show_message(format!("Level {level}!"), now_ms),
            GameEvent::LifeLost { lives } => {
                self.show_message(format!("Lives left: {lives}"), now_ms)
            }
            GameEvent::GameOver { score } => {
                self.show_message(format!("Game over! Your score: {score}"), now_ms)
            }
            GameEvent::Paused | GameEvent::Resumed | GameEvent::CoinCollected { .. } => {}
        }
    }

    /// Current message, if it has not timed out
    pub fn message(&self, now_ms: f64) -> Option<&str> {
        self.message
            .as_ref()
            .filter(|m| now_ms < m.hide_at_ms)
            .map(|m| m.text.as_str())
    }

    /// Drop an expired message
    pub fn expire(&mut self, now_ms: f64) {
        if self.message.as_ref().is_some_and(|m| now_ms >= m.hide_at_ms) {
            self.message = None;
        }
    }

    /// Label for the pause/resume button
    pub fn pause_label(world: &World) -> &'static str {
        if world.phase == crate::sim::GamePhase::Paused {
            "Resume"
        } else {
            "Pause"
        }
    }
}
