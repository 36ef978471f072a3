//! World and session state
//!
//! The world owns every live entity plus the spawn timers and session
//! counters. Nothing here is global: the host owns a `World` and passes it to
//! `tick` once per frame.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entities::{BurstKind, Coin, Enemy, Particle, Platform};
use super::player::Player;
use super::spawn::create_initial_platforms;
use crate::consts::*;
use crate::settings::{ConfigError, GameConfig};

/// Session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start action
    Idle,
    /// Active gameplay
    Running,
    /// Frozen, overlay shown
    Paused,
    /// Out of lives
    GameOver,
}

/// Something the HUD or host should react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    Restarted,
    CoinCollected { score: u32 },
    LevelUp { level: u32 },
    LifeLost { lives: u32 },
    GameOver { score: u32 },
}

/// Serializable summary of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub game_speed: f32,
    pub ticks: u64,
    pub platforms: usize,
    pub coins: usize,
    pub enemies: usize,
    pub particles: usize,
    pub player_pos: Vec2,
}

/// Complete game world
#[derive(Debug, Clone)]
pub struct World {
    pub config: GameConfig,
    pub rng: Pcg32,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    /// Spawn accumulators (ms)
    pub platform_timer: f32,
    pub coin_timer: f32,
    pub enemy_timer: f32,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    /// Enemy spawn-rate multiplier derived from level
    pub game_speed: f32,
    pub phase: GamePhase,
    /// Simulated ticks since the last restart
    pub ticks: u64,
    events: Vec<GameEvent>,
}

impl World {
    /// Create an idle world with the initial platform layout
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = Self {
            rng: Pcg32::seed_from_u64(config.seed),
            player: Player::new(config.spawn_point()),
            config,
            platforms: Vec::new(),
            coins: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            platform_timer: 0.0,
            coin_timer: 0.0,
            enemy_timer: 0.0,
            score: 0,
            lives: STARTING_LIVES,
            level: STARTING_LEVEL,
            game_speed: 1.0,
            phase: GamePhase::Idle,
            ticks: 0,
            events: Vec::new(),
        };
        create_initial_platforms(&mut world);

        log::info!(
            "World created ({}x{}, seed {})",
            world.config.width,
            world.config.height,
            world.config.seed
        );
        Ok(world)
    }

    pub fn width(&self) -> f32 {
        self.config.width
    }

    pub fn height(&self) -> f32 {
        self.config.height
    }

    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.config.width, self.config.height)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Idle -> Running
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            log::debug!("Start ignored in {:?}", self.phase);
            return false;
        }
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Started);
        log::info!("Game started");
        true
    }

    /// Running <-> Paused
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                self.events.push(GameEvent::Paused);
                log::info!("Paused");
                true
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                self.events.push(GameEvent::Resumed);
                log::info!("Resumed");
                true
            }
            GamePhase::Idle | GamePhase::GameOver => {
                log::debug!("Pause toggle ignored in {:?}", self.phase);
                false
            }
        }
    }

    /// GameOver | Idle -> Idle with a fresh session
    pub fn restart(&mut self) -> bool {
        if !matches!(self.phase, GamePhase::Idle | GamePhase::GameOver) {
            log::debug!("Restart ignored in {:?}", self.phase);
            return false;
        }

        self.score = 0;
        self.lives = STARTING_LIVES;
        self.level = STARTING_LEVEL;
        self.game_speed = 1.0;
        self.ticks = 0;

        self.platforms.clear();
        self.coins.clear();
        self.enemies.clear();
        self.particles.clear();

        self.platform_timer = 0.0;
        self.coin_timer = 0.0;
        self.enemy_timer = 0.0;

        self.player = Player::new(self.config.spawn_point());
        create_initial_platforms(self);

        self.phase = GamePhase::Idle;
        self.events.push(GameEvent::Restarted);
        log::info!("Game restarted");
        true
    }

    /// Award a collected coin at `center`
    pub(crate) fn collect_coin(&mut self, center: Vec2) {
        let before = self.score;
        self.score += COIN_SCORE;
        self.events.push(GameEvent::CoinCollected { score: self.score });
        self.burst(center, COIN_BURST, BurstKind::Coin);

        let crossed = self.score / SCORE_PER_LEVEL - before / SCORE_PER_LEVEL;
        if crossed > 0 {
            self.level += crossed;
            self.events.push(GameEvent::LevelUp { level: self.level });
            log::info!("Level up: {}", self.level);
        }
    }

    /// Enemy contact while vulnerable
    pub(crate) fn damage_player(&mut self, impact: Vec2) {
        self.player.hit();
        self.lose_life();
        self.burst(impact, ENEMY_BURST, BurstKind::Enemy);
    }

    /// Decrement a life, then respawn or end the session
    pub(crate) fn lose_life(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.lives = self.lives.saturating_sub(1);

        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver { score: self.score });
            log::info!("Game over (score {})", self.score);
        } else {
            self.player.reset(self.config.spawn_point());
            self.events.push(GameEvent::LifeLost { lives: self.lives });
            log::info!("Life lost, {} left", self.lives);
        }
    }

    pub(crate) fn burst(&mut self, at: Vec2, count: usize, kind: BurstKind) {
        for _ in 0..count {
            let particle = Particle::new(at, kind, &mut self.rng);
            self.particles.push(particle);
        }
    }

    pub(crate) fn update_difficulty(&mut self) {
        self.game_speed = 1.0 + self.level as f32 * GAME_SPEED_PER_LEVEL;
    }

    /// Take the events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            lives: self.lives,
            level: self.level,
            game_speed: self.game_speed,
            ticks: self.ticks,
            platforms: self.platforms.len(),
            coins: self.coins.len(),
            enemies: self.enemies.len(),
            particles: self.particles.len(),
            player_pos: self.player.pos,
        }
    }
}
