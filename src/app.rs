//! Host-facing game driver
//!
//! Glues the world, the HUD, the frame clock and the keyboard together so the
//! wasm and native entry points only have to feed timestamps and key codes.

use crate::platform::{ControlAction, FrameClock, KeyboardInput};
use crate::renderer::{DrawSurface, render};
use crate::settings::{ConfigError, GameConfig};
use crate::sim::{FrameTime, GameEvent, InputSource, World, tick};
use crate::ui::{Hud, WELCOME_MESSAGE};

/// One game session plus its presentation state
#[derive(Debug, Clone)]
pub struct Game {
    pub world: World,
    pub hud: Hud,
    clock: FrameClock,
    input: KeyboardInput,
}

impl Game {
    /// New idle session. `now_ms` is the wall clock the welcome prompt is timed from.
    pub fn new(config: GameConfig, now_ms: f64) -> Result<Self, ConfigError> {
        let world = World::new(config)?;
        let mut hud = Hud::new(&world);
        hud.show_message(WELCOME_MESSAGE, now_ms);
        Ok(Self {
            world,
            hud,
            clock: FrameClock::new(),
            input: KeyboardInput::new(),
        })
    }

    /// Run one animation frame: simulate, draw, update the HUD.
    /// Returns the events produced during the frame.
    pub fn frame(
        &mut self,
        timestamp_ms: f64,
        wall_clock_ms: f64,
        surface: &mut impl DrawSurface,
    ) -> Vec<GameEvent> {
        let elapsed_ms = self.clock.delta(timestamp_ms);
        let input = self.input.poll();
        tick(
            &mut self.world,
            &input,
            FrameTime::new(elapsed_ms, wall_clock_ms),
        );
        render(&self.world, surface);

        let events = self.flush_events(wall_clock_ms);
        self.hud.expire(wall_clock_ms);
        events
    }

    /// Apply a button or shortcut. Returns whether the phase changed.
    pub fn control(&mut self, action: ControlAction, now_ms: f64) -> bool {
        let changed = match action {
            ControlAction::Start => self.world.start(),
            ControlAction::TogglePause => self.world.toggle_pause(),
            ControlAction::Restart => self.world.restart(),
        };
        if changed {
            // Paused time must not count as elapsed once play resumes
            self.clock.reset();
            self.input.clear();
        }
        self.flush_events(now_ms);
        changed
    }

    /// Key press from the host; bound shortcuts are applied immediately
    /// unless the press is an autorepeat
    pub fn key_down(&mut self, code: &str, repeat: bool, now_ms: f64) -> Option<ControlAction> {
        let action = self.input.key_down(code, repeat)?;
        self.control(action, now_ms);
        Some(action)
    }

    pub fn key_up(&mut self, code: &str) {
        self.input.key_up(code);
    }

    /// Release held keys, e.g. when the page loses focus
    pub fn release_keys(&mut self) {
        self.input.clear();
    }

    pub fn message(&self, now_ms: f64) -> Option<&str> {
        self.hud.message(now_ms)
    }

    pub fn pause_label(&self) -> &'static str {
        Hud::pause_label(&self.world)
    }

    fn flush_events(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let events = self.world.drain_events();
        for event in &events {
            log::debug!("Event: {event:?}");
            self.hud.apply(event, now_ms);
        }
        self.hud.sync(&self.world);
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use crate::sim::GamePhase;

    fn game() -> Game {
        Game::new(GameConfig::new(800.0, 600.0, 7), 0.0).unwrap()
    }

    fn surface() -> RecordingSurface {
        RecordingSurface::new(800.0, 600.0)
    }

    #[test]
    fn test_welcome_message() {
        let game = game();
        assert_eq!(game.message(0.0), Some(WELCOME_MESSAGE));
        assert_eq!(game.pause_label(), "Pause");
    }

    #[test]
    fn test_welcome_message_at_browser_clock() {
        let now = 1_760_000_000_000.0;
        let game = Game::new(GameConfig::default(), now).unwrap();
        assert_eq!(game.message(now), Some(WELCOME_MESSAGE));
        assert_eq!(game.message(now + 1999.0), Some(WELCOME_MESSAGE));
        assert_eq!(game.message(now + 2000.0), None);
    }

    #[test]
    fn test_held_pause_key_toggles_once() {
        let mut game = game();
        game.control(ControlAction::Start, 0.0);
        assert_eq!(
            game.key_down("Escape", false, 10.0),
            Some(ControlAction::TogglePause)
        );
        for t in 1..10 {
            assert_eq!(game.key_down("Escape", true, 10.0 + t as f64), None);
        }
        assert_eq!(game.world.phase, GamePhase::Paused);
    }

    #[test]
    fn test_idle_frames_do_not_simulate() {
        let mut game = game();
        let mut s = surface();
        for i in 0..10 {
            game.frame(i as f64 * 16.0, i as f64 * 16.0, &mut s);
        }
        assert_eq!(game.world.ticks, 0);
        assert_eq!(game.world.phase, GamePhase::Idle);
        // Still drawn every frame
        assert!(!s.commands.is_empty());
    }

    #[test]
    fn test_start_via_shortcut() {
        let mut game = game();
        let mut s = surface();
        assert_eq!(game.key_down("KeyS", false, 100.0), Some(ControlAction::Start));
        assert_eq!(game.world.phase, GamePhase::Running);
        assert_eq!(game.message(100.0), Some("Game started! Good luck!"));

        game.frame(0.0, 100.0, &mut s);
        game.frame(16.0, 116.0, &mut s);
        assert_eq!(game.world.ticks, 2);
    }

    #[test]
    fn test_pause_shows_overlay_and_freezes() {
        let mut game = game();
        let mut s = surface();
        game.control(ControlAction::Start, 0.0);
        game.frame(0.0, 0.0, &mut s);
        game.key_down("KeyP", false, 10.0);
        assert_eq!(game.pause_label(), "Resume");

        let pos = game.world.player.pos;
        for i in 1..5 {
            game.frame(i as f64 * 16.0, i as f64 * 16.0, &mut s);
        }
        assert_eq!(game.world.player.pos, pos);
        assert_eq!(s.texts(), vec!["PAUSED", "Press P to resume"]);
    }

    #[test]
    fn test_held_keys_move_player() {
        let mut game = game();
        let mut s = surface();
        game.control(ControlAction::Start, 0.0);
        game.world.platforms.clear();
        let x = game.world.player.pos.x;
        game.key_down("ArrowRight", false, 0.0);
        game.frame(0.0, 0.0, &mut s);
        assert!(game.world.player.pos.x > x);
        assert!(game.world.player.facing_right);

        game.key_up("ArrowRight");
        game.key_down("KeyA", false, 0.0);
        game.frame(16.0, 16.0, &mut s);
        assert!(!game.world.player.facing_right);
    }

    #[test]
    fn test_hud_tracks_lives() {
        let mut game = game();
        let mut s = surface();
        game.control(ControlAction::Start, 0.0);
        game.world.player.pos.y = 10_000.0;
        let events = game.frame(0.0, 500.0, &mut s);

        assert!(events.contains(&GameEvent::LifeLost { lives: 2 }));
        assert_eq!(game.hud.lives, 2);
        assert_eq!(game.message(500.0), Some("Lives left: 2"));
        assert_eq!(game.message(2500.0), None);
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut game = game();
        game.control(ControlAction::Start, 0.0);
        assert!(!game.control(ControlAction::Restart, 0.0));
        assert_eq!(game.world.phase, GamePhase::Running);
    }
}
