//! Game driver
//!
//! Owns the session, the level source and the scheduler, and exposes the
//! control surface the UI calls into. Every control is a session state
//! transition plus starting or stopping the scheduler.

use crate::input::{Action, InputState};
use crate::levels::LevelLoader;
use crate::platform::{Renderer, Scheduler};
use crate::sim::{GameEvent, GamePhase, Session, SessionError, tick};
use crate::tuning::Tuning;

/// A running game: session + levels + fixed-rate scheduling
pub struct Game<L: LevelLoader> {
    session: Session,
    loader: L,
    scheduler: Scheduler,
    input: InputState,
    /// Pause key state last frame (toggle fires on press, not hold)
    pause_held: bool,
}

impl<L: LevelLoader> Game<L> {
    /// New game sitting on the menu
    pub fn new(tuning: Tuning, loader: L) -> Result<Self, SessionError> {
        let session = Session::new(tuning, loader.load(1))?;
        Ok(Self {
            session,
            loader,
            scheduler: Scheduler::default(),
            input: InputState::default(),
            pause_held: false,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Input held-state, updated by the host before each frame
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Forward a key event to the input state
    pub fn key_event(&mut self, key: &str, pressed: bool) -> bool {
        self.input.key_event(key, pressed)
    }

    /// New run from level 1
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.start_at(1)
    }

    /// New run from an arbitrary level (level select)
    pub fn start_at(&mut self, number: u32) -> Result<(), SessionError> {
        self.session.start(self.loader.load(number))?;
        self.scheduler.stop();
        self.scheduler.start();
        Ok(())
    }

    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.start()
    }

    pub fn pause(&mut self) -> Result<(), SessionError> {
        self.session.pause()?;
        self.scheduler.stop();
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), SessionError> {
        self.session.resume()?;
        self.scheduler.start();
        Ok(())
    }

    /// Move on from a cleared level (wraps to level 1 after the last)
    pub fn advance_level(&mut self) -> Result<(), SessionError> {
        let next = self.loader.next_level(self.session.level_number());
        self.session.advance_level(self.loader.load(next))?;
        self.scheduler.start();
        Ok(())
    }

    pub fn quit(&mut self) {
        self.session.quit();
        self.scheduler.stop();
    }

    /// Losing focus always pauses a running game and releases held keys
    pub fn focus_lost(&mut self) {
        self.input.clear();
        self.pause_held = false;
        if self.session.phase == GamePhase::Playing {
            log::info!("Auto-paused (focus lost)");
            if let Err(e) = self.pause() {
                log::warn!("Auto-pause failed: {e}");
            }
        }
    }

    /// Run one host frame: pause toggle, owed ticks, clock, draw.
    ///
    /// Returns the gameplay events produced during the frame.
    pub fn frame(&mut self, frame_dt: f32, renderer: &mut impl Renderer) -> Vec<GameEvent> {
        self.handle_pause_toggle();

        let steps = self.scheduler.advance(frame_dt);
        let mut drew = false;
        for _ in 0..steps.ticks {
            tick(&mut self.session, &self.input);
            renderer.draw(&self.session);
            drew = true;
            if self.session.phase != GamePhase::Playing {
                // Terminal transition: stop scheduling until the UI acts
                self.scheduler.stop();
                break;
            }
        }
        for _ in 0..steps.seconds {
            self.session.tick_clock();
        }
        if !drew {
            renderer.draw(&self.session);
        }

        self.session.drain_events()
    }

    fn handle_pause_toggle(&mut self) {
        let held = self.input.is_held(Action::PauseToggle);
        let pressed = held && !self.pause_held;
        self.pause_held = held;
        if !pressed {
            return;
        }

        let result = match self.session.phase {
            GamePhase::Playing => self.pause(),
            GamePhase::Paused => self.resume(),
            _ => Ok(()),
        };
        if let Err(e) = result {
            log::warn!("Pause toggle ignored: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::levels::BuiltinLevels;
    use crate::sim::{Collectible, Level, Platform};
    use glam::Vec2;

    #[derive(Default)]
    struct CountingRenderer {
        draws: usize,
    }

    impl Renderer for CountingRenderer {
        fn draw(&mut self, _session: &Session) {
            self.draws += 1;
        }
    }

    /// One-coin levels where the coin sits on the start point
    struct GiftLevels;

    impl LevelLoader for GiftLevels {
        fn load(&self, number: u32) -> Level {
            let number = if (1..=2).contains(&number) { number } else { 1 };
            let mut level = Level::new(number, Vec2::new(50.0, 530.0), Vec2::new(50.0, 100.0));
            level.platforms.push(Platform::new_static(0.0, 580.0, 1000.0, 20.0));
            level.collectibles.push(Collectible::new(60.0, 540.0, 30.0, 30.0));
            level
        }

        fn level_count(&self) -> u32 {
            2
        }
    }

    fn game() -> Game<BuiltinLevels> {
        let mut game = Game::new(Tuning::default(), BuiltinLevels::default()).unwrap();
        game.start().unwrap();
        game
    }

    #[test]
    fn test_menu_does_not_tick() {
        let mut game = Game::new(Tuning::default(), BuiltinLevels::default()).unwrap();
        let mut renderer = CountingRenderer::default();
        game.frame(SIM_DT, &mut renderer);
        assert_eq!(game.phase(), GamePhase::Menu);
        assert_eq!(game.session().time_ticks, 0);
        assert_eq!(renderer.draws, 1);
    }

    #[test]
    fn test_frames_drive_ticks() {
        let mut game = game();
        let mut renderer = CountingRenderer::default();
        for _ in 0..10 {
            game.frame(0.05, &mut renderer);
        }
        // 0.5s at 60 Hz
        let ticks = game.session().time_ticks;
        assert!((29..=30).contains(&ticks), "ticks = {ticks}");
        assert_eq!(renderer.draws as u64, ticks);
    }

    #[test]
    fn test_pause_stops_time_and_physics() {
        let mut game = game();
        let mut renderer = CountingRenderer::default();
        game.frame(0.05, &mut renderer);
        game.pause().unwrap();
        assert!(!game.scheduler().is_running());

        let snapshot = (game.session().time_ticks, game.session().player.clone());
        for _ in 0..100 {
            game.frame(0.05, &mut renderer);
        }
        assert_eq!(game.session().time_ticks, snapshot.0);
        assert_eq!(game.session().player, snapshot.1);
        assert_eq!(game.session().elapsed_secs, 0);

        game.resume().unwrap();
        game.frame(0.05, &mut renderer);
        assert!(game.session().time_ticks > snapshot.0);
    }

    #[test]
    fn test_pause_key_toggles_on_press() {
        let mut game = game();
        let mut renderer = CountingRenderer::default();

        game.key_event("Escape", true);
        game.frame(SIM_DT, &mut renderer);
        assert_eq!(game.phase(), GamePhase::Paused);

        // Still held: no second toggle
        game.frame(SIM_DT, &mut renderer);
        assert_eq!(game.phase(), GamePhase::Paused);

        game.key_event("Escape", false);
        game.frame(SIM_DT, &mut renderer);
        game.key_event("Escape", true);
        game.frame(SIM_DT, &mut renderer);
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_focus_loss_pauses() {
        let mut game = game();
        game.key_event("ArrowRight", true);
        game.focus_lost();
        assert_eq!(game.phase(), GamePhase::Paused);
        assert!(!game.input_mut().is_held(Action::MoveRight));

        // Not playing: nothing to do
        game.quit();
        game.focus_lost();
        assert_eq!(game.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_clock_advances_while_playing() {
        let mut game = game();
        let mut renderer = CountingRenderer::default();
        for _ in 0..25 {
            game.frame(0.1, &mut renderer);
        }
        assert_eq!(game.session().elapsed_secs, 2);
    }

    #[test]
    fn test_level_complete_stops_and_advances() {
        let mut game = Game::new(Tuning::default(), GiftLevels).unwrap();
        game.start().unwrap();
        let mut renderer = CountingRenderer::default();

        let events = game.frame(SIM_DT * 4.0, &mut renderer);
        assert_eq!(game.phase(), GamePhase::LevelComplete);
        assert!(!game.scheduler().is_running());
        assert!(matches!(events.last(), Some(GameEvent::LevelComplete(_))));
        assert_eq!(game.session().time_ticks, 1);

        game.advance_level().unwrap();
        assert_eq!(game.session().level_number(), 2);
        assert_eq!(game.session().score, 10);
        game.frame(SIM_DT * 2.0, &mut renderer);
        assert_eq!(game.phase(), GamePhase::LevelComplete);

        // Wraps after the last level
        game.advance_level().unwrap();
        assert_eq!(game.session().level_number(), 1);
        assert_eq!(game.session().score, 20);
    }

    #[test]
    fn test_restart_resets() {
        let mut game = Game::new(Tuning::default(), GiftLevels).unwrap();
        game.start().unwrap();
        let mut renderer = CountingRenderer::default();
        game.frame(SIM_DT * 2.0, &mut renderer);
        assert_eq!(game.session().score, 10);

        game.restart().unwrap();
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.session().score, 0);
        assert!(game.scheduler().is_running());
    }

    #[test]
    fn test_start_at_level() {
        let mut game = Game::new(Tuning::default(), BuiltinLevels::default()).unwrap();
        game.start_at(7).unwrap();
        assert_eq!(game.session().level_number(), 7);
        assert_eq!(game.phase(), GamePhase::Playing);

        // Out of range falls back to level 1
        game.start_at(99).unwrap();
        assert_eq!(game.session().level_number(), 1);
    }

    #[test]
    fn test_invalid_controls_rejected() {
        let mut game = game();
        assert!(game.resume().is_err());
        assert!(game.advance_level().is_err());
        assert_eq!(game.phase(), GamePhase::Playing);
    }
}
