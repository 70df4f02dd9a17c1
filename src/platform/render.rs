//! Renderer seam
//!
//! Drawing happens outside the simulation. A renderer only ever gets a
//! shared borrow of the session, so it cannot mutate entities.

use crate::sim::pickup::remaining;
use crate::sim::{GamePhase, Session};
use crate::summary::format_elapsed;

/// Something that presents the session between ticks
pub trait Renderer {
    fn draw(&mut self, session: &Session);
}

/// Headless renderer that logs a HUD line every `every` frames
#[derive(Debug, Clone)]
pub struct LogRenderer {
    every: u64,
    frames: u64,
    last_phase: Option<GamePhase>,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
            last_phase: None,
        }
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// HUD text: score, lives, level, clock, coins left
    pub fn hud_line(session: &Session) -> String {
        let pos = session.player.body.pos;
        format!(
            "level {} | score {} | lives {} | time {} | coins left {} | player ({:.1}, {:.1})",
            session.level_number(),
            session.score,
            session.lives,
            format_elapsed(session.elapsed_secs),
            remaining(&session.level.collectibles),
            pos.x,
            pos.y
        )
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, session: &Session) {
        if self.last_phase != Some(session.phase) {
            log::info!("[{:?}] {}", session.phase, Self::hud_line(session));
            self.last_phase = Some(session.phase);
        } else if self.frames % self.every == 0 {
            log::debug!("{}", Self::hud_line(session));
        }
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::{BuiltinLevels, LevelLoader};
    use crate::sim::KinematicBody;
    use crate::tuning::Tuning;

    #[test]
    fn test_hud_line() {
        let loader = BuiltinLevels::default();
        let mut session = Session::new(Tuning::default(), loader.load(3)).unwrap();
        session.score = 20;
        session.elapsed_secs = 65;
        let coin = session.level.collectibles[0].rect;
        let grabber = KinematicBody::new(coin.pos, coin.size);
        assert!(session.level.collectibles[0].try_collect(&grabber));
        let line = LogRenderer::hud_line(&session);
        assert!(line.starts_with("level 3 | score 20 | lives 3 | time 1:05 | coins left 3 |"));
    }

    #[test]
    fn test_counts_frames() {
        let loader = BuiltinLevels::default();
        let session = Session::new(Tuning::default(), loader.load(1)).unwrap();
        let mut renderer = LogRenderer::new(10);
        for _ in 0..5 {
            renderer.draw(&session);
        }
        assert_eq!(renderer.frames(), 5);
    }
}
