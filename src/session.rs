//! The frontend's side of the scheduler boundary.
//!
//! A `Session` owns the game, the held-key handler and the "is the tick
//! callback scheduled" flag. The flag drops when `update` returns
//! [`TickSignal::Halt`] and comes back when a reset or restart succeeds.

use crossterm::event::KeyCode;

use crate::core::GameState;
use crate::input::InputHandler;
use crate::types::{CoreEvent, GameAction, TickSignal};

#[derive(Debug, Clone)]
pub struct Session {
    pub game: GameState,
    input: InputHandler,
    tick_ms: u32,
    ticking: bool,
}

impl Session {
    /// New match, already served.
    pub fn new(tick_ms: u32) -> Self {
        Self::with_input(tick_ms, InputHandler::new())
    }

    pub fn with_input(tick_ms: u32, input: InputHandler) -> Self {
        let mut game = GameState::new();
        game.serve_default();
        Self {
            game,
            input,
            tick_ms,
            ticking: true,
        }
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    /// Whether the tick callback is currently scheduled.
    pub fn ticking(&self) -> bool {
        self.ticking
    }

    pub fn dispatch(&mut self, action: GameAction) -> bool {
        let changed = self.game.apply_action(action);
        if changed && matches!(action, GameAction::Reset | GameAction::Restart) {
            self.ticking = true;
        }
        changed
    }

    pub fn key_press(&mut self, code: KeyCode) {
        if let Some(action) = self.input.handle_key_press(code) {
            self.dispatch(action);
        }
    }

    pub fn key_release(&mut self, code: KeyCode) {
        self.input.handle_key_release(code);
    }

    /// One scheduler tick: apply held-key repeats, then run `update` if the
    /// callback is still scheduled.
    pub fn tick(&mut self) -> TickSignal {
        for action in self.input.update(self.tick_ms) {
            self.dispatch(action);
        }

        if !self.ticking {
            return TickSignal::Halt;
        }
        let signal = self.game.update(self.tick_ms);
        if signal.is_halt() {
            self.ticking = false;
        }
        signal
    }

    pub fn take_events(&mut self) -> impl Iterator<Item = CoreEvent> {
        self.game.take_events().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Phase, Side};

    #[test]
    fn test_halt_unschedules_until_restart() {
        let mut s = Session::new(16);
        s.game.left.add_point();

        assert_eq!(s.tick(), TickSignal::Halt);
        assert!(!s.ticking());
        assert_eq!(s.game.phase(), Phase::Won);

        assert!(s.dispatch(GameAction::Restart));
        assert!(s.ticking());
        assert_eq!(s.tick(), TickSignal::Continue);
    }

    #[test]
    fn test_reset_reschedules_but_wins_again() {
        let mut s = Session::new(16);
        s.game.right.add_point();
        s.tick();

        assert!(s.dispatch(GameAction::Reset));
        assert!(s.ticking());
        assert_eq!(s.tick(), TickSignal::Halt);
        assert_eq!(s.game.winner(), Some(Side::Right));
    }

    #[test]
    fn test_failed_reset_keeps_schedule() {
        let mut s = Session::new(16);
        assert!(!s.dispatch(GameAction::Reset));
        assert!(s.ticking());
    }

    #[test]
    fn test_key_press_moves_paddle() {
        let mut s = Session::new(16);
        let before = s.game.right.center_y();
        s.key_press(KeyCode::Up);
        assert!(s.game.right.center_y() > before);
        s.key_release(KeyCode::Up);
    }
}
