//! Lock-delay state machine
//!
//! A grounded piece normally commits on its next gravity step. If the player
//! manipulates it while grounded, it gets one grace window instead: it may
//! keep sliding and rotating until the window has lasted a full fall interval
//! or the move allowance is spent. A piece gets one window per life.
//!
//! References: https://tetris.wiki/Lock_delay, https://harddrop.com/wiki/lock_delay

/// Current phase of the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LockPhase {
    #[default]
    Falling,
    Grace,
}

/// Per-piece lock-delay state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LockDelay {
    phase: LockPhase,
    /// Time spent in the current grace window
    elapsed_ms: f64,
    /// Manipulations counted in the current grace window
    moves: u8,
    /// Set once a window has been used up; blocks any further window
    cooldown: bool,
}

impl LockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LockPhase {
        self.phase
    }

    pub fn in_grace(&self) -> bool {
        self.phase == LockPhase::Grace
    }

    pub fn cooldown(&self) -> bool {
        self.cooldown
    }

    pub fn moves(&self) -> u8 {
        self.moves
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Record a move/rotate intent.
    ///
    /// `grounded` is whether the piece could not descend before the intent was
    /// applied; `succeeded` is whether the intent changed the piece.
    ///
    /// Returns true if this intent opened the grace window.
    pub fn register(&mut self, grounded: bool, succeeded: bool) -> bool {
        match self.phase {
            LockPhase::Falling => {
                if grounded && !self.cooldown {
                    self.phase = LockPhase::Grace;
                    self.elapsed_ms = 0.0;
                    self.moves = 1;
                    return true;
                }
                false
            }
            LockPhase::Grace => {
                if succeeded {
                    self.moves = self.moves.saturating_add(1);
                }
                false
            }
        }
    }

    /// Advance the window clock by `dt_ms`.
    ///
    /// Returns true when the window closes on this call (time reached the fall
    /// interval or the move allowance is spent). The caller then re-runs the
    /// pending gravity step. Does nothing while falling.
    pub fn advance(&mut self, dt_ms: f64, fall_interval_ms: f64, max_moves: u8) -> bool {
        if self.phase != LockPhase::Grace {
            return false;
        }
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= fall_interval_ms || self.moves >= max_moves {
            self.phase = LockPhase::Falling;
            self.elapsed_ms = 0.0;
            self.moves = 0;
            self.cooldown = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: f64 = 400.0;
    const MAX: u8 = 5;

    #[test]
    fn airborne_intents_do_not_open_window() {
        let mut lock = LockDelay::new();
        assert!(!lock.register(false, true));
        assert_eq!(lock.phase(), LockPhase::Falling);
        assert_eq!(lock.moves(), 0);
    }

    #[test]
    fn grounded_intent_opens_window_even_if_rejected() {
        let mut lock = LockDelay::new();
        assert!(lock.register(true, false));
        assert!(lock.in_grace());
        assert_eq!(lock.moves(), 1);
        assert_eq!(lock.elapsed_ms(), 0.0);
    }

    #[test]
    fn window_timer_is_not_reset_by_further_moves() {
        let mut lock = LockDelay::new();
        lock.register(true, true);
        assert!(!lock.advance(300.0, INTERVAL, MAX));
        lock.register(true, true);
        assert_eq!(lock.elapsed_ms(), 300.0);
        assert!(lock.advance(100.0, INTERVAL, MAX));
        assert_eq!(lock.phase(), LockPhase::Falling);
        assert!(lock.cooldown());
    }

    #[test]
    fn failed_moves_are_not_counted_inside_window() {
        let mut lock = LockDelay::new();
        lock.register(true, true);
        lock.register(true, false);
        lock.register(true, false);
        assert_eq!(lock.moves(), 1);
    }

    #[test]
    fn move_allowance_closes_window_early() {
        let mut lock = LockDelay::new();
        lock.register(true, true);
        for _ in 0..3 {
            lock.register(true, true);
        }
        assert!(!lock.advance(1.0, INTERVAL, MAX));
        lock.register(true, true);
        assert_eq!(lock.moves(), MAX);
        assert!(lock.advance(1.0, INTERVAL, MAX));
    }

    #[test]
    fn cooldown_blocks_a_second_window() {
        let mut lock = LockDelay::new();
        lock.register(true, true);
        assert!(lock.advance(INTERVAL, INTERVAL, MAX));
        assert!(!lock.register(true, true));
        assert_eq!(lock.phase(), LockPhase::Falling);
    }

    #[test]
    fn advance_is_inert_while_falling() {
        let mut lock = LockDelay::new();
        assert!(!lock.advance(10_000.0, INTERVAL, MAX));
        assert!(!lock.cooldown());
    }
}
