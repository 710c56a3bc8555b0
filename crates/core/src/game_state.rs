//! Game state module - the single engine aggregate
//!
//! Ties together board, randomizer, active piece, lock delay, hold and
//! progression. All mutable state lives here; the host drives it with
//! `tick(now_ms)` once per frame and forwards discrete intents in between.
//!
//! Per tick: if the active piece was hard-dropped it commits immediately.
//! Inside a grace window only the window clock runs; when the window closes the
//! pending gravity step runs at once. Otherwise gravity accumulates elapsed
//! time and steps once it exceeds the fall interval. A gravity step that
//! cannot descend commits the piece.

use crate::active::ActivePiece;
use crate::board::Board;
use crate::config::GameConfig;
use crate::hold::{HoldSlot, HoldSwap};
use crate::lock_delay::LockPhase;
use crate::progression::Progression;
use crate::rng::Randomizer;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Intent, PieceKind, HIDDEN_ROWS};

/// Emitted when a piece commits; taken by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub piece_id: u32,
    pub kind: PieceKind,
    pub row: i8,
    pub col: i8,
    /// Lines cleared by this commit
    pub lines_cleared: u32,
    pub total_lines: u32,
    pub level: u32,
    pub levels_gained: u32,
    /// The committed piece reached into the vanish row
    pub overflow: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    randomizer: Randomizer,
    active: Option<ActivePiece>,
    hold: HoldSlot,
    progression: Progression,
    /// Timestamp of the previous tick
    last_tick_ms: Option<u64>,
    /// Unpaused time since the last gravity step
    gravity_elapsed_ms: f64,
    /// Monotonic id for active piece instances (spawns and hold swaps)
    piece_id: u32,
    /// Increments on reset
    episode_id: u32,
    last_event: Option<LockEvent>,
    paused: bool,
    game_over: bool,
}

impl GameState {
    /// Create a game and spawn its first piece
    pub fn new(config: GameConfig) -> Self {
        let config = config.normalized();
        let mut state = Self {
            config,
            board: Board::new(),
            randomizer: Randomizer::new(config.seed),
            active: None,
            hold: HoldSlot::new(),
            progression: Progression::new(&config),
            last_tick_ms: None,
            gravity_elapsed_ms: 0.0,
            piece_id: 0,
            episode_id: 0,
            last_event: None,
            paused: false,
            game_over: false,
        };
        state.spawn_next();
        state
    }

    /// Reinitialize board, sequence queue, hold buffer and progression.
    pub fn reset(&mut self) {
        self.board.clear();
        self.randomizer.reset();
        self.hold.clear();
        self.progression.reset();
        self.active = None;
        self.gravity_elapsed_ms = 0.0;
        self.last_event = None;
        self.paused = false;
        self.game_over = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.spawn_next();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions in tests and benches.
    #[doc(hidden)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold.held()
    }

    pub fn hold_locked(&self) -> bool {
        self.hold.is_locked()
    }

    pub fn upcoming(&self) -> &[PieceKind] {
        self.randomizer.preview(self.config.preview_len)
    }

    pub fn lines_cleared(&self) -> u32 {
        self.progression.lines_cleared()
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn fall_interval_ms(&self) -> f64 {
        self.progression.fall_interval_ms()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Take and clear the last commit event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Make `kind` the active piece in its spawn state.
    ///
    /// If it does not fit at the spawn position the game is over (block out).
    pub fn spawn(&mut self, kind: PieceKind) -> bool {
        let piece = ActivePiece::spawn(kind);
        self.gravity_elapsed_ms = 0.0;
        if !piece.fits(&self.board) {
            self.active = None;
            self.game_over = true;
            return false;
        }
        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        true
    }

    fn spawn_next(&mut self) -> bool {
        let kind = self.randomizer.next_kind();
        self.spawn(kind)
    }

    /// Whether piece intents (move, rotate, drop, hold) are accepted now
    fn accepts_piece_input(&self) -> bool {
        !self.paused
            && !self.game_over
            && self.active.map_or(false, |piece| !piece.committed)
    }

    /// Apply a move or rotation and feed the lock-delay state machine.
    fn manipulate(&mut self, op: impl FnOnce(&mut ActivePiece, &Board) -> bool) -> bool {
        if !self.accepts_piece_input() {
            return false;
        }
        let board = &self.board;
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        let grounded = !active.can_descend(board);
        let succeeded = op(active, board);
        active.lock.register(grounded, succeeded);
        succeeded
    }

    /// Shift the active piece. Silent no-op if the target is illegal.
    pub fn try_move(&mut self, d_row: i8, d_col: i8) -> bool {
        self.manipulate(|active, board| active.try_move(board, d_row, d_col))
    }

    /// Rotate the active piece clockwise in place.
    pub fn try_rotate_cw(&mut self) -> bool {
        self.manipulate(|active, board| active.try_rotate_cw(board))
    }

    /// Drop to the ghost row and mark committed; the next tick commits it.
    pub fn hard_drop(&mut self) -> bool {
        if !self.accepts_piece_input() {
            return false;
        }
        let board = &self.board;
        match self.active.as_mut() {
            Some(active) => {
                active.hard_drop(board);
                true
            }
            None => false,
        }
    }

    /// Swap the active piece with the hold slot, once per committed piece.
    pub fn hold(&mut self) -> bool {
        if !self.accepts_piece_input() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        match self.hold.swap(active.kind) {
            None => false,
            Some(HoldSwap::Stored) => {
                self.spawn_next();
                true
            }
            Some(HoldSwap::Swapped(kind)) => {
                self.spawn(kind);
                true
            }
        }
    }

    /// Toggle pause. Ignored once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Lowest row the active piece could reach, without moving it
    pub fn ghost_row(&self) -> Option<i8> {
        self.active.map(|piece| piece.ghost_row(&self.board))
    }

    /// Apply one intent. Returns whether anything changed.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::MoveLeft => self.try_move(0, -1),
            Intent::MoveRight => self.try_move(0, 1),
            Intent::SoftDrop => self.try_move(1, 0),
            Intent::RotateCw => self.try_rotate_cw(),
            Intent::HardDrop => self.hard_drop(),
            Intent::Hold => self.hold(),
            Intent::Pause => self.toggle_pause(),
            Intent::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Advance the clock to `now_ms` (monotonic milliseconds).
    ///
    /// Returns true if the active piece descended or committed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let dt_ms = self
            .last_tick_ms
            .map_or(0, |prev| now_ms.saturating_sub(prev)) as f64;
        self.last_tick_ms = Some(now_ms);

        if self.paused || self.game_over {
            return false;
        }
        let interval = self.progression.fall_interval_ms();
        let max_moves = self.config.lock_delay_max_moves;
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        if active.committed {
            self.commit_active();
            return true;
        }

        if active.lock.phase() == LockPhase::Grace {
            if active.lock.advance(dt_ms, interval, max_moves) {
                return self.gravity_step();
            }
            return false;
        }

        self.gravity_elapsed_ms += dt_ms;
        if self.gravity_elapsed_ms > interval {
            return self.gravity_step();
        }
        false
    }

    /// Descend one row, or commit if that is illegal.
    fn gravity_step(&mut self) -> bool {
        self.gravity_elapsed_ms = 0.0;
        let board = &self.board;
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if !active.try_move(board, 1, 0) {
            self.commit_active();
        }
        true
    }

    /// Commit sequence: absorb cells, clear lines, update progression,
    /// release hold, spawn the next piece (unless the board overflowed).
    fn commit_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let overflow = self
            .board
            .commit(&active.shape, active.kind, active.row, active.col);
        let cleared = self.board.clear_full_lines().len() as u32;
        let levels_gained = self.progression.on_lines_cleared(cleared);
        self.hold.release();

        self.last_event = Some(LockEvent {
            piece_id: self.piece_id,
            kind: active.kind,
            row: active.row,
            col: active.col,
            lines_cleared: cleared,
            total_lines: self.progression.lines_cleared(),
            level: self.progression.level(),
            levels_gained,
            overflow,
        });

        if overflow {
            self.game_over = true;
            return;
        }
        self.spawn_next();
    }

    /// Fill `out` with the current state, reusing its storage.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let hidden = HIDDEN_ROWS as usize;
        for (r, row) in out.board.iter_mut().enumerate() {
            if let Some(cells) = self.board.row(r + hidden) {
                row.copy_from_slice(cells);
            }
        }

        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_row = self.ghost_row();
        out.hold = self.hold.held();
        out.hold_locked = self.hold.is_locked();
        out.next.clear();
        out.next
            .extend(self.upcoming().iter().copied().take(out.next.capacity()));
        out.lines_cleared = self.progression.lines_cleared();
        out.level = self.progression.level();
        out.fall_interval_ms = self.progression.fall_interval_ms();
        out.lock_phase = self
            .active
            .map_or(LockPhase::Falling, |piece| piece.lock.phase());
        out.piece_id = self.piece_id;
        out.episode_id = self.episode_id;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
