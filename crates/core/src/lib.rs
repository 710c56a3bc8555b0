//! Core game logic - pure, deterministic, and testable
//!
//! All the rules of the falling-block puzzle live here: the board with its
//! hidden vanish row, piece shapes and rotation, the 7-bag sequence, the
//! lock-delay grace window, hold, and level progression. There is no I/O in
//! this crate; the host feeds it timestamps and intents and reads snapshots.
//!
//! # Module Structure
//!
//! - [`board`]: 10x21 grid (one vanish row), collision tests, line clearing
//! - [`pieces`]: matrix shapes and clockwise rotation (no kicks)
//! - [`rng`]: seeded 7-bag randomizer with a look-ahead queue
//! - [`active`]: the falling piece controller
//! - [`lock_delay`]: grace-window state machine
//! - [`hold`]: hold buffer
//! - [`progression`]: level and fall interval
//! - [`game_state`]: the aggregate that ties it together
//! - [`snapshot`]: read-only per-frame view
//!
//! # Example
//!
//! ```
//! use stackfall_core::{GameConfig, GameState};
//! use stackfall_core::types::Intent;
//!
//! let mut game = GameState::new(GameConfig::with_seed(12345));
//! game.tick(0);
//!
//! game.apply_intent(Intent::MoveRight);
//! game.apply_intent(Intent::RotateCw);
//! game.apply_intent(Intent::HardDrop);
//!
//! // A hard-dropped piece commits on the following tick.
//! game.tick(16);
//! assert_eq!(game.piece_id(), 2);
//! ```
//!
//! # Timing
//!
//! The host calls [`GameState::tick`](game_state::GameState::tick) once per
//! frame with a monotonic timestamp in milliseconds. Gravity steps once the
//! accumulated time exceeds the fall interval (400ms at level 1, times 0.8 per
//! level gained).

pub mod active;
pub mod board;
pub mod config;
pub mod game_state;
pub mod hold;
pub mod lock_delay;
pub mod pieces;
pub mod progression;
pub mod rng;
pub mod snapshot;

pub use stackfall_types as types;

// Re-export commonly used types for convenience
pub use active::ActivePiece;
pub use board::Board;
pub use config::GameConfig;
pub use game_state::{GameState, LockEvent};
pub use hold::{HoldSlot, HoldSwap};
pub use lock_delay::{LockDelay, LockPhase};
pub use pieces::{base_shape, spawn_column, Shape};
pub use progression::Progression;
pub use rng::{Randomizer, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
