//! Terminal input adapter.
//!
//! Maps `crossterm` key events into discrete [`crate::types::Intent`]s. The
//! engine only ever sees intents; held-key repeat for rotation is filtered out
//! here so one press is one turn.

pub mod map;

pub use stackfall_types as types;

pub use map::{handle_key_event, should_quit};
