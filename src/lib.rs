//! Stackfall (workspace facade crate).
//!
//! Re-exports the member crates under `stackfall::{core,input,term,types}` and
//! hosts the pieces that only the binary needs: environment configuration, the
//! JSONL event log and its replay.

pub use stackfall_core as core;
pub use stackfall_input as input;
pub use stackfall_term as term;
pub use stackfall_types as types;

pub mod config;
pub mod event_log;
pub mod replay;
