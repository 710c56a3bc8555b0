//! Rebuild a session from its JSONL event log.
//!
//! The game is recreated from the `session_start` tuning, then every `intent`
//! and `tick` record is applied in log order. Derived records (`lock`,
//! `level_up`, `pause`, ...) are skipped. A later `session_start` in the same
//! file starts over, so the state of the last session is returned.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::core::{GameConfig, GameState};
use crate::types::Intent;

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Entry {
    SessionStart {
        seed: u32,
        base_fall_interval_ms: f64,
        fall_interval_damping: f64,
        lines_per_level: u32,
        lock_delay_max_moves: u8,
        preview_len: usize,
    },
    Tick {
        ts_ms: u64,
    },
    Intent {
        intent: String,
    },
    #[serde(other)]
    Derived,
}

/// Replay the log at `path`.
pub fn replay_file(path: impl AsRef<Path>) -> Result<GameState> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("open event log {}", path.display()))?;
    replay(BufReader::new(file))
}

pub fn replay(reader: impl BufRead) -> Result<GameState> {
    let mut state: Option<GameState> = None;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.context("read event log")?;
        if line.trim().is_empty() {
            continue;
        }
        let entry: Entry = serde_json::from_str(&line)
            .with_context(|| format!("event log line {line_no}"))?;

        match entry {
            Entry::SessionStart {
                seed,
                base_fall_interval_ms,
                fall_interval_damping,
                lines_per_level,
                lock_delay_max_moves,
                preview_len,
            } => {
                state = Some(GameState::new(GameConfig {
                    seed,
                    base_fall_interval_ms,
                    fall_interval_damping,
                    lines_per_level,
                    lock_delay_max_moves,
                    preview_len,
                }));
            }
            Entry::Tick { ts_ms } => {
                session(&mut state, line_no)?.tick(ts_ms);
            }
            Entry::Intent { intent } => {
                let parsed = Intent::from_str(&intent)
                    .ok_or_else(|| anyhow!("event log line {line_no}: unknown intent {intent:?}"))?;
                session(&mut state, line_no)?.apply_intent(parsed);
            }
            Entry::Derived => {}
        }
    }

    state.ok_or_else(|| anyhow!("event log has no session_start"))
}

fn session(state: &mut Option<GameState>, line_no: usize) -> Result<&mut GameState> {
    state
        .as_mut()
        .ok_or_else(|| anyhow!("event log line {line_no}: record before session_start"))
}
