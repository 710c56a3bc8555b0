//! JSONL event log.
//!
//! One JSON object per line, written through a buffered writer. Every record
//! carries a monotonically increasing `seq` and the host timestamp `ts_ms`.
//! The log observes the engine from outside: after each tick or intent the
//! host calls [`EventLog::observe`], which takes the pending commit event and
//! diffs the pause/game-over/episode flags against what it saw last.
//!
//! `session_start`, `intent` and `tick` records are the replay inputs (see
//! [`crate::replay`]). Idle ticks are elided: a tick is written when it
//! changed the game, when it is the first of the session, or when it is the
//! last tick before an intent. Skipped ticks only add elapsed time that the
//! next written tick accounts for anyway.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{GameConfig, GameState, LockEvent};
use crate::types::Intent;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRecord {
    SessionStart {
        seed: u32,
        base_fall_interval_ms: f64,
        fall_interval_damping: f64,
        lines_per_level: u32,
        lock_delay_max_moves: u8,
        preview_len: usize,
    },
    Lock {
        piece_id: u32,
        kind: &'static str,
        row: i8,
        col: i8,
        lines_cleared: u32,
        total_lines: u32,
        level: u32,
        overflow: bool,
    },
    /// Input forwarded to the engine
    Intent {
        intent: &'static str,
        applied: bool,
    },
    /// Host clock tick; `changed` if the piece descended or committed
    Tick {
        changed: bool,
    },
    LevelUp {
        level: u32,
        fall_interval_ms: f64,
    },
    Pause {
        episode_id: u32,
    },
    Resume {
        episode_id: u32,
    },
    Reset {
        episode_id: u32,
    },
    GameOver {
        episode_id: u32,
        lines_cleared: u32,
        level: u32,
    },
}

impl LogRecord {
    pub fn session_start(config: &GameConfig) -> Self {
        LogRecord::SessionStart {
            seed: config.seed,
            base_fall_interval_ms: config.base_fall_interval_ms,
            fall_interval_damping: config.fall_interval_damping,
            lines_per_level: config.lines_per_level,
            lock_delay_max_moves: config.lock_delay_max_moves,
            preview_len: config.preview_len,
        }
    }
}

impl From<&LockEvent> for LogRecord {
    fn from(event: &LockEvent) -> Self {
        LogRecord::Lock {
            piece_id: event.piece_id,
            kind: event.kind.as_str(),
            row: event.row,
            col: event.col,
            lines_cleared: event.lines_cleared,
            total_lines: event.total_lines,
            level: event.level,
            overflow: event.overflow,
        }
    }
}

#[derive(Serialize)]
struct Line<'a> {
    seq: u64,
    ts_ms: u64,
    #[serde(flatten)]
    record: &'a LogRecord,
}

/// Flags last seen by `observe`
#[derive(Debug, Clone, Copy, Default)]
struct Seen {
    paused: bool,
    game_over: bool,
    episode_id: u32,
}

pub struct EventLog<W: Write> {
    out: W,
    seq: u64,
    seen: Seen,
    /// A tick has been written this session
    ticked: bool,
    /// Latest elided tick, written ahead of the next intent
    pending_tick: Option<u64>,
}

pub type FileEventLog = EventLog<BufWriter<File>>;

impl EventLog<BufWriter<File>> {
    /// Open `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            seq: 0,
            seen: Seen::default(),
            ticked: false,
            pending_tick: None,
        }
    }

    /// Number of records written so far
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn write(&mut self, ts_ms: u64, record: &LogRecord) -> Result<()> {
        self.seq += 1;
        let line = Line {
            seq: self.seq,
            ts_ms,
            record,
        };
        serde_json::to_writer(&mut self.out, &line).context("encode event log record")?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// Write `session_start` and take the initial flags from `state`.
    pub fn start_session(&mut self, ts_ms: u64, state: &GameState) -> Result<()> {
        self.seen = Seen {
            paused: state.paused(),
            game_over: state.game_over(),
            episode_id: state.episode_id(),
        };
        self.ticked = false;
        self.pending_tick = None;
        self.write(ts_ms, &LogRecord::session_start(state.config()))
    }

    /// Record a host tick; `changed` is what `GameState::tick` returned.
    pub fn record_tick(&mut self, ts_ms: u64, changed: bool) -> Result<()> {
        if changed || !self.ticked {
            self.ticked = true;
            self.pending_tick = None;
            return self.write(ts_ms, &LogRecord::Tick { changed });
        }
        self.pending_tick = Some(ts_ms);
        Ok(())
    }

    pub fn record_intent(&mut self, ts_ms: u64, intent: Intent, applied: bool) -> Result<()> {
        if let Some(tick_ms) = self.pending_tick.take() {
            self.write(tick_ms, &LogRecord::Tick { changed: false })?;
        }
        self.write(
            ts_ms,
            &LogRecord::Intent {
                intent: intent.as_str(),
                applied,
            },
        )
    }

    /// Record whatever changed in `state` since the previous call.
    pub fn observe(&mut self, ts_ms: u64, state: &mut GameState) -> Result<()> {
        if state.episode_id() != self.seen.episode_id {
            self.seen = Seen {
                episode_id: state.episode_id(),
                ..Seen::default()
            };
            self.write(
                ts_ms,
                &LogRecord::Reset {
                    episode_id: state.episode_id(),
                },
            )?;
        }

        if let Some(event) = state.take_last_event() {
            self.write(ts_ms, &LogRecord::from(&event))?;
            if event.levels_gained > 0 {
                self.write(
                    ts_ms,
                    &LogRecord::LevelUp {
                        level: event.level,
                        fall_interval_ms: state.fall_interval_ms(),
                    },
                )?;
            }
        }

        if state.paused() != self.seen.paused {
            self.seen.paused = state.paused();
            let episode_id = state.episode_id();
            let record = if state.paused() {
                LogRecord::Pause { episode_id }
            } else {
                LogRecord::Resume { episode_id }
            };
            self.write(ts_ms, &record)?;
        }

        if state.game_over() && !self.seen.game_over {
            self.seen.game_over = true;
            self.write(
                ts_ms,
                &LogRecord::GameOver {
                    episode_id: state.episode_id(),
                    lines_cleared: state.lines_cleared(),
                    level: state.level(),
                },
            )?;
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().context("flush event log")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
