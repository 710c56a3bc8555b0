//! Host configuration from environment variables.
//!
//! Unset, empty or unparsable values fall back to defaults silently.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::GameConfig;
use crate::types::FRAME_MS;

pub const ENV_SEED: &str = "STACKFALL_SEED";
pub const ENV_FALL_MS: &str = "STACKFALL_FALL_MS";
pub const ENV_PREVIEW: &str = "STACKFALL_PREVIEW";
pub const ENV_FRAME_MS: &str = "STACKFALL_FRAME_MS";
pub const ENV_LOG_PATH: &str = "STACKFALL_LOG_PATH";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub game: GameConfig,
    /// Host frame period
    pub frame_ms: u64,
    /// JSONL event log destination; None disables logging
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            frame_ms: FRAME_MS,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse = |key: &str| lookup(key).map(|s| s.trim().to_string());

        let defaults = GameConfig::default();
        let seed = parse(ENV_SEED)
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);
        let base_fall_interval_ms = parse(ENV_FALL_MS)
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.base_fall_interval_ms);
        let preview_len = parse(ENV_PREVIEW)
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.preview_len);

        let frame_ms = parse(ENV_FRAME_MS)
            .and_then(|s| s.parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(FRAME_MS);

        let log_path = parse(ENV_LOG_PATH).filter(|s| !s.is_empty());

        let game = GameConfig {
            seed,
            base_fall_interval_ms,
            preview_len,
            ..defaults
        }
        .normalized();

        Self {
            game,
            frame_ms,
            log_path,
        }
    }
}

/// Seed derived from the wall clock, for unseeded sessions.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
