//! Engine tuning. Pure data; loading from the environment lives in the host.

use crate::types::{
    BASE_FALL_INTERVAL_MS, FALL_INTERVAL_DAMPING, LINES_PER_LEVEL, LOCK_DELAY_MAX_MOVES,
    MAX_PREVIEW_LEN, PREVIEW_LEN,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Randomizer seed
    pub seed: u32,
    /// Gravity interval at level 1
    pub base_fall_interval_ms: f64,
    /// Interval multiplier applied once per level gained
    pub fall_interval_damping: f64,
    pub lines_per_level: u32,
    /// Grace-window move allowance per piece
    pub lock_delay_max_moves: u8,
    /// Upcoming kinds exposed in snapshots, clamped to `1..=MAX_PREVIEW_LEN`
    pub preview_len: usize,
}

impl GameConfig {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Clamp out-of-range values to something playable.
    pub fn normalized(mut self) -> Self {
        self.preview_len = self.preview_len.clamp(1, MAX_PREVIEW_LEN);
        self.lines_per_level = self.lines_per_level.max(1);
        self.lock_delay_max_moves = self.lock_delay_max_moves.max(1);
        if !(self.base_fall_interval_ms.is_finite() && self.base_fall_interval_ms > 0.0) {
            self.base_fall_interval_ms = BASE_FALL_INTERVAL_MS;
        }
        if !(self.fall_interval_damping > 0.0 && self.fall_interval_damping <= 1.0) {
            self.fall_interval_damping = FALL_INTERVAL_DAMPING;
        }
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            base_fall_interval_ms: BASE_FALL_INTERVAL_MS,
            fall_interval_damping: FALL_INTERVAL_DAMPING,
            lines_per_level: LINES_PER_LEVEL,
            lock_delay_max_moves: LOCK_DELAY_MAX_MOVES,
            preview_len: PREVIEW_LEN,
        }
    }
}
