//! Level and speed progression
//!
//! `level = lines / lines_per_level + 1`. The fall interval is multiplied by
//! the damping factor once for every level gained, never per cleared line.

use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progression {
    lines_cleared: u32,
    level: u32,
    fall_interval_ms: f64,
    base_fall_interval_ms: f64,
    damping: f64,
    lines_per_level: u32,
}

/// Level reached after `lines` cleared lines
pub fn level_for(lines: u32, lines_per_level: u32) -> u32 {
    lines / lines_per_level.max(1) + 1
}

impl Progression {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            lines_cleared: 0,
            level: 1,
            fall_interval_ms: config.base_fall_interval_ms,
            base_fall_interval_ms: config.base_fall_interval_ms,
            damping: config.fall_interval_damping,
            lines_per_level: config.lines_per_level.max(1),
        }
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current gravity interval
    pub fn fall_interval_ms(&self) -> f64 {
        self.fall_interval_ms
    }

    /// Count `n` cleared lines. Returns the number of levels gained.
    pub fn on_lines_cleared(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.lines_cleared = self.lines_cleared.saturating_add(n);
        let level = level_for(self.lines_cleared, self.lines_per_level);
        let gained = level - self.level;
        for _ in 0..gained {
            self.fall_interval_ms *= self.damping;
        }
        self.level = level;
        gained
    }

    pub fn reset(&mut self) {
        self.lines_cleared = 0;
        self.level = 1;
        self.fall_interval_ms = self.base_fall_interval_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_formula() {
        for lines in 0..200 {
            assert_eq!(level_for(lines, 5), lines / 5 + 1);
        }
        assert_eq!(level_for(4, 5), 1);
        assert_eq!(level_for(5, 5), 2);
    }

    #[test]
    fn interval_changes_once_per_level_not_per_line() {
        let mut p = Progression::new(&GameConfig::default());

        assert_eq!(p.on_lines_cleared(1), 0);
        assert_eq!(p.on_lines_cleared(3), 0);
        assert_eq!(p.fall_interval_ms(), 400.0);

        // 4 -> 8 lines crosses exactly one level boundary.
        assert_eq!(p.on_lines_cleared(4), 1);
        assert_eq!(p.level(), 2);
        assert_eq!(p.fall_interval_ms(), 400.0 * 0.8);

        assert_eq!(p.on_lines_cleared(1), 0);
        assert_eq!(p.fall_interval_ms(), 400.0 * 0.8);
    }

    #[test]
    fn multi_level_jump_damps_per_level() {
        let mut p = Progression::new(&GameConfig::default());
        assert_eq!(p.on_lines_cleared(12), 2);
        assert_eq!(p.level(), 3);
        assert_eq!(p.fall_interval_ms(), 400.0 * 0.8 * 0.8);
    }

    #[test]
    fn reset_restores_base_interval() {
        let mut p = Progression::new(&GameConfig::default());
        p.on_lines_cleared(10);
        p.reset();
        assert_eq!(p.lines_cleared(), 0);
        assert_eq!(p.level(), 1);
        assert_eq!(p.fall_interval_ms(), 400.0);
    }
}
