//! Game tuning knobs.
//!
//! There is no config file or environment lookup; the binary always runs
//! with [`GameConfig::default`]. Tests build other values directly.

use crate::types::{GRAVITY_TICKS, POINTS_PER_LINE, TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Real-time length of one loop tick.
    pub tick_ms: u32,
    /// Ticks between gravity steps. Values below 1 behave as 1.
    pub gravity_ticks: u32,
    /// Score awarded per cleared line.
    pub points_per_line: u32,
}

impl GameConfig {
    /// Effective gravity interval in milliseconds.
    pub fn gravity_interval_ms(&self) -> u32 {
        self.tick_ms.saturating_mul(self.gravity_ticks.max(1))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            gravity_ticks: GRAVITY_TICKS,
            points_per_line: POINTS_PER_LINE,
        }
    }
}
