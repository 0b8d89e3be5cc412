//! Tuning constants for character progression.

use serde::{Deserialize, Serialize};

use ql_core::StatBlock;
use ql_core::character::STARTING_THRESHOLD;

/// Configuration for a progression engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Base stats of newly created characters.
    pub starting_stats: StatBlock,
    /// Experience needed for level 2.
    pub starting_threshold: u64,
    /// Multiplier applied to the threshold on every level-up (floored).
    pub growth_factor: f64,
    /// Base stat increase per level-up.
    pub level_up_stats: StatBlock,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            starting_stats: StatBlock::STARTING,
            starting_threshold: STARTING_THRESHOLD,
            growth_factor: 1.25,
            level_up_stats: StatBlock::LEVEL_UP,
        }
    }
}

impl ProgressionConfig {
    /// Set the base stats of new characters.
    pub fn with_starting_stats(mut self, stats: StatBlock) -> Self {
        self.starting_stats = stats;
        self
    }

    /// Set the level 2 threshold (at least 1).
    pub fn with_starting_threshold(mut self, threshold: u64) -> Self {
        self.starting_threshold = threshold.max(1);
        self
    }

    /// Set the threshold growth factor (at least 1.0).
    pub fn with_growth_factor(mut self, factor: f64) -> Self {
        self.growth_factor = factor.max(1.0);
        self
    }

    /// Set the per-level stat growth.
    pub fn with_level_up_stats(mut self, stats: StatBlock) -> Self {
        self.level_up_stats = stats;
        self
    }

    /// Threshold for the level after one with `current`.
    ///
    /// Always larger than `current`, so a growth factor of 1.0 still
    /// raises the threshold by one per level.
    pub fn next_threshold(&self, current: u64) -> u64 {
        let grown = (current as f64 * self.growth_factor).floor() as u64;
        grown.max(current.saturating_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = ProgressionConfig::default();
        assert_eq!(cfg.starting_threshold, 100);
        assert!((cfg.growth_factor - 1.25).abs() < f64::EPSILON);
        assert_eq!(cfg.level_up_stats.hp, 10);
        assert_eq!(cfg.starting_stats.defense, 8);
    }

    #[test]
    fn builder_methods() {
        let cfg = ProgressionConfig::default()
            .with_starting_threshold(50)
            .with_growth_factor(2.0);
        assert_eq!(cfg.starting_threshold, 50);
        assert_eq!(cfg.next_threshold(50), 100);
    }

    #[test]
    fn builder_clamps() {
        let cfg = ProgressionConfig::default()
            .with_starting_threshold(0)
            .with_growth_factor(0.5);
        assert_eq!(cfg.starting_threshold, 1);
        assert!((cfg.growth_factor - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn next_threshold_floors() {
        let cfg = ProgressionConfig::default();
        assert_eq!(cfg.next_threshold(100), 125);
        assert_eq!(cfg.next_threshold(125), 156);
        assert_eq!(cfg.next_threshold(156), 195);
    }

    #[test]
    fn next_threshold_always_grows() {
        let flat = ProgressionConfig::default().with_growth_factor(1.0);
        assert_eq!(flat.next_threshold(1), 2);
        assert_eq!(flat.next_threshold(100), 101);
        assert_eq!(ProgressionConfig::default().next_threshold(2), 3);
        assert_eq!(flat.next_threshold(u64::MAX), u64::MAX);
    }
}
