//! Experience levels and level benefits.
//!
//! A level is the highest table index whose XP threshold has been reached.
//! The table is a hard cap: there is no level above the last threshold.
//!
//! | Level | XP     | Level | XP     |
//! |-------|--------|-------|--------|
//! | 1     | 0      | 6     | 2000   |
//! | 2     | 100    | 7     | 4000   |
//! | 3     | 250    | 8     | 8000   |
//! | 4     | 500    | 9     | 16000  |
//! | 5     | 1000   | 10    | 32000  |
//!
//! Each level adds 0.5% staking APY (at most 5%); level 5 and up get
//! priority support.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    amount::Bps,
    error::{EngineError, EngineResult},
};

/// Perks unlocked by a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LevelBenefits {
    /// Added to the staking APY, in basis points.
    pub staking_apy_bonus_bps: Bps,
    pub priority_support: bool,
}

/// Where an XP total sits on the level table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LevelProgress {
    pub level: u32,
    pub xp: u64,

    /// XP at which the current level started.
    pub current_threshold: u64,

    /// XP at which the next level starts; `None` at the top level.
    pub next_threshold: Option<u64>,

    /// XP still needed for the next level; 0 at the top level.
    pub xp_to_next: u64,
}

/// Level table and benefit parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Minimum XP for each level, starting with level 1 at 0.
    pub thresholds: Vec<u64>,

    /// Default: 50 bps (0.5%)
    pub apy_bonus_per_level_bps: Bps,

    /// Default: 500 bps (5%)
    pub max_apy_bonus_bps: Bps,

    /// Lowest level with priority support.
    /// Default: 5
    pub priority_support_level: u32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            thresholds: vec![0, 100, 250, 500, 1_000, 2_000, 4_000, 8_000, 16_000, 32_000],
            apy_bonus_per_level_bps: 50,
            max_apy_bonus_bps: 500,
            priority_support_level: 5,
        }
    }
}

impl LevelConfig {
    pub fn validate(&self) -> EngineResult<()> {
        let starts_at_zero = self.thresholds.first() == Some(&0);
        let increasing = self.thresholds.windows(2).all(|w| w[0] < w[1]);
        if !starts_at_zero || !increasing {
            return Err(EngineError::InvalidLevelThresholds);
        }
        Ok(())
    }

    /// Highest level in the table.
    pub fn max_level(&self) -> u32 {
        u32::try_from(self.thresholds.len()).unwrap_or(u32::MAX)
    }

    /// Level reached with `xp` experience (at least 1).
    pub fn level_of(&self, xp: u64) -> u32 {
        let reached = self.thresholds.partition_point(|&threshold| threshold <= xp);
        (reached as u32).max(1)
    }

    /// XP still needed to reach the next level, or 0 at the top level.
    pub fn xp_to_next_level(&self, xp: u64) -> u64 {
        self.next_threshold(self.level_of(xp))
            .map_or(0, |next| next.saturating_sub(xp))
    }

    pub fn progress(&self, xp: u64) -> LevelProgress {
        let level = self.level_of(xp);
        let next_threshold = self.next_threshold(level);
        LevelProgress {
            level,
            xp,
            current_threshold: self
                .thresholds
                .get(level as usize - 1)
                .copied()
                .unwrap_or(0),
            next_threshold,
            xp_to_next: next_threshold.map_or(0, |next| next.saturating_sub(xp)),
        }
    }

    /// Benefits of a level. Levels start at 1; anything above the table
    /// gets the top level's benefits.
    pub fn benefits_of(&self, level: u32) -> EngineResult<LevelBenefits> {
        if level == 0 {
            warn!("rejected benefits lookup for level 0");
            return Err(EngineError::InvalidLevel(level));
        }
        let level = level.min(self.max_level());
        Ok(LevelBenefits {
            staking_apy_bonus_bps: level
                .saturating_mul(self.apy_bonus_per_level_bps)
                .min(self.max_apy_bonus_bps),
            priority_support: level >= self.priority_support_level,
        })
    }

    fn next_threshold(&self, level: u32) -> Option<u64> {
        // thresholds[level] is the start of level + 1
        self.thresholds.get(level as usize).copied()
    }
}
