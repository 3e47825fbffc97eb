//! Staking yield quotes.
//!
//! Each product tier owns a step schedule of APY bands keyed by commitment
//! length. A band covers every duration up to and including its upper bound;
//! the last band is unbounded.
//!
//! ## Default Schedules
//!
//! | Months  | Basic | Project | Research |
//! |---------|-------|---------|----------|
//! | 1-3     | 8%    | 10%     | 12%      |
//! | 4-6     | 10%   | 12%     | 15%      |
//! | 7-12    | 12%   | 15%     | 18%      |
//! | 13-24   | 15%   | 18%     | 22%      |
//! | 25+     | 17%   | 20%     | 25%      |
//!
//! ## Formula
//!
//! ```text
//! annual  = floor2(principal × apy / 100)
//! total   = floor2(annual × months / 12)
//! monthly = floor2(annual / 12)
//! ```
//!
//! `monthly` is the run-rate of a full year, not `total / months`. The two
//! can differ when the term is not a whole number of years.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    amount::{Bps, Credits, BPS_SCALE},
    error::{EngineError, EngineResult},
    tags::string_tags,
};

/// Staking product, each with its own APY schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductTier {
    /// General-purpose staking.
    Basic,

    /// Stake backing a specific project.
    Project,

    /// Stake backing research work.
    Research,
}

string_tags!(ProductTier, "product tier", {
    Basic => "basic",
    Project => "project",
    Research => "research",
});

/// One step of an APY schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApyBand {
    /// Longest duration (inclusive) this band covers; `None` for the final band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_to_months: Option<u32>,

    /// Annual yield in basis points.
    pub apy_bps: Bps,
}

impl ApyBand {
    pub const fn bounded(up_to_months: u32, apy_bps: Bps) -> Self {
        Self {
            up_to_months: Some(up_to_months),
            apy_bps,
        }
    }

    pub const fn open(apy_bps: Bps) -> Self {
        Self {
            up_to_months: None,
            apy_bps,
        }
    }
}

/// Ordered APY bands for one product tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApySchedule {
    bands: Vec<ApyBand>,
}

impl ApySchedule {
    pub fn new(bands: Vec<ApyBand>) -> Self {
        Self { bands }
    }

    pub fn bands(&self) -> &[ApyBand] {
        &self.bands
    }

    /// APY for a duration: the first band whose bound covers it, else the
    /// unbounded band.
    pub fn apy_bps(&self, months: u32) -> Bps {
        self.bands
            .iter()
            .find(|band| band.up_to_months.map_or(true, |bound| months <= bound))
            .or_else(|| self.bands.last())
            .map_or(0, |band| band.apy_bps)
    }

    fn validate(&self, tier: ProductTier) -> EngineResult<()> {
        let tier = tier.as_str();
        let (last, bounded) = self
            .bands
            .split_last()
            .ok_or(EngineError::EmptySchedule { tier })?;

        if last.up_to_months.is_some() || bounded.iter().any(|b| b.up_to_months.is_none()) {
            return Err(EngineError::MissingOpenBand { tier });
        }

        for pair in self.bands.windows(2) {
            if let (Some(lo), Some(hi)) = (pair[0].up_to_months, pair[1].up_to_months) {
                if hi <= lo {
                    return Err(EngineError::UnorderedBands { tier });
                }
            }
            if pair[1].apy_bps < pair[0].apy_bps {
                return Err(EngineError::DecreasingApy { tier });
            }
        }
        Ok(())
    }
}

/// Yield of a staking position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StakingQuote {
    /// Annual yield applied, in basis points.
    pub apy_bps: Bps,

    /// Reward for one full year.
    pub annual_reward: Credits,

    /// Reward over the whole term.
    pub total_reward: Credits,

    /// One twelfth of the annual reward.
    pub monthly_reward: Credits,
}

/// APY schedules for every product tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StakingConfig {
    pub basic: ApySchedule,
    pub project: ApySchedule,
    pub research: ApySchedule,
}

impl Default for StakingConfig {
    fn default() -> Self {
        Self {
            basic: ApySchedule::new(vec![
                ApyBand::bounded(3, 800),
                ApyBand::bounded(6, 1_000),
                ApyBand::bounded(12, 1_200),
                ApyBand::bounded(24, 1_500),
                ApyBand::open(1_700),
            ]),
            project: ApySchedule::new(vec![
                ApyBand::bounded(3, 1_000),
                ApyBand::bounded(6, 1_200),
                ApyBand::bounded(12, 1_500),
                ApyBand::bounded(24, 1_800),
                ApyBand::open(2_000),
            ]),
            research: ApySchedule::new(vec![
                ApyBand::bounded(3, 1_200),
                ApyBand::bounded(6, 1_500),
                ApyBand::bounded(12, 1_800),
                ApyBand::bounded(24, 2_200),
                ApyBand::open(2_500),
            ]),
        }
    }
}

impl StakingConfig {
    pub fn schedule(&self, tier: ProductTier) -> &ApySchedule {
        match tier {
            ProductTier::Basic => &self.basic,
            ProductTier::Project => &self.project,
            ProductTier::Research => &self.research,
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        ProductTier::ALL
            .iter()
            .copied()
            .try_for_each(|tier| self.schedule(tier).validate(tier))
    }

    /// Quote a staking position at the tier's scheduled APY.
    pub fn quote(
        &self,
        principal: Credits,
        duration_months: u32,
        tier: ProductTier,
    ) -> EngineResult<StakingQuote> {
        self.quote_with_bonus(principal, duration_months, tier, 0)
    }

    /// Quote a staking position with `bonus_bps` added on top of the
    /// scheduled APY.
    pub fn quote_with_bonus(
        &self,
        principal: Credits,
        duration_months: u32,
        tier: ProductTier,
        bonus_bps: Bps,
    ) -> EngineResult<StakingQuote> {
        if duration_months == 0 {
            warn!(%tier, "rejected staking quote with zero duration");
            return Err(EngineError::InvalidDuration {
                months: duration_months,
            });
        }

        let apy_bps = self
            .schedule(tier)
            .apy_bps(duration_months)
            .saturating_add(bonus_bps);

        let annual_reward = principal.mul_div_floor(apy_bps as u64, BPS_SCALE);
        let total_reward = annual_reward.mul_div_floor(duration_months as u64, 12);
        let monthly_reward = annual_reward.mul_div_floor(1, 12);

        debug!(
            %tier,
            principal = %principal,
            months = duration_months,
            apy_bps,
            total = %total_reward,
            "quoted staking position"
        );

        Ok(StakingQuote {
            apy_bps,
            annual_reward,
            total_reward,
            monthly_reward,
        })
    }
}
