//! Referral rewards.
//!
//! The referrer's payout depends only on how many referrals they had already
//! completed before this one:
//!
//! | Prior referrals | Tier        | Base | Tier bonus | Referrer |
//! |-----------------|-------------|------|------------|----------|
//! | 0-9             | Starter     | 500  | 0          | 500      |
//! | 10-49           | Growth      | 300  | 100        | 400      |
//! | 50+             | Established | 200  | 100        | 300      |
//!
//! The referred user always receives 200, on top of any welcome bonus the
//! ledger grants separately.
//!
//! Callers must pass the count *before* the completing referral is recorded.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    amount::Credits,
    error::{EngineError, EngineResult},
};

/// Referral bracket by prior referral count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferralTier {
    Starter,
    Growth,
    Established,
}

impl fmt::Display for ReferralTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Starter => "starter",
            Self::Growth => "growth",
            Self::Established => "established",
        })
    }
}

/// Payout for one completed referral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ReferralReward {
    /// Bracket the referrer was in when the referral completed.
    pub tier: ReferralTier,

    /// Paid to the user who made the referral.
    pub referrer: Credits,

    /// Paid to the newly referred user.
    pub referred: Credits,
}

/// Referral reward parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferralRewards {
    /// Referrer base while below `growth_from` referrals.
    /// Default: 500
    pub starter_reward: Credits,

    /// Prior referrals at which the Growth tier starts.
    /// Default: 10
    pub growth_from: u64,

    /// Default: 300
    pub growth_reward: Credits,

    /// Prior referrals at which the Established tier starts.
    /// Default: 50
    pub established_from: u64,

    /// Default: 200
    pub established_reward: Credits,

    /// Flat bonus once the referrer reaches `tier_bonus_from` referrals.
    /// Default: 100
    pub tier_bonus: Credits,

    /// Default: 10
    pub tier_bonus_from: u64,

    /// Paid to the referred user.
    /// Default: 200
    pub referred_reward: Credits,
}

impl Default for ReferralRewards {
    fn default() -> Self {
        Self {
            starter_reward: Credits::from_whole(500),
            growth_from: 10,
            growth_reward: Credits::from_whole(300),
            established_from: 50,
            established_reward: Credits::from_whole(200),
            tier_bonus: Credits::from_whole(100),
            tier_bonus_from: 10,
            referred_reward: Credits::from_whole(200),
        }
    }
}

impl ReferralRewards {
    /// Every tier must be reachable: Growth starts strictly before Established.
    pub fn validate(&self) -> EngineResult<()> {
        if self.growth_from >= self.established_from {
            return Err(EngineError::UnorderedReferralTiers {
                growth_from: self.growth_from,
                established_from: self.established_from,
            });
        }
        Ok(())
    }

    /// Tier for a referrer with `prior_referrals` completed referrals.
    pub fn tier_for(&self, prior_referrals: u64) -> ReferralTier {
        if prior_referrals >= self.established_from {
            ReferralTier::Established
        } else if prior_referrals >= self.growth_from {
            ReferralTier::Growth
        } else {
            ReferralTier::Starter
        }
    }

    pub fn reward(&self, prior_referrals: u64) -> ReferralReward {
        let tier = self.tier_for(prior_referrals);
        let base = match tier {
            ReferralTier::Starter => self.starter_reward,
            ReferralTier::Growth => self.growth_reward,
            ReferralTier::Established => self.established_reward,
        };
        let tier_bonus = if prior_referrals >= self.tier_bonus_from {
            self.tier_bonus
        } else {
            Credits::ZERO
        };

        let reward = ReferralReward {
            tier,
            referrer: base.saturating_add(tier_bonus),
            referred: self.referred_reward,
        };
        debug!(prior_referrals, %tier, referrer = %reward.referrer, "computed referral reward");
        reward
    }
}
