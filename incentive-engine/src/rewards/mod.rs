//! Category rewards.
//!
//! Each category computes a base amount plus a fixed, ordered list of
//! conditional bonuses, optionally capped:
//!
//! | Category        | Base              | Bonuses                          | Cap  |
//! |-----------------|-------------------|----------------------------------|------|
//! | Social share    | 50                | engagement (≤50), viral (100)    | 200  |
//! | Mission         | type × complexity | quality (15%/30%), early (10%)   | none |
//! | News submission | 20                | quality, relevance, first        | none |
//!
//! Referrals pay a fixed (referrer, referred) pair instead of a breakdown;
//! see [`referral`].

pub mod mission;
pub mod news;
pub mod referral;
pub mod social;

use serde::{Deserialize, Serialize};

use crate::{amount::Credits, error::EngineResult};

pub use mission::{Complexity, MissionRewards, MissionType, Quality};
pub use news::{NewsRewards, NewsSubmission};
pub use referral::{ReferralReward, ReferralRewards, ReferralTier};
pub use social::{SocialEngagement, SocialRewards};

/// Named bonus component of a reward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusKind {
    Engagement,
    Viral,
    Quality,
    Early,
    Relevance,
    FirstSubmission,
}

impl BonusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Engagement => "engagement",
            Self::Viral => "viral",
            Self::Quality => "quality",
            Self::Early => "early",
            Self::Relevance => "relevance",
            Self::FirstSubmission => "first_submission",
        }
    }
}

/// One bonus line of a [`RewardBreakdown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Bonus {
    pub kind: BonusKind,
    pub amount: Credits,
}

impl Bonus {
    pub const fn new(kind: BonusKind, amount: Credits) -> Self {
        Self { kind, amount }
    }
}

/// Itemized reward: base, bonuses in category order, and the (capped) total.
///
/// Bonuses that did not apply are still listed with a zero amount so every
/// breakdown of a category has the same shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RewardBreakdown {
    pub base: Credits,
    pub bonuses: Vec<Bonus>,
    pub total: Credits,
}

impl RewardBreakdown {
    /// Sum the components and apply `cap` if present.
    pub fn new(base: Credits, bonuses: Vec<Bonus>, cap: Option<Credits>) -> Self {
        let uncapped = base.saturating_add(bonuses.iter().map(|b| b.amount).sum());
        let total = cap.map_or(uncapped, |cap| uncapped.min(cap));
        Self {
            base,
            bonuses,
            total,
        }
    }

    /// Amount of a named bonus, if the category has one.
    pub fn bonus(&self, kind: BonusKind) -> Option<Credits> {
        self.bonuses.iter().find(|b| b.kind == kind).map(|b| b.amount)
    }

    /// Sum of all bonuses before any cap.
    pub fn bonus_total(&self) -> Credits {
        self.bonuses.iter().map(|b| b.amount).sum()
    }
}

/// Reward parameters for every category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    pub social: SocialRewards,
    pub referral: ReferralRewards,
    pub mission: MissionRewards,
    pub news: NewsRewards,
}

impl RewardConfig {
    pub fn validate(&self) -> EngineResult<()> {
        self.social.validate()?;
        self.referral.validate()
    }
}
