//! Social share rewards.
//!
//! ```text
//! engagements = likes + shares
//! engagement  = min(floor(engagements / 100) × 10, 50)
//! viral       = 100 if flagged viral or engagements ≥ 1000
//! total       = min(50 + engagement + viral, 200)
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Bonus, BonusKind, RewardBreakdown};
use crate::{
    amount::{optional_cap, Credits},
    error::{EngineError, EngineResult},
};

/// Observed reach of one shared post.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SocialEngagement {
    pub likes: u64,
    pub shares: u64,

    /// Set by moderation when a post went viral outside the counted metrics.
    pub marked_viral: bool,
}

impl SocialEngagement {
    pub fn total(&self) -> u64 {
        self.likes.saturating_add(self.shares)
    }
}

/// Social share reward parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialRewards {
    /// Paid for every accepted share.
    /// Default: 50
    pub base: Credits,

    /// Engagements per bonus step.
    /// Default: 100
    pub engagement_step: u64,

    /// Bonus per full step of engagements.
    /// Default: 10
    pub engagement_step_bonus: Credits,

    /// Ceiling on the engagement bonus.
    /// Default: 50
    pub engagement_bonus_cap: Credits,

    /// Engagements at which a post counts as viral.
    /// Default: 1000
    pub viral_threshold: u64,

    /// Default: 100
    pub viral_bonus: Credits,

    /// Ceiling on the total reward.
    /// Default: 200
    #[serde(with = "optional_cap")]
    pub cap: Option<Credits>,
}

impl Default for SocialRewards {
    fn default() -> Self {
        Self {
            base: Credits::from_whole(50),
            engagement_step: 100,
            engagement_step_bonus: Credits::from_whole(10),
            engagement_bonus_cap: Credits::from_whole(50),
            viral_threshold: 1_000,
            viral_bonus: Credits::from_whole(100),
            cap: Some(Credits::from_whole(200)),
        }
    }
}

impl SocialRewards {
    pub fn validate(&self) -> EngineResult<()> {
        if self.engagement_step == 0 {
            return Err(EngineError::ZeroEngagementStep);
        }
        Ok(())
    }

    pub fn reward(&self, engagement: SocialEngagement) -> RewardBreakdown {
        let engagements = engagement.total();

        let steps = engagements.checked_div(self.engagement_step).unwrap_or(0);
        let engagement_bonus = self
            .engagement_step_bonus
            .mul_div_floor(steps, 1)
            .min(self.engagement_bonus_cap);

        let viral_bonus = if engagement.marked_viral || engagements >= self.viral_threshold {
            self.viral_bonus
        } else {
            Credits::ZERO
        };

        let breakdown = RewardBreakdown::new(
            self.base,
            vec![
                Bonus::new(BonusKind::Engagement, engagement_bonus),
                Bonus::new(BonusKind::Viral, viral_bonus),
            ],
            self.cap,
        );
        debug!(engagements, total = %breakdown.total, "computed social share reward");
        breakdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reward(likes: u64, shares: u64, marked_viral: bool) -> RewardBreakdown {
        SocialRewards::default().reward(SocialEngagement {
            likes,
            shares,
            marked_viral,
        })
    }

    #[test]
    fn test_base_only() {
        let breakdown = reward(0, 0, false);
        assert_eq!(breakdown.base, Credits::from_whole(50));
        assert_eq!(breakdown.bonus(BonusKind::Engagement), Some(Credits::ZERO));
        assert_eq!(breakdown.bonus(BonusKind::Viral), Some(Credits::ZERO));
        assert_eq!(breakdown.total, Credits::from_whole(50));
    }

    #[test]
    fn test_engagement_steps() {
        assert_eq!(reward(99, 0, false).total, Credits::from_whole(50));
        assert_eq!(reward(60, 40, false).total, Credits::from_whole(60));
        assert_eq!(reward(250, 49, false).total, Credits::from_whole(70));

        // Bonus stops growing at 5 steps
        let breakdown = reward(900, 90, false);
        assert_eq!(breakdown.bonus(BonusKind::Engagement), Some(Credits::from_whole(50)));
        assert_eq!(breakdown.total, Credits::from_whole(100));
    }

    #[test]
    fn test_viral_by_flag_or_threshold() {
        let flagged = reward(0, 0, true);
        assert_eq!(flagged.bonus(BonusKind::Viral), Some(Credits::from_whole(100)));
        assert_eq!(flagged.total, Credits::from_whole(150));

        assert_eq!(reward(999, 0, false).bonus(BonusKind::Viral), Some(Credits::ZERO));
        assert_eq!(reward(500, 500, false).bonus(BonusKind::Viral), Some(Credits::from_whole(100)));
    }

    #[test]
    fn test_total_capped() {
        // 50 + 50 + 100 = 200 reaches the cap exactly
        assert_eq!(reward(1_000, 0, false).total, Credits::from_whole(200));
        assert_eq!(reward(8_000, 2_000, true).total, Credits::from_whole(200));

        let generous = SocialRewards {
            base: Credits::from_whole(120),
            ..Default::default()
        };
        let breakdown = generous.reward(SocialEngagement {
            likes: 5_000,
            shares: 0,
            marked_viral: false,
        });
        assert_eq!(breakdown.total, Credits::from_whole(200));
        assert_eq!(breakdown.bonus_total(), Credits::from_whole(150));
    }

    #[test]
    fn test_uncapped_config() {
        let config = SocialRewards {
            base: Credits::from_whole(120),
            cap: None,
            ..Default::default()
        };
        let breakdown = config.reward(SocialEngagement {
            likes: 5_000,
            shares: 0,
            marked_viral: false,
        });
        assert_eq!(breakdown.total, Credits::from_whole(270));
    }

    #[test]
    fn test_zero_step_rejected() {
        let config = SocialRewards {
            engagement_step: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(EngineError::ZeroEngagementStep));
    }
}
