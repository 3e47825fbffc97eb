//! Stateless service wrapping a validated [`EconomicsConfig`].
//!
//! Request handlers build one engine at startup and share it. Every method is
//! a pure function of its arguments and the config, so the engine is safe to
//! call from any number of threads at once. Crediting the result exactly once
//! is the ledger's job.

use tracing::debug;

use crate::{
    amount::Credits,
    config::EconomicsConfig,
    error::EngineResult,
    leveling::{LevelBenefits, LevelProgress},
    pricing::PriceQuote,
    rate_limit::ActionKind,
    rewards::{
        Complexity, MissionType, NewsSubmission, Quality, ReferralReward, RewardBreakdown,
        SocialEngagement,
    },
    staking::{ProductTier, StakingQuote},
};

#[derive(Clone, Debug, Default)]
pub struct IncentiveEngine {
    config: EconomicsConfig,
}

impl IncentiveEngine {
    /// Create an engine, rejecting structurally invalid configs.
    pub fn new(config: EconomicsConfig) -> EngineResult<Self> {
        config.validate()?;
        debug!(
            discount_bps = config.pricing.discount_bps,
            max_level = config.levels.max_level(),
            "incentive engine configured"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &EconomicsConfig {
        &self.config
    }

    pub fn quote_purchase(&self, input_amount: Credits) -> PriceQuote {
        self.config.pricing.quote_purchase(input_amount)
    }

    pub fn cost_of_tokens(&self, tokens: Credits) -> Credits {
        self.config.pricing.cost_of_tokens(tokens)
    }

    pub fn quote_staking(
        &self,
        principal: Credits,
        duration_months: u32,
        tier: ProductTier,
    ) -> EngineResult<StakingQuote> {
        self.config.staking.quote(principal, duration_months, tier)
    }

    /// Staking quote including the APY bonus earned by `level`.
    pub fn quote_staking_for_level(
        &self,
        principal: Credits,
        duration_months: u32,
        tier: ProductTier,
        level: u32,
    ) -> EngineResult<StakingQuote> {
        let benefits = self.benefits_of(level)?;
        self.config.staking.quote_with_bonus(
            principal,
            duration_months,
            tier,
            benefits.staking_apy_bonus_bps,
        )
    }

    pub fn social_share_reward(&self, engagement: SocialEngagement) -> RewardBreakdown {
        self.config.rewards.social.reward(engagement)
    }

    /// Reward for a completed referral, given the referrer's count *before*
    /// this referral is recorded.
    pub fn referral_reward(&self, prior_referrals: u64) -> ReferralReward {
        self.config.rewards.referral.reward(prior_referrals)
    }

    pub fn mission_reward(
        &self,
        mission_type: MissionType,
        complexity: Complexity,
        completed_early: bool,
        quality: Quality,
    ) -> RewardBreakdown {
        self.config
            .rewards
            .mission
            .reward(mission_type, complexity, completed_early, quality)
    }

    pub fn news_submission_reward(&self, submission: NewsSubmission) -> RewardBreakdown {
        self.config.rewards.news.reward(submission)
    }

    pub fn level_of(&self, xp: u64) -> u32 {
        self.config.levels.level_of(xp)
    }

    pub fn xp_to_next_level(&self, xp: u64) -> u64 {
        self.config.levels.xp_to_next_level(xp)
    }

    pub fn level_progress(&self, xp: u64) -> LevelProgress {
        self.config.levels.progress(xp)
    }

    pub fn benefits_of(&self, level: u32) -> EngineResult<LevelBenefits> {
        self.config.levels.benefits_of(level)
    }

    pub fn can_perform(&self, kind: ActionKind, count_so_far: u32) -> bool {
        self.config.limits.can_perform(kind, count_so_far)
    }

    pub fn remaining_actions(&self, kind: ActionKind, count_so_far: u32) -> u32 {
        self.config.limits.remaining(kind, count_so_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::EngineError, rewards::BonusKind};

    fn credits(s: &str) -> Credits {
        s.parse().unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = EconomicsConfig::default();
        config.levels.thresholds = vec![0, 50, 50];
        assert_eq!(
            IncentiveEngine::new(config).unwrap_err(),
            EngineError::InvalidLevelThresholds
        );
    }

    #[test]
    fn test_default_deployment() {
        let engine = IncentiveEngine::default();

        assert_eq!(engine.quote_purchase(credits("5")).tokens_granted, credits("25"));
        assert_eq!(
            engine
                .quote_staking(credits("100"), 4, ProductTier::Basic)
                .unwrap()
                .apy_bps,
            1_000
        );
        assert_eq!(
            engine
                .social_share_reward(SocialEngagement {
                    likes: 10_000,
                    shares: 0,
                    marked_viral: false,
                })
                .total,
            credits("200")
        );
        assert_eq!(engine.referral_reward(10).referrer, credits("400"));
        assert_eq!(
            engine
                .mission_reward(MissionType::Task, Complexity::Medium, false, Quality::High)
                .total,
            credits("650")
        );
        assert_eq!(
            engine
                .news_submission_reward(NewsSubmission {
                    highly_relevant: true,
                    ..Default::default()
                })
                .bonus(BonusKind::Relevance),
            Some(credits("50"))
        );
        assert_eq!(engine.level_of(32_000), 10);
        assert_eq!(engine.xp_to_next_level(32_000), 0);
        assert!(engine.benefits_of(5).unwrap().priority_support);
        assert!(engine.can_perform(ActionKind::SocialShare, 4));
        assert!(!engine.can_perform(ActionKind::SocialShare, 5));
        assert_eq!(engine.remaining_actions(ActionKind::NewsSubmission, 8), 2);
    }

    #[test]
    fn test_staking_with_level_bonus() {
        let engine = IncentiveEngine::default();

        // Level 4 adds 2% to the 12% one-year basic rate
        let quote = engine
            .quote_staking_for_level(credits("1000"), 12, ProductTier::Basic, 4)
            .unwrap();
        assert_eq!(quote.apy_bps, 1_400);
        assert_eq!(quote.annual_reward, credits("140"));

        // Bonus tops out at 5%
        let quote = engine
            .quote_staking_for_level(credits("1000"), 12, ProductTier::Basic, 10)
            .unwrap();
        assert_eq!(quote.apy_bps, 1_700);

        assert_eq!(
            engine.quote_staking_for_level(credits("1000"), 12, ProductTier::Basic, 0),
            Err(EngineError::InvalidLevel(0))
        );
    }

    #[test]
    fn test_level_bonus_stops_at_top_level() {
        let mut config = EconomicsConfig::default();
        config.levels.max_apy_bonus_bps = 2_000;
        let engine = IncentiveEngine::new(config).unwrap();

        // 12% scheduled + 10 levels × 0.5%
        let at_top = engine
            .quote_staking_for_level(credits("1000"), 12, ProductTier::Basic, 10)
            .unwrap();
        assert_eq!(at_top.apy_bps, 1_700);

        let beyond = engine
            .quote_staking_for_level(credits("1000"), 12, ProductTier::Basic, 40)
            .unwrap();
        assert_eq!(beyond, at_top);
    }

    #[test]
    fn test_rejects_unreachable_referral_tier() {
        let mut config = EconomicsConfig::default();
        config.rewards.referral.growth_from = 60;
        assert_eq!(
            IncentiveEngine::new(config).unwrap_err(),
            EngineError::UnorderedReferralTiers {
                growth_from: 60,
                established_from: 50,
            }
        );
    }

    #[test]
    fn test_custom_economics() {
        let mut config = EconomicsConfig::default();
        config.pricing.discount_bps = 5_000;
        config.limits.social_shares_per_day = 2;
        config.rewards.referral.referred_reward = credits("250");

        let engine = IncentiveEngine::new(config).unwrap();
        assert_eq!(engine.quote_purchase(credits("5")).tokens_granted, credits("10"));
        assert!(!engine.can_perform(ActionKind::SocialShare, 2));
        assert_eq!(engine.referral_reward(0).referred, credits("250"));
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<IncentiveEngine>();
    }
}
