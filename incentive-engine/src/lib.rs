//! Incentive economics for in-app credits.
//!
//! This crate turns user actions into credit amounts and experience levels
//! under fixed anti-abuse limits. It is a deterministic function library: it
//! holds no state, performs no I/O, and never credits anything itself. The
//! ledger reads balances and counts, calls the engine, and persists what it
//! returns.
//!
//! ## Modules
//!
//! | Module         | Computes                                              |
//! |----------------|-------------------------------------------------------|
//! | [`pricing`]    | Credits granted for a purchase under the discount     |
//! | [`staking`]    | Annual/total/monthly yield by duration and tier       |
//! | [`rewards`]    | Social share, referral, mission and news rewards      |
//! | [`leveling`]   | Level from XP, XP to next level, level benefits       |
//! | [`rate_limit`] | Whether one more rewarded action fits the window      |
//!
//! ## Key Concepts
//!
//! - **Credits**: Fixed-point amounts with two decimals ([`Credits`]). Every
//!   truncation floors, so the engine never over-credits.
//! - **Config**: All economic parameters live in an immutable
//!   [`EconomicsConfig`]; `Default` is the current deployment.
//! - **Tags**: Categorical inputs are closed enums parsed once at the
//!   boundary; unknown strings fail with [`EngineError::UnknownTag`].

pub mod amount;
pub mod config;
pub mod engine;
pub mod error;
pub mod leveling;
pub mod pricing;
pub mod rate_limit;
pub mod rewards;
pub mod staking;

mod tags;

pub use amount::{format_bps, Bps, Credits, BPS_SCALE, CREDIT_SCALE};
pub use config::EconomicsConfig;
pub use engine::IncentiveEngine;
pub use error::{EngineError, EngineResult};
pub use leveling::{LevelBenefits, LevelConfig, LevelProgress};
pub use pricing::{PriceQuote, PricingConfig};
pub use rate_limit::{ActionKind, RateLimits};
pub use rewards::{
    mission::ComplexityAmounts, Bonus, BonusKind, Complexity, MissionRewards, MissionType,
    NewsRewards, NewsSubmission, Quality, ReferralReward, ReferralRewards, ReferralTier,
    RewardBreakdown, RewardConfig, SocialEngagement, SocialRewards,
};
pub use staking::{ApyBand, ApySchedule, ProductTier, StakingConfig, StakingQuote};
