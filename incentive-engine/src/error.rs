//! Errors raised by the engine.
//!
//! Every variant is a caller or deployment bug, never a business outcome:
//! "daily limit reached" is a `false` from the rate limiter, not an error.

use thiserror::Error;

use crate::amount::Bps;

/// Contract or configuration violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A negative amount was supplied where only non-negative values are valid.
    #[error("negative amount: {0}")]
    NegativeAmount(String),

    /// An amount could not be parsed as a two-decimal value.
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    /// Staking duration must be at least one month.
    #[error("invalid staking duration: {months} months (minimum 1)")]
    InvalidDuration {
        /// Requested duration
        months: u32,
    },

    /// Levels start at 1.
    #[error("invalid level: {0} (minimum 1)")]
    InvalidLevel(u32),

    /// A categorical input was not one of the known tags.
    #[error("unknown {kind}: {value:?}")]
    UnknownTag {
        /// Name of the enum being parsed
        kind: &'static str,
        /// Rejected input
        value: String,
    },

    /// Discount must be strictly below 100%.
    #[error("discount {discount_bps} bps is out of range (must be < 10000)")]
    DiscountOutOfRange {
        /// Configured discount
        discount_bps: Bps,
    },

    /// Base price must be positive.
    #[error("base price must be greater than zero")]
    ZeroBasePrice,

    /// A product tier has no APY bands.
    #[error("APY schedule for {tier} tier is empty")]
    EmptySchedule {
        /// Tier name
        tier: &'static str,
    },

    /// Band upper bounds must be strictly increasing.
    #[error("APY bands for {tier} tier are not in strictly increasing month order")]
    UnorderedBands {
        /// Tier name
        tier: &'static str,
    },

    /// Exactly one unbounded band must close each schedule.
    #[error("APY schedule for {tier} tier must end with exactly one unbounded band")]
    MissingOpenBand {
        /// Tier name
        tier: &'static str,
    },

    /// Longer commitments must never earn less.
    #[error("APY for {tier} tier decreases with duration")]
    DecreasingApy {
        /// Tier name
        tier: &'static str,
    },

    /// Level thresholds must be non-empty, start at 0 and strictly increase.
    #[error("level thresholds must start at 0 and strictly increase")]
    InvalidLevelThresholds,

    /// The Growth referral tier must start before the Established tier.
    #[error("referral growth tier ({growth_from}) must start before established tier ({established_from})")]
    UnorderedReferralTiers {
        /// First prior-referral count in the Growth tier
        growth_from: u64,
        /// First prior-referral count in the Established tier
        established_from: u64,
    },

    /// Engagement bonus step would divide by zero.
    #[error("social engagement step must be greater than zero")]
    ZeroEngagementStep,
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
