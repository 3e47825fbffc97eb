//! Credit purchase pricing.
//!
//! A purchase converts a money-like input amount into credits at a discounted
//! price:
//!
//! ```text
//! effective_price = base_price × (1 − discount)
//! tokens_granted  = floor2(input / effective_price)
//! savings         = floor2(tokens_granted × (base_price − effective_price))
//! ```
//!
//! Both results floor rather than round so a purchase is never over-credited.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    amount::{Bps, Credits, BPS_SCALE, CREDIT_SCALE},
    error::{EngineError, EngineResult},
};

/// Result of pricing a purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    /// Credits the buyer receives.
    pub tokens_granted: Credits,

    /// Amount the buyer pays.
    pub input_amount: Credits,

    /// Discount applied, in basis points.
    pub discount_bps: Bps,

    /// What the granted credits would have cost at base price, minus what was paid.
    pub savings: Credits,
}

/// Pricing parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Undiscounted price of one credit.
    /// Default: 1.00
    pub base_price: Credits,

    /// Current discount off the base price.
    /// Default: 8000 bps (80%)
    pub discount_bps: Bps,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_price: Credits::from_whole(1),
            discount_bps: 8_000, // 80% launch discount
        }
    }
}

impl PricingConfig {
    pub fn validate(&self) -> EngineResult<()> {
        if self.base_price.is_zero() {
            return Err(EngineError::ZeroBasePrice);
        }
        if self.discount_bps as u64 >= BPS_SCALE {
            return Err(EngineError::DiscountOutOfRange {
                discount_bps: self.discount_bps,
            });
        }
        Ok(())
    }

    /// Price of one credit after the discount, floored to a hundredth.
    ///
    /// For display only; quotes use the exact ratio.
    pub fn effective_price(&self) -> Credits {
        self.base_price.mul_div_floor(self.price_factor_bps(), BPS_SCALE)
    }

    /// Price one purchase.
    ///
    /// A zero input yields an all-zero quote (with the configured discount).
    pub fn quote_purchase(&self, input_amount: Credits) -> PriceQuote {
        let tokens_granted = self.tokens_for(input_amount);

        // savings = tokens × base × discount, in hundredths
        let savings = tokens_granted.mul_div_floor(
            self.base_price.hundredths().saturating_mul(self.discount_bps as u64),
            BPS_SCALE * CREDIT_SCALE,
        );

        debug!(
            input = %input_amount,
            tokens = %tokens_granted,
            savings = %savings,
            discount_bps = self.discount_bps,
            "quoted purchase"
        );

        PriceQuote {
            tokens_granted,
            input_amount,
            discount_bps: self.discount_bps,
            savings,
        }
    }

    /// Smallest input amount that grants at least `tokens` credits.
    pub fn cost_of_tokens(&self, tokens: Credits) -> Credits {
        // input = tokens × base × (1 − discount), rounded up
        tokens.mul_div_ceil(
            self.base_price.hundredths().saturating_mul(self.price_factor_bps()),
            BPS_SCALE * CREDIT_SCALE,
        )
    }

    fn tokens_for(&self, input_amount: Credits) -> Credits {
        // tokens = input / (base × (1 − discount)), kept exact until the final floor
        let denominator = self.base_price.hundredths().saturating_mul(self.price_factor_bps());
        if denominator == 0 {
            return Credits::ZERO;
        }
        input_amount.mul_div_floor(CREDIT_SCALE * BPS_SCALE, denominator)
    }

    fn price_factor_bps(&self) -> u64 {
        BPS_SCALE.saturating_sub(self.discount_bps as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credits(s: &str) -> Credits {
        s.parse().unwrap()
    }

    #[test]
    fn test_default_deployment_price() {
        let config = PricingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.effective_price(), credits("0.20"));
    }

    #[test]
    fn test_quote_purchase() {
        let config = PricingConfig::default();

        // 10.00 at 0.20 each = 50 credits, saving 0.80 per credit
        let quote = config.quote_purchase(credits("10"));
        assert_eq!(quote.tokens_granted, credits("50"));
        assert_eq!(quote.input_amount, credits("10"));
        assert_eq!(quote.discount_bps, 8_000);
        assert_eq!(quote.savings, credits("40"));
    }

    #[test]
    fn test_quote_floors_fractional_tokens() {
        let config = PricingConfig {
            base_price: credits("3"),
            discount_bps: 0,
        };

        // 10 / 3 = 3.333.. -> 3.33, never 3.34
        let quote = config.quote_purchase(credits("10"));
        assert_eq!(quote.tokens_granted, credits("3.33"));
        assert_eq!(quote.savings, Credits::ZERO);
    }

    #[test]
    fn test_zero_input() {
        let quote = PricingConfig::default().quote_purchase(Credits::ZERO);
        assert_eq!(quote.tokens_granted, Credits::ZERO);
        assert_eq!(quote.savings, Credits::ZERO);
        assert_eq!(quote.input_amount, Credits::ZERO);
    }

    #[test]
    fn test_smallest_input() {
        // 0.01 / 0.20 = 0.05 credits, saving 0.04
        let quote = PricingConfig::default().quote_purchase(credits("0.01"));
        assert_eq!(quote.tokens_granted, credits("0.05"));
        assert_eq!(quote.savings, credits("0.04"));
    }

    #[test]
    fn test_cost_of_tokens_inverts_quote() {
        let config = PricingConfig {
            base_price: credits("3"),
            discount_bps: 1_500,
        };

        for tokens in ["1", "3.33", "17.01", "250"] {
            let tokens = credits(tokens);
            let cost = config.cost_of_tokens(tokens);
            assert!(config.quote_purchase(cost).tokens_granted >= tokens);
            let cheaper = cost.saturating_sub(Credits::from_hundredths(1));
            assert!(
                config.quote_purchase(cheaper).tokens_granted < tokens,
                "{cost} is not the minimum cost for {tokens}"
            );
        }

        assert_eq!(PricingConfig::default().cost_of_tokens(credits("50")), credits("10"));
    }

    #[test]
    fn test_validate() {
        let full = PricingConfig {
            discount_bps: 10_000,
            ..Default::default()
        };
        assert_eq!(
            full.validate(),
            Err(EngineError::DiscountOutOfRange { discount_bps: 10_000 })
        );

        let free = PricingConfig {
            base_price: Credits::ZERO,
            ..Default::default()
        };
        assert_eq!(free.validate(), Err(EngineError::ZeroBasePrice));
    }
}
