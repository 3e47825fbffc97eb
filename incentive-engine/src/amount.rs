//! Fixed-point credit amounts and basis-point helpers.
//!
//! Every monetary value in the engine is a [`Credits`] amount: an unsigned
//! count of hundredths of a credit. Two decimal places is the precision the
//! ledger stores, so "truncate to 2 decimals" is plain integer division and
//! no floating point ever enters a calculation.
//!
//! ```text
//! Credits(12_345)  == 123.45 credits
//! Credits(100)     ==   1.00 credit
//! ```
//!
//! Rates and fractions are expressed in basis points ([`Bps`]):
//! 10000 = 100%, 100 = 1%, 1 = 0.01%.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

/// Rate or fraction in basis points (1/10000).
pub type Bps = u32;

/// Basis points in one whole (100%).
pub const BPS_SCALE: u64 = 10_000;

/// Hundredths per whole credit.
pub const CREDIT_SCALE: u64 = 100;

/// A non-negative amount of credits with two decimal places.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Credits(u64);

impl Credits {
    pub const ZERO: Credits = Credits(0);

    /// Amount from a raw count of hundredths.
    pub const fn from_hundredths(hundredths: u64) -> Self {
        Self(hundredths)
    }

    /// Amount from a whole number of credits.
    pub const fn from_whole(whole: u64) -> Self {
        Self(whole.saturating_mul(CREDIT_SCALE))
    }

    /// Raw count of hundredths.
    pub const fn hundredths(self) -> u64 {
        self.0
    }

    /// Whole credits, discarding the fractional part.
    pub const fn whole(self) -> u64 {
        self.0 / CREDIT_SCALE
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Drop the fractional part (floor to a whole credit).
    pub const fn floor_whole(self) -> Self {
        Self(self.0 - self.0 % CREDIT_SCALE)
    }

    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Multiply by `num / den`, flooring to the nearest hundredth.
    ///
    /// Uses a u128 intermediate; saturates at `u64::MAX` hundredths.
    /// `den` must be non-zero.
    pub fn mul_div_floor(self, num: u64, den: u64) -> Self {
        Self(saturate(self.0 as u128 * num as u128 / den as u128))
    }

    /// Multiply by `num / den`, rounding up to the nearest hundredth.
    pub fn mul_div_ceil(self, num: u64, den: u64) -> Self {
        let product = self.0 as u128 * num as u128;
        let den = den as u128;
        Self(saturate((product + den - 1) / den))
    }

    /// Apply a basis-point rate, flooring to the nearest hundredth.
    pub fn apply_bps(self, rate: Bps) -> Self {
        self.mul_div_floor(rate as u64, BPS_SCALE)
    }
}

fn saturate(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

impl std::iter::Sum for Credits {
    fn sum<I: Iterator<Item = Credits>>(iter: I) -> Self {
        iter.fold(Credits::ZERO, Credits::saturating_add)
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / CREDIT_SCALE, self.0 % CREDIT_SCALE)
    }
}

impl FromStr for Credits {
    type Err = EngineError;

    /// Parse a plain decimal such as `"50"`, `"12.5"` or `"0.99"`.
    ///
    /// At most two fractional digits are accepted; callers must round before
    /// handing an amount to the engine rather than have it silently truncated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.starts_with('-') {
            return Err(EngineError::NegativeAmount(text.to_string()));
        }
        let invalid = || EngineError::InvalidAmount(text.to_string());

        let (whole, frac) = match text.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (text, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if frac.len() > 2 || !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let frac: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(CREDIT_SCALE)
            .and_then(|h| h.checked_add(frac))
            .map(Credits)
            .ok_or_else(invalid)
    }
}

// Credits travel through config files as decimal strings ("1.00"), never as
// raw hundredths, so a hand-edited TOML file reads the way the ledger does.
impl Serialize for Credits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Credits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CreditsVisitor)
    }
}

/// Accepts `"12.50"` as well as a bare integer (`50`) for whole credits.
struct CreditsVisitor;

impl serde::de::Visitor<'_> for CreditsVisitor {
    type Value = Credits;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative decimal amount with at most two decimal places")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Credits, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Credits, E> {
        v.checked_mul(CREDIT_SCALE)
            .map(Credits)
            .ok_or_else(|| E::custom(EngineError::InvalidAmount(v.to_string())))
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Credits, E> {
        match u64::try_from(v) {
            Ok(v) => self.visit_u64(v),
            Err(_) => Err(E::custom(EngineError::NegativeAmount(v.to_string()))),
        }
    }
}

/// Serde adapter for optional ceilings: `"none"` means no ceiling.
///
/// TOML has no null, so an absent value cannot be told apart from a field
/// left at its default.
pub mod optional_cap {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::Credits;

    const NONE: &str = "none";

    pub fn serialize<S: Serializer>(cap: &Option<Credits>, serializer: S) -> Result<S::Ok, S::Error> {
        match cap {
            Some(cap) => serializer.collect_str(cap),
            None => serializer.serialize_str(NONE),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Credits>, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Whole(u64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(text) if text == NONE => Ok(None),
            Raw::Text(text) => text.parse().map(Some).map_err(D::Error::custom),
            Raw::Whole(whole) => Ok(Some(Credits::from_whole(whole))),
        }
    }
}

/// Format a basis-point rate as a percentage string (`800` -> `"8.00%"`).
pub fn format_bps(rate: Bps) -> String {
    format!("{}.{:02}%", rate / 100, rate % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("50".parse::<Credits>().unwrap(), Credits::from_whole(50));
        assert_eq!("12.5".parse::<Credits>().unwrap(), Credits::from_hundredths(1250));
        assert_eq!("0.99".parse::<Credits>().unwrap(), Credits::from_hundredths(99));
        assert_eq!(".5".parse::<Credits>().unwrap(), Credits::from_hundredths(50));
        assert_eq!(" 7. ".parse::<Credits>().unwrap(), Credits::from_whole(7));

        assert_eq!(Credits::from_hundredths(12_345).to_string(), "123.45");
        assert_eq!(Credits::from_whole(1).to_string(), "1.00");
        assert_eq!(Credits::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "-1".parse::<Credits>(),
            Err(EngineError::NegativeAmount(_))
        ));
        for bad in ["", ".", "1.234", "abc", "1e5", "1.2.3", "+4", "99999999999999999999"] {
            assert!(
                matches!(bad.parse::<Credits>(), Err(EngineError::InvalidAmount(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_floor_and_ceil() {
        let amount = Credits::from_hundredths(1001);
        assert_eq!(amount.mul_div_floor(1, 3), Credits::from_hundredths(333));
        assert_eq!(amount.mul_div_ceil(1, 3), Credits::from_hundredths(334));
        assert_eq!(amount.floor_whole(), Credits::from_whole(10));
        assert_eq!(Credits::from_whole(500).apply_bps(3000), Credits::from_whole(150));
    }

    #[test]
    fn test_saturation() {
        let max = Credits::from_hundredths(u64::MAX);
        assert_eq!(max.saturating_add(Credits::from_whole(1)), max);
        assert_eq!(max.mul_div_floor(10, 1), max);
        assert_eq!(Credits::ZERO.saturating_sub(Credits::from_whole(1)), Credits::ZERO);
    }

    #[test]
    fn test_optional_cap_serde() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Capped {
            #[serde(with = "optional_cap")]
            cap: Option<Credits>,
        }

        let some = Capped {
            cap: Some(Credits::from_whole(200)),
        };
        let text = toml::to_string(&some).unwrap();
        assert_eq!(text.trim(), r#"cap = "200.00""#);
        assert_eq!(toml::from_str::<Capped>(&text).unwrap(), some);

        let none = Capped { cap: None };
        let text = toml::to_string(&none).unwrap();
        assert_eq!(text.trim(), r#"cap = "none""#);
        assert_eq!(toml::from_str::<Capped>(&text).unwrap(), none);

        assert_eq!(
            toml::from_str::<Capped>("cap = 150").unwrap(),
            Capped {
                cap: Some(Credits::from_whole(150))
            }
        );
    }

    #[test]
    fn test_format_bps() {
        assert_eq!(format_bps(800), "8.00%");
        assert_eq!(format_bps(1750), "17.50%");
        assert_eq!(format_bps(5), "0.05%");
    }
}
