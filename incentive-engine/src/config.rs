use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    error::EngineResult, leveling::LevelConfig, pricing::PricingConfig, rate_limit::RateLimits,
    rewards::RewardConfig, staking::StakingConfig,
};

/// Every economic parameter of the engine.
///
/// Sections left out of a config file fall back to the current deployment
/// values, so a file only needs the parameters it overrides:
///
/// ```toml
/// [pricing]
/// discount_bps = 5000
///
/// [limits]
/// social_shares_per_day = 3
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicsConfig {
    pub pricing: PricingConfig,
    pub staking: StakingConfig,
    pub rewards: RewardConfig,
    pub levels: LevelConfig,
    pub limits: RateLimits,
}

impl EconomicsConfig {
    /// Check structural invariants of every section.
    pub fn validate(&self) -> EngineResult<()> {
        self.pricing.validate()?;
        self.staking.validate()?;
        self.rewards.validate()?;
        self.levels.validate()
    }

    /// Load config from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read economics config from {}", path.display()))?;

        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse economics config from {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid economics config in {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write economics config to {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize economics config")
    }
}
