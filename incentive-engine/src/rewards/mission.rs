//! Mission rewards.
//!
//! The base amount is looked up by mission type and complexity:
//!
//! | Type            | Low  | Medium | High   |
//! |-----------------|------|--------|--------|
//! | Vacancy         | 500  | 2000   | 5000   |
//! | Task            | 100  | 500    | 2000   |
//! | Partnership     | 1000 | 5000   | 10000  |
//! | News submission | 20   | 20     | 20     |
//!
//! Bonuses are fractions of the base, each floored to a whole credit:
//! quality adds 30% (high) or 15% (medium), early completion adds 10%.
//! The total is uncapped.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Bonus, BonusKind, RewardBreakdown};
use crate::{
    amount::{Bps, Credits},
    tags::string_tags,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionType {
    Vacancy,
    Task,
    NewsSubmission,
    Partnership,
}

string_tags!(MissionType, "mission type", {
    Vacancy => "vacancy",
    Task => "task",
    NewsSubmission => "news_submission",
    Partnership => "partnership",
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

string_tags!(Complexity, "complexity", {
    Low => "low",
    Medium => "medium",
    High => "high",
});

/// Reviewer's grade of the delivered work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    Medium,
    High,
}

string_tags!(Quality, "quality", {
    Low => "low",
    Medium => "medium",
    High => "high",
});

/// Base amounts for one mission type, by complexity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityAmounts {
    pub low: Credits,
    pub medium: Credits,
    pub high: Credits,
}

impl ComplexityAmounts {
    pub const fn whole(low: u64, medium: u64, high: u64) -> Self {
        Self {
            low: Credits::from_whole(low),
            medium: Credits::from_whole(medium),
            high: Credits::from_whole(high),
        }
    }

    /// Same amount at every complexity.
    pub const fn flat(amount: u64) -> Self {
        Self::whole(amount, amount, amount)
    }

    pub fn get(&self, complexity: Complexity) -> Credits {
        match complexity {
            Complexity::Low => self.low,
            Complexity::Medium => self.medium,
            Complexity::High => self.high,
        }
    }
}

/// Mission reward parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionRewards {
    /// Quality bonus for high-quality work.
    /// Default: 3000 bps (30%)
    pub high_quality_bonus_bps: Bps,

    /// Quality bonus for medium-quality work.
    /// Default: 1500 bps (15%)
    pub medium_quality_bonus_bps: Bps,

    /// Bonus for completing before the deadline.
    /// Default: 1000 bps (10%)
    pub early_bonus_bps: Bps,

    pub vacancy: ComplexityAmounts,
    pub task: ComplexityAmounts,
    pub partnership: ComplexityAmounts,
    pub news_submission: ComplexityAmounts,
}

impl Default for MissionRewards {
    fn default() -> Self {
        Self {
            high_quality_bonus_bps: 3_000,
            medium_quality_bonus_bps: 1_500,
            early_bonus_bps: 1_000,
            vacancy: ComplexityAmounts::whole(500, 2_000, 5_000),
            task: ComplexityAmounts::whole(100, 500, 2_000),
            partnership: ComplexityAmounts::whole(1_000, 5_000, 10_000),
            news_submission: ComplexityAmounts::flat(20),
        }
    }
}

impl MissionRewards {
    pub fn base(&self, mission_type: MissionType, complexity: Complexity) -> Credits {
        let amounts = match mission_type {
            MissionType::Vacancy => &self.vacancy,
            MissionType::Task => &self.task,
            MissionType::NewsSubmission => &self.news_submission,
            MissionType::Partnership => &self.partnership,
        };
        amounts.get(complexity)
    }

    pub fn quality_bonus_bps(&self, quality: Quality) -> Bps {
        match quality {
            Quality::High => self.high_quality_bonus_bps,
            Quality::Medium => self.medium_quality_bonus_bps,
            Quality::Low => 0,
        }
    }

    pub fn reward(
        &self,
        mission_type: MissionType,
        complexity: Complexity,
        completed_early: bool,
        quality: Quality,
    ) -> RewardBreakdown {
        let base = self.base(mission_type, complexity);

        let quality_bonus = base.apply_bps(self.quality_bonus_bps(quality)).floor_whole();
        let early_bonus = if completed_early {
            base.apply_bps(self.early_bonus_bps).floor_whole()
        } else {
            Credits::ZERO
        };

        let breakdown = RewardBreakdown::new(
            base,
            vec![
                Bonus::new(BonusKind::Quality, quality_bonus),
                Bonus::new(BonusKind::Early, early_bonus),
            ],
            None,
        );
        debug!(
            %mission_type,
            %complexity,
            %quality,
            completed_early,
            total = %breakdown.total,
            "computed mission reward"
        );
        breakdown
    }
}
