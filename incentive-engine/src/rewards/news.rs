//! News submission rewards.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Bonus, BonusKind, RewardBreakdown};
use crate::amount::Credits;

/// Review outcome of one news submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NewsSubmission {
    pub approved: bool,
    pub published: bool,
    pub highly_relevant: bool,

    /// The submitter has never submitted before.
    pub first_submission: bool,
}

/// News submission reward parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsRewards {
    /// Default: 20
    pub base: Credits,

    /// Paid when the submission is both approved and published.
    /// Default: 30
    pub quality_bonus: Credits,

    /// Default: 50
    pub relevance_bonus: Credits,

    /// Default: 10
    pub first_submission_bonus: Credits,
}

impl Default for NewsRewards {
    fn default() -> Self {
        Self {
            base: Credits::from_whole(20),
            quality_bonus: Credits::from_whole(30),
            relevance_bonus: Credits::from_whole(50),
            first_submission_bonus: Credits::from_whole(10),
        }
    }
}

impl NewsRewards {
    pub fn reward(&self, submission: NewsSubmission) -> RewardBreakdown {
        let when = |flag: bool, amount: Credits| if flag { amount } else { Credits::ZERO };

        let breakdown = RewardBreakdown::new(
            self.base,
            vec![
                Bonus::new(
                    BonusKind::Quality,
                    when(submission.approved && submission.published, self.quality_bonus),
                ),
                Bonus::new(
                    BonusKind::Relevance,
                    when(submission.highly_relevant, self.relevance_bonus),
                ),
                Bonus::new(
                    BonusKind::FirstSubmission,
                    when(submission.first_submission, self.first_submission_bonus),
                ),
            ],
            None,
        );
        debug!(?submission, total = %breakdown.total, "computed news submission reward");
        breakdown
    }
}
