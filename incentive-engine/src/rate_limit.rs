//! Per-action rate limits.
//!
//! The ledger counts how many times a user has been rewarded for an action in
//! the current window (a calendar day in the current deployment) and asks
//! whether one more is allowed. The count and the atomic check-then-credit
//! sequence stay in the ledger.
//!
//! - Social shares: 5 per window
//! - News submissions: 10 per window

use serde::{Deserialize, Serialize};

use crate::tags::string_tags;

/// Default social shares rewarded per window.
pub const DEFAULT_SOCIAL_SHARES_PER_DAY: u32 = 5;

/// Default news submissions rewarded per window.
pub const DEFAULT_NEWS_SUBMISSIONS_PER_DAY: u32 = 10;

/// Rate-limited action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    SocialShare,
    NewsSubmission,
}

string_tags!(ActionKind, "action kind", {
    SocialShare => "social_share",
    NewsSubmission => "news_submission",
});

/// Ceiling per action kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimits {
    pub social_shares_per_day: u32,
    pub news_submissions_per_day: u32,
}

impl Default for RateLimits {
    fn default() -> Self {
        Self {
            social_shares_per_day: DEFAULT_SOCIAL_SHARES_PER_DAY,
            news_submissions_per_day: DEFAULT_NEWS_SUBMISSIONS_PER_DAY,
        }
    }
}

impl RateLimits {
    pub fn ceiling(&self, kind: ActionKind) -> u32 {
        match kind {
            ActionKind::SocialShare => self.social_shares_per_day,
            ActionKind::NewsSubmission => self.news_submissions_per_day,
        }
    }

    /// Whether one more `kind` action may be rewarded after `count_so_far`.
    pub fn can_perform(&self, kind: ActionKind, count_so_far: u32) -> bool {
        count_so_far < self.ceiling(kind)
    }

    /// Rewarded actions left in the window.
    pub fn remaining(&self, kind: ActionKind, count_so_far: u32) -> u32 {
        self.ceiling(kind).saturating_sub(count_so_far)
    }
}
