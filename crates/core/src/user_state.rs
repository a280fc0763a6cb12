//! Per-user study state - the streak counter and its anchor date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Streak state for a single user.
///
/// Mutated only by the streak tracker; everything else treats it as a
/// read-only snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStudyState {
    /// Consecutive days the daily target was met
    pub study_streak: u32,

    /// Last day a completion was credited, if any
    pub last_study_date: Option<NaiveDate>,
}

impl Default for UserStudyState {
    fn default() -> Self {
        Self {
            study_streak: 0,
            last_study_date: None,
        }
    }
}
