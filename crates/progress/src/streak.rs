//! Streak state machine.
//!
//! Tracks consecutive days on which the user met their daily target. The
//! date delta against the last credited day classifies the transition:
//! same day (no-op), consecutive day (increment), or a gap (reset to 1).

use chrono::NaiveDate;
use studyplan_core::UserStudyState;

/// Advances streak state when a qualifying completion lands.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreakTracker;

impl StreakTracker {
    /// Credit `today` and return the new state.
    ///
    /// Calling this twice on the same day is a no-op the second time; the
    /// caller does not need to guard against double crediting.
    pub fn advance(&self, state: &UserStudyState, today: NaiveDate) -> UserStudyState {
        match state.last_study_date {
            Some(last) if last == today => state.clone(),
            Some(last) if (today - last).num_days() == 1 => UserStudyState {
                study_streak: state.study_streak + 1,
                last_study_date: Some(today),
            },
            _ => UserStudyState {
                study_streak: 1,
                last_study_date: Some(today),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_credit_starts_streak() {
        let tracker = StreakTracker;
        let state = tracker.advance(&UserStudyState::default(), date(2024, 3, 1));
        assert_eq!(state.study_streak, 1);
        assert_eq!(state.last_study_date, Some(date(2024, 3, 1)));
    }

    #[test]
    fn test_consecutive_days_increment() {
        let tracker = StreakTracker;
        let state = tracker.advance(&UserStudyState::default(), date(2024, 3, 1));
        let state = tracker.advance(&state, date(2024, 3, 2));
        assert_eq!(state.study_streak, 2);
        assert_eq!(state.last_study_date, Some(date(2024, 3, 2)));
    }

    #[test]
    fn test_gap_resets_to_one() {
        let tracker = StreakTracker;
        let state = tracker.advance(&UserStudyState::default(), date(2024, 3, 1));
        let state = tracker.advance(&state, date(2024, 3, 2));
        let state = tracker.advance(&state, date(2024, 3, 4));
        assert_eq!(state.study_streak, 1);
        assert_eq!(state.last_study_date, Some(date(2024, 3, 4)));
    }

    #[test]
    fn test_gap_resets_regardless_of_streak_length() {
        let tracker = StreakTracker;
        let state = UserStudyState {
            study_streak: 99,
            last_study_date: Some(date(2024, 2, 1)),
        };
        let state = tracker.advance(&state, date(2024, 3, 1));
        assert_eq!(state.study_streak, 1);
    }

    #[test]
    fn test_same_day_is_idempotent() {
        let tracker = StreakTracker;
        let state = UserStudyState {
            study_streak: 4,
            last_study_date: Some(date(2024, 3, 1)),
        };
        let once = tracker.advance(&state, date(2024, 3, 2));
        let twice = tracker.advance(&once, date(2024, 3, 2));
        assert_eq!(once, twice);
        assert_eq!(once.study_streak, 5);
    }
}
