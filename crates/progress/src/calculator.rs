//! Progress projection from a subject snapshot and a reference day.

use chrono::NaiveDate;
use studyplan_core::{Status, Subject, ValidationError};

use crate::status::classify;

/// Derived, time-sensitive view of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectReport {
    /// Percentage of topics completed (0-100)
    pub progress_percent: u8,

    /// Percentage expected by now under a linear schedule (0-100)
    pub expected_progress: u8,

    /// Whole days until the deadline; negative when overdue
    pub days_left: i64,

    /// Topics to complete today to stay on pace
    pub daily_target: u32,

    /// Urgency classification
    pub status: Status,
}

/// Pure projection of stored subject facts into derived state.
///
/// Every operation takes the reference day explicitly; nothing here reads
/// a clock or touches storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressCalculator;

impl ProgressCalculator {
    /// Percentage of topics completed, rounded to the nearest integer.
    ///
    /// A subject with zero total topics reports 0% rather than dividing
    /// by zero.
    pub fn progress_percent(&self, subject: &Subject) -> u8 {
        if subject.total_topics == 0 {
            return 0;
        }
        let ratio = subject.completed_topics as f64 / subject.total_topics as f64;
        (ratio * 100.0).round() as u8
    }

    /// Whole days from `today` until `deadline`.
    ///
    /// Calendar dates carry no time of day, so the difference is already a
    /// whole number of days: negative once the deadline has passed, zero on
    /// the deadline day itself.
    pub fn days_left(&self, deadline: NaiveDate, today: NaiveDate) -> i64 {
        (deadline - today).num_days()
    }

    /// Progress expected by `today` under a linear schedule from
    /// `created_at` to `deadline`.
    ///
    /// A deadline at or before creation expects everything immediately
    /// (100). The result is clamped to 0-100, so a reference day before
    /// creation reports 0.
    pub fn expected_progress(
        &self,
        created_at: NaiveDate,
        deadline: NaiveDate,
        today: NaiveDate,
    ) -> u8 {
        let total_days = (deadline - created_at).num_days();
        if total_days <= 0 {
            return 100;
        }

        let days_passed = (today - created_at).num_days();
        let pct = (days_passed as f64 / total_days as f64 * 100.0).round();
        pct.clamp(0.0, 100.0) as u8
    }

    /// Topics to complete today to finish by the deadline.
    ///
    /// Once the deadline is reached or passed, everything remaining is due
    /// today.
    pub fn daily_target(&self, subject: &Subject, today: NaiveDate) -> u32 {
        let days_left = self.days_left(subject.deadline, today);
        let topics_left = subject.topics_left();

        if days_left <= 0 {
            return topics_left;
        }
        if topics_left == 0 {
            return 0;
        }

        topics_left.div_ceil(days_left as u32)
    }

    /// Full projection for one subject.
    ///
    /// Rejects a snapshot whose completed count exceeds its total rather
    /// than silently clamping; callers surface the error to the user.
    pub fn report(&self, subject: &Subject, today: NaiveDate) -> Result<SubjectReport, ValidationError> {
        subject.validate()?;

        let progress_percent = self.progress_percent(subject);
        let expected_progress =
            self.expected_progress(subject.created_at, subject.deadline, today);
        let days_left = self.days_left(subject.deadline, today);
        let daily_target = self.daily_target(subject, today);

        Ok(SubjectReport {
            progress_percent,
            expected_progress,
            days_left,
            daily_target,
            status: classify(days_left, progress_percent, expected_progress),
        })
    }
}
