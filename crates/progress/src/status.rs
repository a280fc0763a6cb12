//! Status classification decision table.

use studyplan_core::Status;

/// Days-left above which a subject meeting expectations is comfortably green.
const SAFE_DAYS: i64 = 7;

/// Days-left at or below which a subject is critical regardless of progress.
const CRITICAL_DAYS: i64 = 3;

/// Fraction of expected progress below which a subject is at risk.
const AT_RISK_RATIO: f64 = 0.7;

/// Fraction of expected progress below which a subject needs attention.
const WARN_RATIO: f64 = 0.85;

/// Classify a subject from its derived numbers.
///
/// The rules overlap, so they are evaluated strictly in order: first match
/// wins.
pub fn classify(days_left: i64, progress: u8, expected_progress: u8) -> Status {
    let progress = progress as f64;
    let expected = expected_progress as f64;

    if days_left < 0 {
        return Status::Red; // deadline passed
    }

    if progress >= expected && days_left > SAFE_DAYS {
        return Status::Green;
    }

    if days_left <= CRITICAL_DAYS || progress < expected * AT_RISK_RATIO {
        return Status::Red;
    }

    if days_left <= SAFE_DAYS || progress < expected * WARN_RATIO {
        return Status::Orange;
    }

    Status::Green
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overdue_is_red_regardless_of_progress() {
        assert_eq!(classify(-1, 100, 0), Status::Red);
        assert_eq!(classify(-30, 100, 100), Status::Red);
    }

    #[test]
    fn test_ahead_with_time_is_green() {
        // Meeting expectations with more than a week left short-circuits
        // the shortfall checks.
        assert_eq!(classify(8, 50, 50), Status::Green);
        assert_eq!(classify(30, 10, 5), Status::Green);
    }

    #[test]
    fn test_imminent_deadline_is_red_even_when_ahead() {
        // Rule 2 requires days_left > 7, so a subject at 100% with 2 days
        // left falls through to rule 3.
        assert_eq!(classify(2, 100, 50), Status::Red);
        assert_eq!(classify(3, 100, 100), Status::Red);
    }

    #[test]
    fn test_large_shortfall_is_red() {
        // progress < expected * 0.7
        assert_eq!(classify(10, 34, 50), Status::Red);
        assert_eq!(classify(5, 0, 50), Status::Red);
    }

    #[test]
    fn test_week_out_or_moderate_shortfall_is_orange() {
        // days_left <= 7 but behind expectations, not critically
        assert_eq!(classify(5, 40, 50), Status::Orange);
        assert_eq!(classify(7, 45, 50), Status::Orange);
        // plenty of time but progress in the 0.7x..0.85x band
        assert_eq!(classify(10, 40, 50), Status::Orange);
    }

    #[test]
    fn test_mild_shortfall_with_time_is_green() {
        // Behind expectations but above 0.85x with more than a week left.
        assert_eq!(classify(10, 45, 50), Status::Green);
    }

    #[test]
    fn test_precedence_overlapping_rules() {
        // days_left = 2 matches rules 3 and 4; rule 3 must win.
        assert_eq!(classify(2, 49, 50), Status::Red);
        // progress exactly at 0.7x misses rule 3, lands in rule 4.
        assert_eq!(classify(10, 35, 50), Status::Orange);
        // progress exactly at 0.85x with >7 days misses both shortfall
        // bands and rule 2 (behind expectations): green via the fallback.
        assert_eq!(classify(10, 43, 50), Status::Green);
    }

    #[test]
    fn test_zero_expected_progress() {
        // Fresh subject on day one: progress >= expected holds at 0 >= 0.
        assert_eq!(classify(10, 0, 0), Status::Green);
        // ...but inside the final week it degrades to orange.
        assert_eq!(classify(6, 0, 0), Status::Orange);
    }
}
