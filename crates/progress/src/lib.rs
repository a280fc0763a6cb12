//! Progress projection engine.
//!
//! Pure derivation of days-left, expected progress, daily targets, status
//! classification, and streak transitions. No I/O and no clock reads; the
//! reference day is always an explicit argument.

#![warn(missing_docs)]

pub mod calculator;
pub mod status;
pub mod streak;

pub use calculator::{ProgressCalculator, SubjectReport};
pub use status::classify;
pub use streak::StreakTracker;
