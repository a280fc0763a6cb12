//! Study planner service layer.
//!
//! Input validation, subject lifecycle, mark-done flow, and streak
//! crediting over the storage and clock collaborators.

#![warn(missing_docs)]

pub mod manager;

pub use manager::{MarkDoneOutcome, Planner, PlannerError, SubjectOverview};
