//! Studyplan core data models.
//!
//! This crate defines the data structures shared by the progress engine,
//! the storage layer, and the planner service.

#![warn(missing_docs)]

// Core identities
mod id;

// Study tracking
mod subject;
mod user_state;
mod status;

// Collaborator seams
mod clock;
mod error;

// Re-exports
pub use id::SubjectId;

pub use subject::Subject;
pub use user_state::UserStudyState;
pub use status::Status;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::ValidationError;
