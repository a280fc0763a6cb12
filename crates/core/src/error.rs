//! Validation errors raised at the core's boundary.

/// Rejected input detected on entry to a core operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Subject name is empty or blank
    #[error("subject name must not be empty")]
    EmptyName,

    /// Subject has no topics to track
    #[error("total topics must be greater than zero")]
    ZeroTopics,

    /// Completed count exceeds the total
    #[error("completed topics ({completed}) exceeds total topics ({total})")]
    CompletedExceedsTotal {
        /// Completed topics on the offending subject
        completed: u32,
        /// Total topics on the offending subject
        total: u32,
    },

    /// Mark-done count is zero or exceeds the remaining topics
    #[error("cannot mark {requested} topics done, only {remaining} remaining")]
    InvalidCompletionCount {
        /// Topics the caller asked to mark done
        requested: u32,
        /// Topics actually remaining
        remaining: u32,
    },

    /// Username does not meet the minimum length
    #[error("username must be at least 3 characters long")]
    UsernameTooShort,
}
