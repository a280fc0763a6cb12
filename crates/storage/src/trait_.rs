//! Storage trait abstraction.

use async_trait::async_trait;
use studyplan_core::{Subject, SubjectId, UserStudyState};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Storage abstraction for studyplan data.
///
/// Subjects and streak state are keyed per user. This trait allows
/// different storage backends to be plugged in.
#[async_trait]
pub trait Storage: Send + Sync {
    // === Subject operations ===

    /// List all subjects for a user.
    async fn list_subjects(&self, user: &str) -> Result<Vec<Subject>>;

    /// Save a user's full subject list (create or update).
    async fn save_subjects(&mut self, user: &str, subjects: &[Subject]) -> Result<()>;

    /// Delete a subject. Deleting an unknown id is a no-op.
    async fn delete_subject(&mut self, user: &str, id: SubjectId) -> Result<()>;

    // === User state operations ===

    /// Load a user's streak state; default for a user never seen before.
    async fn load_user_state(&self, user: &str) -> Result<UserStudyState>;

    /// Save a user's streak state.
    async fn save_user_state(&mut self, user: &str, state: &UserStudyState) -> Result<()>;

    // === User operations ===

    /// Move all data from one username to another.
    async fn rename_user(&mut self, old: &str, new: &str) -> Result<()>;
}
