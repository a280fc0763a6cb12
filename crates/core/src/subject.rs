//! Subject model - a trackable study item with a topic count and deadline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::SubjectId;

/// A subject the user is studying towards a deadline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique identifier
    pub id: SubjectId,

    /// Subject name
    pub name: String,

    /// Total number of topics to cover
    pub total_topics: u32,

    /// Topics completed so far (never exceeds `total_topics`)
    pub completed_topics: u32,

    /// Deadline day
    pub deadline: NaiveDate,

    /// Day the subject was created
    pub created_at: NaiveDate,
}

impl Subject {
    /// Create a subject with no completed topics.
    pub fn new(name: impl Into<String>, total_topics: u32, deadline: NaiveDate, today: NaiveDate) -> Self {
        Self {
            id: SubjectId::new(),
            name: name.into(),
            total_topics,
            completed_topics: 0,
            deadline,
            created_at: today,
        }
    }

    /// Topics still to be completed.
    pub fn topics_left(&self) -> u32 {
        self.total_topics.saturating_sub(self.completed_topics)
    }

    /// Check the completed-vs-total invariant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.completed_topics > self.total_topics {
            return Err(ValidationError::CompletedExceedsTotal {
                completed: self.completed_topics,
                total: self.total_topics,
            });
        }
        Ok(())
    }
}
