//! Planner service.
//!
//! The boundary around the pure progress engine: validates user input,
//! reads and writes the stores, and credits the streak when a completion
//! meets the daily target.

use studyplan_core::{Clock, Subject, SubjectId, UserStudyState, ValidationError};
use studyplan_progress::{ProgressCalculator, StreakTracker, SubjectReport};
use studyplan_storage::{Storage, StorageError};
use tracing::{debug, info};

/// Errors surfaced by planner operations.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// Input rejected at the boundary
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Storage collaborator failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// No subject with the given id
    #[error("subject not found: {0}")]
    SubjectNotFound(SubjectId),
}

/// Result type for planner operations.
pub type Result<T> = std::result::Result<T, PlannerError>;

/// A subject joined with its derived progress view.
#[derive(Debug, Clone)]
pub struct SubjectOverview {
    /// The stored subject
    pub subject: Subject,

    /// Derived progress for the reference day
    pub report: SubjectReport,
}

/// Outcome of marking topics done.
#[derive(Debug, Clone)]
pub struct MarkDoneOutcome {
    /// Subject after the update
    pub subject: Subject,

    /// Daily target recomputed on the updated subject
    pub daily_target: u32,

    /// Whether this completion met the target and credited the streak
    pub target_met: bool,

    /// Streak state after the update
    pub streak: UserStudyState,
}

/// Study planner service over a storage backend and a clock.
pub struct Planner<S: Storage, C: Clock> {
    storage: S,
    clock: C,
    calculator: ProgressCalculator,
    tracker: StreakTracker,
}

impl<S: Storage, C: Clock> Planner<S, C> {
    /// Create a planner.
    pub fn new(storage: S, clock: C) -> Self {
        Self {
            storage,
            clock,
            calculator: ProgressCalculator,
            tracker: StreakTracker,
        }
    }

    /// Create a subject with no completed topics.
    pub async fn add_subject(
        &mut self,
        user: &str,
        name: &str,
        total_topics: u32,
        deadline: chrono::NaiveDate,
    ) -> Result<Subject> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if total_topics == 0 {
            return Err(ValidationError::ZeroTopics.into());
        }

        let subject = Subject::new(name, total_topics, deadline, self.clock.today());

        let mut subjects = self.storage.list_subjects(user).await?;
        subjects.push(subject.clone());
        self.storage.save_subjects(user, &subjects).await?;

        info!("Added subject {} ({}) for {}", subject.name, subject.id, user);
        Ok(subject)
    }

    /// Mark topics done on a subject.
    ///
    /// The count must be at least 1 and no more than the topics remaining.
    /// The streak is credited when the count meets the daily target
    /// recomputed on the updated subject.
    pub async fn mark_done(
        &mut self,
        user: &str,
        id: SubjectId,
        count: u32,
    ) -> Result<MarkDoneOutcome> {
        let today = self.clock.today();

        let mut subjects = self.storage.list_subjects(user).await?;
        let subject = subjects
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(PlannerError::SubjectNotFound(id))?;

        let remaining = subject.topics_left();
        if count == 0 || count > remaining {
            return Err(ValidationError::InvalidCompletionCount {
                requested: count,
                remaining,
            }
            .into());
        }

        subject.completed_topics =
            (subject.completed_topics + count).min(subject.total_topics);
        let updated = subject.clone();
        self.storage.save_subjects(user, &subjects).await?;

        let daily_target = self.calculator.daily_target(&updated, today);
        let target_met = count >= daily_target;

        let mut streak = self.storage.load_user_state(user).await?;
        if target_met {
            streak = self.tracker.advance(&streak, today);
            self.storage.save_user_state(user, &streak).await?;
            debug!("Streak for {} now {} days", user, streak.study_streak);
        }

        info!(
            "Marked {} topics done on {} ({}/{})",
            count, updated.name, updated.completed_topics, updated.total_topics
        );

        Ok(MarkDoneOutcome {
            subject: updated,
            daily_target,
            target_met,
            streak,
        })
    }

    /// Delete a subject. Irreversible.
    pub async fn delete_subject(&mut self, user: &str, id: SubjectId) -> Result<()> {
        let subjects = self.storage.list_subjects(user).await?;
        let subject = subjects
            .iter()
            .find(|s| s.id == id)
            .ok_or(PlannerError::SubjectNotFound(id))?;

        info!("Deleting subject {} ({}) for {}", subject.name, id, user);
        self.storage.delete_subject(user, id).await?;
        Ok(())
    }

    /// All subjects for a user joined with their progress reports.
    pub async fn overview(&self, user: &str) -> Result<Vec<SubjectOverview>> {
        let today = self.clock.today();
        let subjects = self.storage.list_subjects(user).await?;

        let mut overviews = Vec::with_capacity(subjects.len());
        for subject in subjects {
            let report = self.calculator.report(&subject, today)?;
            overviews.push(SubjectOverview { subject, report });
        }
        Ok(overviews)
    }

    /// Current streak state for a user.
    pub async fn streak(&self, user: &str) -> Result<UserStudyState> {
        Ok(self.storage.load_user_state(user).await?)
    }

    /// Rename a user, migrating their stored data.
    pub async fn rename_user(&mut self, old: &str, new: &str) -> Result<()> {
        let new = new.trim();
        if new.chars().count() < 3 {
            return Err(ValidationError::UsernameTooShort.into());
        }

        self.storage.rename_user(old, new).await?;
        info!("Renamed user {} to {}", old, new);
        Ok(())
    }
}
