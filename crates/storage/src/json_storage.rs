//! JSON file storage implementation.
//!
//! Stores each user's subject list and streak state as JSON files under a
//! data directory. The layout mirrors the per-user keying of the data: one
//! `subjects/<user>.json` holding the full list, one `state/<user>.json`
//! holding the streak snapshot.

use std::path::Path;

use studyplan_core::{Subject, SubjectId, UserStudyState};
use tokio::fs;

use super::{Result, Storage, StorageError};

/// File-based JSON storage backend.
pub struct JsonStorage {
    root: std::path::PathBuf,
}

impl JsonStorage {
    /// Create storage, ensuring the data subdirectories exist.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        fs::create_dir_all(root.join("subjects")).await?;
        fs::create_dir_all(root.join("state")).await?;

        Ok(Self { root })
    }

    fn subjects_path(&self, user: &str) -> std::path::PathBuf {
        self.root.join("subjects").join(format!("{}.json", user))
    }

    fn state_path(&self, user: &str) -> std::path::PathBuf {
        self.root.join("state").join(format!("{}.json", user))
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn list_subjects(&self, user: &str) -> Result<Vec<Subject>> {
        Ok(read_json(&self.subjects_path(user)).await?.unwrap_or_default())
    }

    async fn save_subjects(&mut self, user: &str, subjects: &[Subject]) -> Result<()> {
        let json = serde_json::to_string_pretty(subjects)?;
        fs::write(self.subjects_path(user), json.as_bytes()).await?;
        Ok(())
    }

    async fn delete_subject(&mut self, user: &str, id: SubjectId) -> Result<()> {
        let mut subjects = self.list_subjects(user).await?;
        subjects.retain(|s| s.id != id);
        self.save_subjects(user, &subjects).await
    }

    async fn load_user_state(&self, user: &str) -> Result<UserStudyState> {
        Ok(read_json(&self.state_path(user)).await?.unwrap_or_default())
    }

    async fn save_user_state(&mut self, user: &str, state: &UserStudyState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        fs::write(self.state_path(user), json.as_bytes()).await?;
        Ok(())
    }

    async fn rename_user(&mut self, old: &str, new: &str) -> Result<()> {
        if old == new {
            return Ok(());
        }
        rename_if_present(&self.subjects_path(old), &self.subjects_path(new)).await?;
        rename_if_present(&self.state_path(old), &self.state_path(new)).await?;
        Ok(())
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn rename_if_present(from: &Path, to: &Path) -> Result<()> {
    match fs::rename(from, to).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StorageError::Io(e)),
    }
}
