//! Storage backends for studyplan data.

#![warn(missing_docs)]

mod json_storage;
mod trait_;

pub use json_storage::JsonStorage;
pub use trait_::{Result, Storage, StorageError};
