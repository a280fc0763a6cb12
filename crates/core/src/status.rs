//! Subject status classification levels.

use serde::{Deserialize, Serialize};

/// Coarse urgency level for a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// On track
    Green,
    /// Near deadline or falling behind
    Orange,
    /// Overdue or at risk
    Red,
}

impl Status {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Green => "green",
            Status::Orange => "orange",
            Status::Red => "red",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
