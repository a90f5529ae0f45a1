use super::enums::{Priority, Status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task card on the board
///
/// Field names follow the stored JSON (`createdAt`). Unknown fields in stored
/// records, such as a legacy `justAdded` flag, are ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique, stable identifier
    pub id: String,
    /// Non-empty, trimmed title
    pub title: String,
    /// Optional notes (empty when not given)
    #[serde(default)]
    pub description: String,
    pub status: Status,
    #[serde(default)]
    pub priority: Priority,
    /// Creation instant, never changed after creation
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a fresh `todo` task with a new id
    pub fn new(title: String, description: String, priority: Priority, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            status: Status::Todo,
            priority,
            created_at,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }
}
