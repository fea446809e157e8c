//! Core data structures.
//!
//! A [`Todo`] is the persisted record; [`SortKey`] and [`SortOrder`] are the
//! session-scoped ordering choices applied when deriving the visible page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single persisted todo record.
///
/// Ids are unique within the file and assigned as `count(existing) + 1` at
/// creation time. This is not `max(id) + 1`: deleting the highest-id record
/// and adding a new one can produce a colliding id. Kept for compatibility
/// with existing todo files (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique id within the todo file.
    pub id: u64,
    /// Task text.
    pub title: String,
    /// Creation time, stored as an ISO-8601 string under the `timestamp` key.
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Completion flag.
    pub done: bool,
}

impl Todo {
    /// Create a new (not done) todo with the given id and title.
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            created_at: Utc::now(),
            done: false,
        }
    }
}

/// Field the visible list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Case-insensitive lexicographic order by title.
    Title,
    /// Open todos before done todos, ties broken by creation time.
    Status,
    /// Storage order, which is creation order.
    #[default]
    CreatedAt,
}

impl SortKey {
    /// Human-readable name for prompts and status lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Status => "status",
            Self::CreatedAt => "created",
        }
    }
}

/// Direction of the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending (the derived sequence is reversed).
    Desc,
}

impl SortOrder {
    /// Human-readable name for prompts and status lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Asc => "ascending",
            Self::Desc => "descending",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_serialized_field_names() {
        let todo = Todo {
            id: 1,
            title: "Buy milk".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            done: false,
        };

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["timestamp"], "2024-03-01T12:00:00Z");
        assert_eq!(json["done"], false);
    }

    #[test]
    fn test_round_trip() {
        let todo = Todo::new(3, "Water plants");
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(SortKey::default(), SortKey::CreatedAt);
        assert_eq!(SortOrder::default(), SortOrder::Asc);
    }
}
