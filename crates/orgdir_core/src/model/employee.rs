//! Employee domain record.

use crate::model::{now_epoch_ms, EntityId};
use serde::{Deserialize, Serialize};

/// An employee, unrelated to the geographic records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned identity; `None` before the first persist.
    pub id: Option<EntityId>,
    /// Full display name, also the substring-search target.
    pub full_name: String,
    /// Creation timestamp in Unix epoch milliseconds.
    pub created_at: i64,
    /// Soft-delete tombstone flag.
    pub soft_delete: bool,
}

impl Employee {
    /// Creates an unpersisted employee stamped with the current time.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            id: None,
            full_name: full_name.into(),
            created_at: now_epoch_ms(),
            soft_delete: false,
        }
    }

    /// Marks this employee as softly deleted.
    pub fn mark_deleted(&mut self) {
        self.soft_delete = true;
    }

    /// Clears the soft-delete flag.
    pub fn restore(&mut self) {
        self.soft_delete = false;
    }

    /// Returns whether this employee is visible as active data.
    pub fn is_active(&self) -> bool {
        !self.soft_delete
    }
}
