//! City domain record.
//!
//! # Invariants
//! - Every city references an owning country; the schema enforces the link
//!   with cascade delete.

use crate::model::{now_epoch_ms, EntityId};
use serde::{Deserialize, Serialize};

/// A city owned by exactly one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Store-assigned identity; `None` before the first persist.
    pub id: Option<EntityId>,
    /// Display name, also the substring-search target.
    pub name: String,
    /// Identity of the owning country.
    pub country_id: EntityId,
    /// Creation timestamp in Unix epoch milliseconds.
    pub created_at: i64,
    /// Soft-delete tombstone flag.
    pub soft_delete: bool,
}

impl City {
    /// Creates an unpersisted city stamped with the current time.
    pub fn new(name: impl Into<String>, country_id: EntityId) -> Self {
        Self {
            id: None,
            name: name.into(),
            country_id,
            created_at: now_epoch_ms(),
            soft_delete: false,
        }
    }

    /// Marks this city as softly deleted.
    pub fn mark_deleted(&mut self) {
        self.soft_delete = true;
    }

    /// Clears the soft-delete flag.
    pub fn restore(&mut self) {
        self.soft_delete = false;
    }

    /// Returns whether this city is visible as active data.
    pub fn is_active(&self) -> bool {
        !self.soft_delete
    }
}
