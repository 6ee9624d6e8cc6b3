//! Country domain record.
//!
//! # Invariants
//! - `id` is `None` until the store assigns it and stable afterwards.
//! - `soft_delete` is the source of truth for tombstone state; tombstoned
//!   rows stay readable.

use crate::model::{now_epoch_ms, EntityId};
use serde::{Deserialize, Serialize};

/// A country that owns zero or more cities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Store-assigned identity; `None` before the first persist.
    pub id: Option<EntityId>,
    /// Display name, also the substring-search target.
    pub name: String,
    /// Creation timestamp in Unix epoch milliseconds.
    pub created_at: i64,
    /// Soft-delete tombstone flag.
    pub soft_delete: bool,
}

impl Country {
    /// Creates an unpersisted country stamped with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            created_at: now_epoch_ms(),
            soft_delete: false,
        }
    }

    /// Marks this country as softly deleted.
    pub fn mark_deleted(&mut self) {
        self.soft_delete = true;
    }

    /// Clears the soft-delete flag.
    pub fn restore(&mut self) {
        self.soft_delete = false;
    }

    /// Returns whether this country is visible as active data.
    pub fn is_active(&self) -> bool {
        !self.soft_delete
    }
}
