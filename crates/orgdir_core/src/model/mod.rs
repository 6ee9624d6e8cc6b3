//! Directory domain model.
//!
//! # Responsibility
//! - Define the persisted records (`Country`, `City`, `Employee`) used by
//!   the repository and service layers.
//! - Keep lifecycle state (identity, creation timestamp, soft-delete flag)
//!   uniform across entity types.
//!
//! # Invariants
//! - Identity is assigned by the store on creation and never reassigned.
//! - Deletion is represented by the soft-delete flag unless a caller asks
//!   for physical removal.

use std::time::{SystemTime, UNIX_EPOCH};

pub mod city;
pub mod country;
pub mod employee;

pub use city::City;
pub use country::Country;
pub use employee::Employee;

/// Store-assigned integer identity shared by every persisted entity.
pub type EntityId = i64;

/// Current wall-clock time in Unix epoch milliseconds.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
