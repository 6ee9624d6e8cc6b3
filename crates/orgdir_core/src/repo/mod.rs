//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the entity capability contract used by the generic repository.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`InvalidArgument`, `NotFound`)
//!   in addition to DB transport errors.
//! - Search stays generic: the searched column comes from the entity
//!   capability, never from a concrete type referenced inside the
//!   repository.

pub mod bindings;
pub mod entity_repo;
