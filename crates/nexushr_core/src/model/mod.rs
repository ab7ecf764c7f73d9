//! Domain model for the HR records manager.
//!
//! # Responsibility
//! - Define the canonical record shapes shared by reducers, views and
//!   persistence.
//! - Keep wire-level (JSON) naming stable so the persisted blob matches the
//!   documented `AppState` shape.
//!
//! # Invariants
//! - Every record is identified by an opaque unique string id.
//! - References between records are weak: a `department_id` or `manager_id`
//!   may point at nothing, and views degrade to placeholder labels.

pub mod attendance;
pub mod department;
pub mod employee;
pub mod leave;
pub mod payroll;
pub mod state;

use uuid::Uuid;

/// Opaque unique identifier for every domain record.
///
/// Seed rows keep short fixed ids (`e1`, `d1`, ...); records created at
/// runtime get freshly generated UUID strings via [`new_id`].
pub type EntityId = String;

/// Generates a new opaque record id.
pub fn new_id() -> EntityId {
    Uuid::new_v4().to_string()
}
