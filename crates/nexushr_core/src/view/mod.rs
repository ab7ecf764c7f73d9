//! Derived views over the aggregate.
//!
//! # Responsibility
//! - Compute dashboard aggregates, payroll projections and list filters on
//!   demand from `&AppState`.
//!
//! # Invariants
//! - Views are pure: no caching, no storage, no clock access. Callers pass
//!   `today` explicitly where a view depends on the current date.
//! - Dangling references resolve to placeholder labels, never errors.

pub mod dashboard;
pub mod employees;
pub mod payroll;

use crate::model::department::Department;
use crate::model::state::AppState;

/// Placeholder label for references that resolve to nothing.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Placeholder label for an absent manager reference.
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// Resolves an employee id to a display name, tolerating dangling refs.
pub fn employee_name(state: &AppState, id: &str) -> String {
    state
        .employee(id)
        .map(|employee| employee.full_name())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}

/// Resolves a department id to its name, tolerating dangling refs.
pub fn department_name(state: &AppState, id: &str) -> String {
    state
        .department(id)
        .map(|department| department.name.clone())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}

/// Resolves a department's manager to a display name.
///
/// `Unassigned` when no manager is set, `Unknown` when the reference
/// dangles.
pub fn manager_name(state: &AppState, department: &Department) -> String {
    match department.manager_id.as_deref() {
        Some(id) => employee_name(state, id),
        None => UNASSIGNED_LABEL.to_string(),
    }
}
