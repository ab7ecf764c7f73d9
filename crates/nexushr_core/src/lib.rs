//! Core domain logic for Nexus HR.
//! This crate is the single source of truth for business invariants.

pub mod ai;
pub mod db;
pub mod logging;
pub mod model;
pub mod reducer;
pub mod service;
pub mod store;
pub mod view;

pub use ai::{Assistant, GeminiAssistant};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::attendance::{AttendanceRecord, AttendanceStatus};
pub use model::department::Department;
pub use model::employee::{Employee, EmploymentStatus};
pub use model::leave::{LeaveRequest, LeaveStatus, LeaveType};
pub use model::payroll::PayrollRecord;
pub use model::state::AppState;
pub use model::{new_id, EntityId};
pub use reducer::{apply, Event};
pub use service::hr_service::HrService;
pub use store::state_store::{
    SqliteStateStore, StateStore, StoreError, StoreResult, STORAGE_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
