//! Dashboard aggregates.
//!
//! # Responsibility
//! - Reduce the aggregate into the headline counters and the department
//!   headcount histogram.
//!
//! # Invariants
//! - Recomputed on every call; nothing here is cached or stored.
//! - Headcount ordering is deterministic: first-seen order of employees.

use chrono::NaiveDate;

use super::{department_name, UNKNOWN_LABEL};
use crate::model::attendance::AttendanceStatus;
use crate::model::leave::LeaveStatus;
use crate::model::state::AppState;

/// Headline counters shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_employees: usize,
    /// Attendance rows dated `today` with status Present.
    pub present_today: usize,
    /// Approved leaves whose date range contains `today`.
    pub on_leave: usize,
    /// Sum of annual salaries divided by twelve.
    pub monthly_payroll_total: f64,
}

/// One bar of the employees-by-department histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentHeadcount {
    pub name: String,
    pub count: usize,
}

/// Computes the headline counters for `today`.
pub fn stats(state: &AppState, today: NaiveDate) -> DashboardStats {
    let present_today = state
        .attendance
        .iter()
        .filter(|record| record.date == today && record.status == AttendanceStatus::Present)
        .count();

    let on_leave = state
        .leaves
        .iter()
        .filter(|leave| leave.status == LeaveStatus::Approved && leave.covers(today))
        .count();

    let annual_total: f64 = state.employees.iter().map(|employee| employee.salary).sum();

    DashboardStats {
        total_employees: state.employees.len(),
        present_today,
        on_leave,
        monthly_payroll_total: annual_total / 12.0,
    }
}

/// Groups employees by resolved department name.
///
/// Employees whose `department_id` dangles land in the `Unknown` bucket.
pub fn department_headcounts(state: &AppState) -> Vec<DepartmentHeadcount> {
    let mut buckets: Vec<DepartmentHeadcount> = Vec::new();

    for employee in &state.employees {
        let name = if state.department(&employee.department_id).is_some() {
            department_name(state, &employee.department_id)
        } else {
            UNKNOWN_LABEL.to_string()
        };

        match buckets.iter_mut().find(|bucket| bucket.name == name) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(DepartmentHeadcount { name, count: 1 }),
        }
    }

    buckets
}
