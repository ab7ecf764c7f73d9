//! Pure state-transition functions.
//!
//! # Responsibility
//! - Map each user-facing mutation to a new `AppState` snapshot.
//! - Keep every transition free of I/O; persistence happens in the service
//!   layer after the reducer returns.
//!
//! # Invariants
//! - `apply` never mutates its input; it returns a fresh aggregate with
//!   exactly one collection changed (or an identical clone on a no-op).
//! - New leave requests always enter as `Pending`.
//! - Attendance is appended at most once per `(employee_id, date)` pair.

use crate::model::attendance::AttendanceRecord;
use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::model::leave::{LeaveRequest, LeaveStatus};
use crate::model::state::AppState;
use crate::model::EntityId;

/// One user-facing mutation of the aggregate.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    AddEmployee(Employee),
    /// Replaces the employee with the same id; no-op when the id is unknown.
    EditEmployee(Employee),
    /// Removes the employee by id. Interactive confirmation is a UI concern
    /// and happens before the event is built.
    DeleteEmployee(EntityId),
    AddDepartment(Department),
    /// Replaces the department with the same id, mirroring employee edit.
    EditDepartment(Department),
    /// Appends unless `(employee_id, date)` is already marked.
    MarkAttendance(AttendanceRecord),
    /// Appends with status forced to `Pending` regardless of input.
    AddLeave(LeaveRequest),
    /// Replaces the status of the matching request; no transition guard.
    UpdateLeaveStatus { id: EntityId, status: LeaveStatus },
}

/// Applies one event to the aggregate and returns the next snapshot.
pub fn apply(state: &AppState, event: Event) -> AppState {
    let mut next = state.clone();

    match event {
        Event::AddEmployee(employee) => {
            next.employees.push(employee);
        }
        Event::EditEmployee(employee) => {
            if let Some(existing) = next.employees.iter_mut().find(|e| e.id == employee.id) {
                *existing = employee;
            }
        }
        Event::DeleteEmployee(id) => {
            next.employees.retain(|employee| employee.id != id);
        }
        Event::AddDepartment(department) => {
            next.departments.push(department);
        }
        Event::EditDepartment(department) => {
            if let Some(existing) = next.departments.iter_mut().find(|d| d.id == department.id) {
                *existing = department;
            }
        }
        Event::MarkAttendance(record) => {
            if !next.attendance_marked(&record.employee_id, record.date) {
                next.attendance.push(record);
            }
        }
        Event::AddLeave(mut leave) => {
            leave.status = LeaveStatus::Pending;
            next.leaves.push(leave);
        }
        Event::UpdateLeaveStatus { id, status } => {
            if let Some(leave) = next.leaves.iter_mut().find(|l| l.id == id) {
                leave.status = status;
            }
        }
    }

    next
}
