//! Application state aggregate.
//!
//! # Responsibility
//! - Hold every domain collection as one unit.
//! - Provide the fixed seed dataset used on first launch.
//!
//! # Invariants
//! - The aggregate is replaced wholesale on every mutation; readers always
//!   observe a fully-formed snapshot.
//! - `AppState` is the sole unit of persistence.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::attendance::{AttendanceRecord, AttendanceStatus};
use super::department::Department;
use super::employee::{Employee, EmploymentStatus};
use super::leave::{LeaveRequest, LeaveStatus, LeaveType};
use super::payroll::PayrollRecord;

/// Aggregate root containing all domain collections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    pub employees: Vec<Employee>,
    pub departments: Vec<Department>,
    pub attendance: Vec<AttendanceRecord>,
    pub leaves: Vec<LeaveRequest>,
    pub payroll: Vec<PayrollRecord>,
}

impl AppState {
    /// Fixed first-launch dataset: three departments, four employees, two
    /// attendance rows dated `today` and one historical approved leave.
    ///
    /// `today` is injected so callers (and tests) control what "today"
    /// means instead of this function reading the clock.
    pub fn seed(today: NaiveDate) -> Self {
        Self {
            departments: vec![
                Department {
                    id: "d1".into(),
                    name: "Engineering".into(),
                    manager_id: Some("e1".into()),
                    description: "Software Development and IT".into(),
                },
                Department {
                    id: "d2".into(),
                    name: "Human Resources".into(),
                    manager_id: Some("e2".into()),
                    description: "Employee relations and recruiting".into(),
                },
                Department {
                    id: "d3".into(),
                    name: "Sales".into(),
                    manager_id: Some("e3".into()),
                    description: "Revenue generation and client management".into(),
                },
            ],
            employees: vec![
                seed_employee("e1", "John", "Doe", "john.doe@nexus.com", "Senior Engineer", "d1", 95_000.0, date(2022, 1, 15)),
                seed_employee("e2", "Jane", "Smith", "jane.smith@nexus.com", "HR Manager", "d2", 85_000.0, date(2021, 3, 10)),
                seed_employee("e3", "Robert", "Johnson", "rob.j@nexus.com", "Sales Lead", "d3", 92_000.0, date(2023, 6, 1)),
                seed_employee("e4", "Alice", "Brown", "alice.b@nexus.com", "Frontend Dev", "d1", 78_000.0, date(2023, 8, 15)),
            ],
            attendance: vec![
                AttendanceRecord {
                    id: "a1".into(),
                    employee_id: "e1".into(),
                    date: today,
                    status: AttendanceStatus::Present,
                    check_in: time(9, 0),
                    check_out: time(17, 0),
                },
                AttendanceRecord {
                    id: "a2".into(),
                    employee_id: "e2".into(),
                    date: today,
                    status: AttendanceStatus::Late,
                    check_in: time(10, 30),
                    check_out: time(18, 0),
                },
            ],
            leaves: vec![LeaveRequest {
                id: "l1".into(),
                employee_id: "e4".into(),
                kind: LeaveType::Sick,
                start_date: date(2023, 10, 10),
                end_date: date(2023, 10, 12),
                reason: "Flu".into(),
                status: LeaveStatus::Approved,
            }],
            payroll: Vec::new(),
        }
    }

    /// Looks up an employee by id.
    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    /// Looks up a department by id.
    pub fn department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|department| department.id == id)
    }

    /// Returns whether an attendance record exists for `(employee_id, day)`.
    pub fn attendance_marked(&self, employee_id: &str, day: NaiveDate) -> bool {
        self.attendance
            .iter()
            .any(|record| record.employee_id == employee_id && record.date == day)
    }
}

#[allow(clippy::too_many_arguments)]
fn seed_employee(
    id: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    position: &str,
    department_id: &str,
    salary: f64,
    hire_date: NaiveDate,
) -> Employee {
    Employee {
        id: id.into(),
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: email.into(),
        position: position.into(),
        department_id: department_id.into(),
        salary,
        hire_date,
        status: EmploymentStatus::Active,
        avatar_url: None,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed date literal is valid")
}

fn time(hour: u32, minute: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
}
