//! Employee domain model.
//!
//! # Responsibility
//! - Define the employee record and its employment lifecycle states.
//!
//! # Invariants
//! - `id` is stable and never reused for another employee.
//! - `department_id` is a weak reference; it may dangle without breaking
//!   any view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EntityId;

/// Employment lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentStatus {
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Terminated,
}

impl EmploymentStatus {
    /// Human-readable label, identical to the wire value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "On Leave",
            Self::Terminated => "Terminated",
        }
    }

    /// Parses a label back into a status. Case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "on leave" | "on-leave" => Some(Self::OnLeave),
            "terminated" => Some(Self::Terminated),
            _ => None,
        }
    }
}

/// Employee record.
///
/// Salary is the annual gross figure; monthly payroll rows are derived from
/// it on demand and never stored back here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub department_id: EntityId,
    pub salary: f64,
    pub hire_date: NaiveDate,
    pub status: EmploymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Employee {
    /// Display name used across list views.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
