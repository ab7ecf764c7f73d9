//! Payroll projection record.
//!
//! `PayrollRecord` is a derived view, not stored data: rows are computed
//! fresh for the current month on every render. The `payroll` collection in
//! `AppState` exists only to keep the persisted blob shape stable and stays
//! empty.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EntityId;

/// One monthly salary slip for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    pub id: EntityId,
    pub employee_id: EntityId,
    /// Month label, e.g. `"September 2026"`.
    pub month: String,
    pub base_salary: f64,
    pub bonus: f64,
    pub deductions: f64,
    pub net_salary: f64,
    pub payment_date: NaiveDate,
}
