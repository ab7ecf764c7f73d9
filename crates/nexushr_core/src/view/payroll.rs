//! Payroll projection.
//!
//! # Responsibility
//! - Derive one monthly salary slip per employee for the current month.
//!
//! # Invariants
//! - Never persisted: a fresh row is computed on every render.
//! - base = annual salary / 12; deductions = 15% of base + fixed 150 fee;
//!   net = base - deductions; bonus is always zero.
//! - Money fields are rounded to 2 decimals for display.

use chrono::NaiveDate;

use crate::model::employee::Employee;
use crate::model::payroll::PayrollRecord;
use crate::model::state::AppState;

const TAX_RATE: f64 = 0.15;
const INSURANCE_FEE: f64 = 150.0;

/// Derives the salary slip for one employee in the month of `today`.
pub fn generate(employee: &Employee, today: NaiveDate) -> PayrollRecord {
    let base = employee.salary / 12.0;
    let deductions = base * TAX_RATE + INSURANCE_FEE;
    let net = base - deductions;

    PayrollRecord {
        id: format!("pay-{}-{}", employee.id, today.format("%Y-%m")),
        employee_id: employee.id.clone(),
        month: today.format("%B %Y").to_string(),
        base_salary: round2(base),
        bonus: 0.0,
        deductions: round2(deductions),
        net_salary: round2(net),
        payment_date: today,
    }
}

/// Derives slips for every employee, in collection order.
pub fn generate_all(state: &AppState, today: NaiveDate) -> Vec<PayrollRecord> {
    state
        .employees
        .iter()
        .map(|employee| generate(employee, today))
        .collect()
}

/// Rounds a money amount to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
