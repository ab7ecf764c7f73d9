//! Employee list filtering.

use crate::model::employee::Employee;
use crate::model::state::AppState;

/// Case-insensitive substring filter over name, email and position.
///
/// An empty or whitespace-only term returns every employee.
pub fn filter<'state>(state: &'state AppState, term: &str) -> Vec<&'state Employee> {
    let needle = term.trim().to_lowercase();
    state
        .employees
        .iter()
        .filter(|employee| {
            needle.is_empty()
                || employee.full_name().to_lowercase().contains(&needle)
                || employee.email.to_lowercase().contains(&needle)
                || employee.position.to_lowercase().contains(&needle)
        })
        .collect()
}
