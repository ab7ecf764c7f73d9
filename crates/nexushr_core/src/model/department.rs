//! Department domain model.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// Organizational unit that employees reference by id.
///
/// `manager_id` is a weak reference to an employee; it may point at an id
/// that no longer exists and views resolve that to a placeholder label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<EntityId>,
    pub description: String,
}
