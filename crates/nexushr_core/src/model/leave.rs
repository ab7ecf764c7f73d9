//! Leave-request domain model.
//!
//! # Invariants
//! - New requests always enter the collection as `Pending`; the reducer
//!   forces this regardless of caller input.
//! - Intended lifecycle: Pending -> Approved or Pending -> Rejected,
//!   terminal thereafter. The reducer does not guard the transition; the
//!   UI only offers it on Pending rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EntityId;

/// Category of requested leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveType {
    Sick,
    Casual,
    Annual,
    Unpaid,
}

impl LeaveType {
    /// Human-readable label, identical to the wire value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sick => "Sick",
            Self::Casual => "Casual",
            Self::Annual => "Annual",
            Self::Unpaid => "Unpaid",
        }
    }

    /// Parses a label back into a leave type. Case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sick" => Some(Self::Sick),
            "casual" => Some(Self::Casual),
            "annual" => Some(Self::Annual),
            "unpaid" => Some(Self::Unpaid),
            _ => None,
        }
    }
}

/// Review state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    /// Human-readable label, identical to the wire value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// Date-ranged leave request with free-text reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: EntityId,
    pub employee_id: EntityId,
    #[serde(rename = "type")]
    pub kind: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
}

impl LeaveRequest {
    /// Returns whether `day` falls inside the requested range (inclusive).
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }
}
