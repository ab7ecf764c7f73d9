//! Attendance domain model.
//!
//! # Responsibility
//! - Define the per-day presence record and its marking rules.
//!
//! # Invariants
//! - Intended (not enforced by storage): at most one record per
//!   `(employee_id, date)` pair. The reducer rejects duplicates silently.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{new_id, EntityId};

/// Daily presence state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    #[serde(rename = "Half Day")]
    HalfDay,
}

impl AttendanceStatus {
    /// Human-readable label, identical to the wire value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Late => "Late",
            Self::HalfDay => "Half Day",
        }
    }

    /// Parses a label back into a status. Case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "present" => Some(Self::Present),
            "absent" => Some(Self::Absent),
            "late" => Some(Self::Late),
            "half day" | "half-day" => Some(Self::HalfDay),
            _ => None,
        }
    }
}

/// One attendance row for one employee on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: EntityId,
    pub employee_id: EntityId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "time_hm")]
    pub check_in: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "time_hm")]
    pub check_out: Option<NaiveTime>,
}

/// Serde adapter keeping check-in/out times in the blob's `"HH:MM"` form
/// instead of chrono's default `"HH:MM:SS"`.
mod time_hm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&time.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => NaiveTime::parse_from_str(&raw, FORMAT)
                // Blobs written before this adapter carry seconds.
                .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

impl AttendanceRecord {
    /// Builds a new marking for `(employee_id, date)` with the standard
    /// office times.
    ///
    /// # Contract
    /// - Present/Late rows get fixed 09:00 check-in and 17:00 check-out.
    /// - Absent/Half Day rows carry no times.
    pub fn mark(employee_id: impl Into<EntityId>, date: NaiveDate, status: AttendanceStatus) -> Self {
        let tracked = matches!(status, AttendanceStatus::Present | AttendanceStatus::Late);
        Self {
            id: new_id(),
            employee_id: employee_id.into(),
            date,
            status,
            check_in: tracked.then(|| NaiveTime::from_hms_opt(9, 0, 0)).flatten(),
            check_out: tracked.then(|| NaiveTime::from_hms_opt(17, 0, 0)).flatten(),
        }
    }
}
