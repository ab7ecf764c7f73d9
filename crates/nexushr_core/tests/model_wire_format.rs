use chrono::NaiveDate;
use nexushr_core::{AppState, AttendanceStatus, EmploymentStatus, LeaveType};
use serde_json::Value;

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

#[test]
fn persisted_blob_uses_the_documented_field_names() {
    let state = AppState::seed(fixed_today());
    let value: Value = serde_json::from_str(&serde_json::to_string(&state).unwrap()).unwrap();

    let employee = &value["employees"][0];
    assert_eq!(employee["id"], "e1");
    assert_eq!(employee["firstName"], "John");
    assert_eq!(employee["departmentId"], "d1");
    assert_eq!(employee["hireDate"], "2022-01-15");
    assert_eq!(employee["status"], "Active");
    // Absent optionals are omitted, not serialized as null.
    assert!(employee.get("avatarUrl").is_none());

    let department = &value["departments"][0];
    assert_eq!(department["managerId"], "e1");

    let attendance = &value["attendance"][1];
    assert_eq!(attendance["employeeId"], "e2");
    assert_eq!(attendance["status"], "Late");
    assert_eq!(attendance["date"], "2026-03-02");
    // Times persist as minute precision, matching the documented blob shape.
    assert_eq!(attendance["checkIn"], "10:30");
    assert_eq!(attendance["checkOut"], "18:00");

    let leave = &value["leaves"][0];
    assert_eq!(leave["type"], "Sick");
    assert_eq!(leave["startDate"], "2023-10-10");
    assert_eq!(leave["status"], "Approved");

    assert_eq!(value["payroll"], serde_json::json!([]));
}

#[test]
fn status_labels_round_trip_through_parse() {
    assert_eq!(EmploymentStatus::parse("On Leave"), Some(EmploymentStatus::OnLeave));
    assert_eq!(
        EmploymentStatus::parse(EmploymentStatus::Terminated.label()),
        Some(EmploymentStatus::Terminated)
    );

    assert_eq!(AttendanceStatus::parse("half-day"), Some(AttendanceStatus::HalfDay));
    assert_eq!(
        AttendanceStatus::parse(AttendanceStatus::HalfDay.label()),
        Some(AttendanceStatus::HalfDay)
    );

    assert_eq!(LeaveType::parse("UNPAID"), Some(LeaveType::Unpaid));
    assert_eq!(LeaveType::parse("holiday"), None);
}

#[test]
fn check_times_round_trip_and_accept_legacy_seconds() {
    let state = AppState::seed(fixed_today());
    let record = &state.attendance[0];
    let json = serde_json::to_string(record).unwrap();
    assert!(json.contains("\"checkIn\":\"09:00\""));

    let parsed: nexushr_core::AttendanceRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(&parsed, record);

    // Blobs written with second precision still load.
    let legacy = json.replace("\"09:00\"", "\"09:00:00\"");
    let parsed: nexushr_core::AttendanceRecord = serde_json::from_str(&legacy).unwrap();
    assert_eq!(parsed.check_in, record.check_in);
}

#[test]
fn on_leave_status_serializes_with_a_space() {
    let json = serde_json::to_string(&EmploymentStatus::OnLeave).unwrap();
    assert_eq!(json, "\"On Leave\"");
    let parsed: EmploymentStatus = serde_json::from_str("\"On Leave\"").unwrap();
    assert_eq!(parsed, EmploymentStatus::OnLeave);
}
