use chrono::NaiveDate;
use nexushr_core::view::dashboard::{department_headcounts, stats};
use nexushr_core::view::{self, employees, payroll};
use nexushr_core::{
    AppState, AttendanceRecord, AttendanceStatus, Department, Employee, EmploymentStatus,
    LeaveRequest, LeaveStatus, LeaveType,
};

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn employee(id: &str, name: &str, department_id: &str, salary: f64) -> Employee {
    Employee {
        id: id.to_string(),
        first_name: name.to_string(),
        last_name: "Example".to_string(),
        email: format!("{name}@nexus.com").to_lowercase(),
        position: "Analyst".to_string(),
        department_id: department_id.to_string(),
        salary,
        hire_date: fixed_today(),
        status: EmploymentStatus::Active,
        avatar_url: None,
    }
}

fn leave(id: &str, from: NaiveDate, to: NaiveDate, status: LeaveStatus) -> LeaveRequest {
    LeaveRequest {
        id: id.to_string(),
        employee_id: "e1".to_string(),
        kind: LeaveType::Annual,
        start_date: from,
        end_date: to,
        reason: String::new(),
        status,
    }
}

#[test]
fn payroll_projection_matches_documented_formula() {
    let today = fixed_today();
    let slip = payroll::generate(&employee("e1", "John", "d1", 95_000.0), today);

    assert_eq!(slip.base_salary, 7916.67);
    assert_eq!(slip.deductions, 1337.5);
    assert_eq!(slip.net_salary, 6579.17);
    assert_eq!(slip.bonus, 0.0);
    assert_eq!(slip.month, "March 2026");
    assert_eq!(slip.payment_date, today);
    assert_eq!(slip.employee_id, "e1");
}

#[test]
fn payroll_rows_are_never_written_back_to_state() {
    let state = AppState::seed(fixed_today());
    let slips = payroll::generate_all(&state, fixed_today());
    assert_eq!(slips.len(), state.employees.len());
    assert!(state.payroll.is_empty());
}

#[test]
fn present_today_counts_only_present_records_dated_today() {
    let today = fixed_today();
    let yesterday = today.pred_opt().unwrap();

    let mut state = AppState::default();
    state.employees = vec![
        employee("e1", "A", "d1", 50_000.0),
        employee("e2", "B", "d1", 50_000.0),
        employee("e3", "C", "d1", 50_000.0),
        employee("e4", "D", "d1", 50_000.0),
    ];
    state.attendance = vec![
        AttendanceRecord::mark("e1", today, AttendanceStatus::Present),
        AttendanceRecord::mark("e2", today, AttendanceStatus::Present),
        AttendanceRecord::mark("e3", today, AttendanceStatus::Late),
        AttendanceRecord::mark("e4", today, AttendanceStatus::Absent),
        AttendanceRecord::mark("e1", yesterday, AttendanceStatus::Present),
    ];

    assert_eq!(stats(&state, today).present_today, 2);
}

#[test]
fn on_leave_counts_approved_leaves_covering_today() {
    let today = fixed_today();
    let mut state = AppState::default();
    state.leaves = vec![
        // Approved and covering today: counted.
        leave("l1", today.pred_opt().unwrap(), today.succ_opt().unwrap(), LeaveStatus::Approved),
        // Approved single-day leave exactly today: counted (inclusive range).
        leave("l2", today, today, LeaveStatus::Approved),
        // Covering today but still pending: not counted.
        leave("l3", today, today, LeaveStatus::Pending),
        // Approved but entirely in the past: not counted.
        leave(
            "l4",
            NaiveDate::from_ymd_opt(2023, 10, 10).unwrap(),
            NaiveDate::from_ymd_opt(2023, 10, 12).unwrap(),
            LeaveStatus::Approved,
        ),
    ];

    assert_eq!(stats(&state, today).on_leave, 2);
}

#[test]
fn monthly_payroll_total_is_annual_sum_divided_by_twelve() {
    let mut state = AppState::default();
    state.employees = vec![
        employee("e1", "A", "d1", 60_000.0),
        employee("e2", "B", "d1", 36_000.0),
    ];

    let total = stats(&state, fixed_today()).monthly_payroll_total;
    assert_eq!(total, 8_000.0);
}

#[test]
fn headcounts_group_by_resolved_name_and_bucket_dangling_refs_as_unknown() {
    let mut state = AppState::default();
    state.departments = vec![Department {
        id: "d1".to_string(),
        name: "Engineering".to_string(),
        manager_id: None,
        description: String::new(),
    }];
    state.employees = vec![
        employee("e1", "A", "d1", 50_000.0),
        employee("e2", "B", "d1", 50_000.0),
        employee("e3", "C", "missing-dept", 50_000.0),
    ];

    let buckets = department_headcounts(&state);
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].name, "Engineering");
    assert_eq!(buckets[0].count, 2);
    assert_eq!(buckets[1].name, view::UNKNOWN_LABEL);
    assert_eq!(buckets[1].count, 1);
}

#[test]
fn employee_filter_matches_name_email_and_position_case_insensitively() {
    let state = AppState::seed(fixed_today());

    let by_name = employees::filter(&state, "john d");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, "e1");

    let by_email = employees::filter(&state, "ALICE.B@");
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].id, "e4");

    let by_position = employees::filter(&state, "manager");
    assert_eq!(by_position.len(), 1);
    assert_eq!(by_position[0].id, "e2");

    assert_eq!(employees::filter(&state, "").len(), state.employees.len());
    assert!(employees::filter(&state, "no such person").is_empty());
}

#[test]
fn dangling_references_resolve_to_placeholder_labels() {
    let state = AppState::seed(fixed_today());

    assert_eq!(view::employee_name(&state, "ghost"), view::UNKNOWN_LABEL);
    assert_eq!(view::department_name(&state, "ghost"), view::UNKNOWN_LABEL);

    let unmanaged = Department {
        id: "d9".to_string(),
        name: "Ops".to_string(),
        manager_id: None,
        description: String::new(),
    };
    assert_eq!(view::manager_name(&state, &unmanaged), view::UNASSIGNED_LABEL);

    let dangling = Department {
        manager_id: Some("ghost".to_string()),
        ..unmanaged
    };
    assert_eq!(view::manager_name(&state, &dangling), view::UNKNOWN_LABEL);
}

#[test]
fn seed_dashboard_reflects_the_seed_dataset() {
    let today = fixed_today();
    let state = AppState::seed(today);
    let stats = stats(&state, today);

    // Seed marks e1 Present and e2 Late today; the only leave is history.
    assert_eq!(stats.total_employees, 4);
    assert_eq!(stats.present_today, 1);
    assert_eq!(stats.on_leave, 0);
    assert_eq!(stats.monthly_payroll_total, 350_000.0 / 12.0);
}
