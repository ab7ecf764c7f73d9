//! Terminal surface for Nexus HR.
//!
//! # Responsibility
//! - Expose the sections of the records manager ({dashboard, employees,
//!   departments, attendance, leaves, payroll, assistant}) as subcommands.
//! - Keep all rendering plain text; every business rule lives in
//!   `nexushr_core`.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use nexushr_core::model::state::AppState;
use nexushr_core::view::{self, dashboard, employees, payroll};
use nexushr_core::{
    default_log_level, init_logging, Assistant, AttendanceRecord, AttendanceStatus, Department,
    Employee, EmploymentStatus, Event, GeminiAssistant, HrService, LeaveRequest, LeaveStatus,
    LeaveType, SqliteStateStore,
};

const DB_FILE: &str = "nexushr.db";

#[derive(Parser)]
#[command(name = "nexushr", about = "Local HR records manager", version)]
struct Cli {
    /// Directory holding the database and log files. Defaults to
    /// `.nexushr` under the current directory.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Headline counters and the employees-by-department histogram.
    Dashboard,
    /// Employee roster management.
    #[command(subcommand)]
    Employees(EmployeeCommand),
    /// Department management.
    #[command(subcommand)]
    Departments(DepartmentCommand),
    /// Daily attendance marking.
    #[command(subcommand)]
    Attendance(AttendanceCommand),
    /// Leave requests and their review.
    #[command(subcommand)]
    Leaves(LeaveCommand),
    /// Current-month salary slips for every employee.
    Payroll,
    /// Ask the HR assistant a free-text question.
    Ask {
        prompt: String,
    },
}

#[derive(Subcommand)]
enum EmployeeCommand {
    /// List employees, optionally filtered.
    List {
        /// Case-insensitive filter over name, email and position.
        #[arg(long)]
        search: Option<String>,
    },
    /// Add a new employee.
    Add {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        position: String,
        #[arg(long)]
        department_id: String,
        /// Annual gross salary.
        #[arg(long)]
        salary: f64,
        /// Defaults to today.
        #[arg(long)]
        hire_date: Option<NaiveDate>,
        /// Active, "On Leave" or Terminated. Defaults to Active.
        #[arg(long, value_parser = parse_employment_status)]
        status: Option<EmploymentStatus>,
    },
    /// Edit an existing employee; omitted fields keep their value.
    Edit {
        id: String,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        department_id: Option<String>,
        #[arg(long)]
        salary: Option<f64>,
        #[arg(long)]
        hire_date: Option<NaiveDate>,
        #[arg(long, value_parser = parse_employment_status)]
        status: Option<EmploymentStatus>,
    },
    /// Delete an employee after confirmation.
    Delete {
        id: String,
        /// Skip the interactive confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DepartmentCommand {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        manager_id: Option<String>,
    },
    /// Edit an existing department; omitted fields keep their value.
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        manager_id: Option<String>,
        /// Remove the current manager assignment.
        #[arg(long, conflicts_with = "manager_id")]
        clear_manager: bool,
    },
}

#[derive(Subcommand)]
enum AttendanceCommand {
    /// Show the roster with markings for one day.
    List {
        /// Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Mark one employee for one day. A second marking for the same day is
    /// ignored.
    Mark {
        employee_id: String,
        /// present, absent, late or half-day.
        #[arg(value_parser = parse_attendance_status)]
        status: AttendanceStatus,
        /// Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
enum LeaveCommand {
    List,
    /// File a new request. It always enters as Pending.
    Add {
        employee_id: String,
        /// sick, casual, annual or unpaid.
        #[arg(value_parser = parse_leave_type)]
        kind: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        #[arg(long, default_value = "")]
        reason: String,
    },
    Approve {
        id: String,
    },
    Reject {
        id: String,
    },
}

fn parse_employment_status(value: &str) -> Result<EmploymentStatus, String> {
    EmploymentStatus::parse(value)
        .ok_or_else(|| format!("unknown employment status `{value}`; expected active|on-leave|terminated"))
}

fn parse_attendance_status(value: &str) -> Result<AttendanceStatus, String> {
    AttendanceStatus::parse(value)
        .ok_or_else(|| format!("unknown attendance status `{value}`; expected present|absent|late|half-day"))
}

fn parse_leave_type(value: &str) -> Result<LeaveType, String> {
    LeaveType::parse(value)
        .ok_or_else(|| format!("unknown leave type `{value}`; expected sick|casual|annual|unpaid"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let data_dir = match resolve_data_dir(cli.data_dir.clone()) {
        Ok(dir) => dir,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    // Logging failures must not block the tool itself.
    let log_dir = data_dir.join("logs");
    if let Some(log_dir) = log_dir.to_str() {
        if let Err(message) = init_logging(default_log_level(), log_dir) {
            eprintln!("warning: logging disabled: {message}");
        }
    }

    let conn = match nexushr_core::db::open_db(data_dir.join(DB_FILE)) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("error: failed to open database: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut service = HrService::load(SqliteStateStore::new(&conn));
    let today = Local::now().date_naive();

    match cli.command {
        Command::Dashboard => render_dashboard(service.state(), today),
        Command::Employees(command) => run_employees(&mut service, command, today),
        Command::Departments(command) => run_departments(&mut service, command),
        Command::Attendance(command) => run_attendance(&mut service, command, today),
        Command::Leaves(command) => run_leaves(&mut service, command),
        Command::Payroll => render_payroll(service.state(), today),
        Command::Ask { prompt } => {
            let assistant = GeminiAssistant::from_env();
            println!("{}", assistant.ask(&prompt));
        }
    }

    ExitCode::SUCCESS
}

fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf, String> {
    let dir = match data_dir {
        Some(dir) => dir,
        None => std::env::current_dir()
            .map_err(|err| format!("cannot resolve current directory: {err}"))?
            .join(".nexushr"),
    };
    std::fs::create_dir_all(&dir)
        .map_err(|err| format!("cannot create data directory `{}`: {err}", dir.display()))?;
    Ok(dir)
}

fn render_dashboard(state: &AppState, today: NaiveDate) {
    let stats = dashboard::stats(state, today);

    println!("Dashboard — {}", today.format("%A, %B %-d, %Y"));
    println!();
    println!("  Total employees:          {}", stats.total_employees);
    println!("  Present today:            {}", stats.present_today);
    println!("  On leave:                 {}", stats.on_leave);
    println!(
        "  Total payroll (monthly):  ${:.0}",
        stats.monthly_payroll_total
    );
    println!();
    println!("Employees by department:");
    for bucket in dashboard::department_headcounts(state) {
        println!("  {:<24} {}", bucket.name, bucket.count);
    }
}

fn run_employees<S: nexushr_core::StateStore>(
    service: &mut HrService<S>,
    command: EmployeeCommand,
    today: NaiveDate,
) {
    match command {
        EmployeeCommand::List { search } => {
            let state = service.state();
            let term = search.unwrap_or_default();
            println!(
                "{:<38} {:<22} {:<20} {:<18} {:>10}  {}",
                "ID", "Name", "Position", "Department", "Salary", "Status"
            );
            for employee in employees::filter(state, &term) {
                println!(
                    "{:<38} {:<22} {:<20} {:<18} {:>10.0}  {}",
                    employee.id,
                    employee.full_name(),
                    employee.position,
                    view::department_name(state, &employee.department_id),
                    employee.salary,
                    employee.status.label()
                );
            }
        }
        EmployeeCommand::Add {
            first_name,
            last_name,
            email,
            position,
            department_id,
            salary,
            hire_date,
            status,
        } => {
            let employee = Employee {
                id: nexushr_core::new_id(),
                first_name,
                last_name,
                email,
                position,
                department_id,
                salary,
                hire_date: hire_date.unwrap_or(today),
                status: status.unwrap_or(EmploymentStatus::Active),
                avatar_url: None,
            };
            let id = employee.id.clone();
            service.dispatch(Event::AddEmployee(employee));
            println!("added employee {id}");
        }
        EmployeeCommand::Edit {
            id,
            first_name,
            last_name,
            email,
            position,
            department_id,
            salary,
            hire_date,
            status,
        } => {
            let Some(existing) = service.state().employee(&id).cloned() else {
                eprintln!("error: no employee with id `{id}`");
                return;
            };
            let updated = Employee {
                first_name: first_name.unwrap_or(existing.first_name),
                last_name: last_name.unwrap_or(existing.last_name),
                email: email.unwrap_or(existing.email),
                position: position.unwrap_or(existing.position),
                department_id: department_id.unwrap_or(existing.department_id),
                salary: salary.unwrap_or(existing.salary),
                hire_date: hire_date.unwrap_or(existing.hire_date),
                status: status.unwrap_or(existing.status),
                ..existing
            };
            service.dispatch(Event::EditEmployee(updated));
            println!("updated employee {id}");
        }
        EmployeeCommand::Delete { id, yes } => {
            let Some(existing) = service.state().employee(&id) else {
                eprintln!("error: no employee with id `{id}`");
                return;
            };
            let name = existing.full_name();
            if !yes && !confirm(&format!("Are you sure you want to delete {name}?")) {
                println!("aborted");
                return;
            }
            service.dispatch(Event::DeleteEmployee(id.clone()));
            println!("deleted employee {id}");
        }
    }
}

fn run_departments<S: nexushr_core::StateStore>(
    service: &mut HrService<S>,
    command: DepartmentCommand,
) {
    match command {
        DepartmentCommand::List => {
            let state = service.state();
            println!("{:<38} {:<20} {:<22} {}", "ID", "Name", "Manager", "Description");
            for department in &state.departments {
                println!(
                    "{:<38} {:<20} {:<22} {}",
                    department.id,
                    department.name,
                    view::manager_name(state, department),
                    department.description
                );
            }
        }
        DepartmentCommand::Add {
            name,
            description,
            manager_id,
        } => {
            let department = Department {
                id: nexushr_core::new_id(),
                name,
                manager_id,
                description,
            };
            let id = department.id.clone();
            service.dispatch(Event::AddDepartment(department));
            println!("added department {id}");
        }
        DepartmentCommand::Edit {
            id,
            name,
            description,
            manager_id,
            clear_manager,
        } => {
            let Some(existing) = service.state().department(&id).cloned() else {
                eprintln!("error: no department with id `{id}`");
                return;
            };
            let manager_id = if clear_manager {
                None
            } else {
                manager_id.or(existing.manager_id)
            };
            let updated = Department {
                name: name.unwrap_or(existing.name),
                description: description.unwrap_or(existing.description),
                manager_id,
                id: existing.id,
            };
            service.dispatch(Event::EditDepartment(updated));
            println!("updated department {id}");
        }
    }
}

fn run_attendance<S: nexushr_core::StateStore>(
    service: &mut HrService<S>,
    command: AttendanceCommand,
    today: NaiveDate,
) {
    match command {
        AttendanceCommand::List { date } => {
            let day = date.unwrap_or(today);
            let state = service.state();
            println!("Attendance for {day}");
            println!("{:<22} {:<10} {:<10} {}", "Employee", "Check In", "Check Out", "Status");
            for employee in &state.employees {
                let record = state
                    .attendance
                    .iter()
                    .find(|r| r.employee_id == employee.id && r.date == day);
                let (check_in, check_out, status) = match record {
                    Some(record) => (
                        record
                            .check_in
                            .map(|t| t.format("%H:%M").to_string())
                            .unwrap_or_else(|| "-".to_string()),
                        record
                            .check_out
                            .map(|t| t.format("%H:%M").to_string())
                            .unwrap_or_else(|| "-".to_string()),
                        record.status.label().to_string(),
                    ),
                    None => ("-".to_string(), "-".to_string(), "Not Marked".to_string()),
                };
                println!(
                    "{:<22} {:<10} {:<10} {}",
                    employee.full_name(),
                    check_in,
                    check_out,
                    status
                );
            }
        }
        AttendanceCommand::Mark {
            employee_id,
            status,
            date,
        } => {
            let day = date.unwrap_or(today);
            if service.state().attendance_marked(&employee_id, day) {
                println!("already marked for {day}; nothing to do");
                return;
            }
            service.dispatch(Event::MarkAttendance(AttendanceRecord::mark(
                employee_id.clone(),
                day,
                status,
            )));
            println!("marked {employee_id} as {} for {day}", status.label());
        }
    }
}

fn run_leaves<S: nexushr_core::StateStore>(service: &mut HrService<S>, command: LeaveCommand) {
    match command {
        LeaveCommand::List => {
            let state = service.state();
            println!(
                "{:<38} {:<22} {:<8} {:<12} {:<12} {:<10} {}",
                "ID", "Employee", "Type", "From", "To", "Status", "Reason"
            );
            for leave in &state.leaves {
                println!(
                    "{:<38} {:<22} {:<8} {:<12} {:<12} {:<10} {}",
                    leave.id,
                    view::employee_name(state, &leave.employee_id),
                    leave.kind.label(),
                    leave.start_date,
                    leave.end_date,
                    leave.status.label(),
                    leave.reason
                );
            }
        }
        LeaveCommand::Add {
            employee_id,
            kind,
            start_date,
            end_date,
            reason,
        } => {
            let leave = LeaveRequest {
                id: nexushr_core::new_id(),
                employee_id,
                kind,
                start_date,
                end_date,
                reason,
                status: LeaveStatus::Pending,
            };
            let id = leave.id.clone();
            service.dispatch(Event::AddLeave(leave));
            println!("filed leave request {id}");
        }
        LeaveCommand::Approve { id } => {
            service.dispatch(Event::UpdateLeaveStatus {
                id: id.clone(),
                status: LeaveStatus::Approved,
            });
            println!("approved leave {id}");
        }
        LeaveCommand::Reject { id } => {
            service.dispatch(Event::UpdateLeaveStatus {
                id: id.clone(),
                status: LeaveStatus::Rejected,
            });
            println!("rejected leave {id}");
        }
    }
}

fn render_payroll(state: &AppState, today: NaiveDate) {
    println!("Payroll — {}", today.format("%B %Y"));
    println!(
        "{:<22} {:>12} {:>12} {:>12}",
        "Employee", "Base", "Deductions", "Net Pay"
    );
    for slip in payroll::generate_all(state, today) {
        println!(
            "{:<22} {:>12.2} {:>12.2} {:>12.2}",
            view::employee_name(state, &slip.employee_id),
            slip.base_salary,
            slip.deductions,
            slip.net_salary
        );
    }
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt} [y/N]: ");
    let _ = io::stdout().flush();
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
