//! Process bootstrap for the leave engine: owns the service lifecycle,
//! seeds sample users, and walks the four orchestrator operations the
//! way a boundary layer would drive them.
use chrono::{Datelike, Days, Utc};
use tracing::info;

use leave_approval::request::{LeaveApplication, LeaveType};
use leave_approval::service::LeaveService;
use leave_approval::user::{Role, User};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let mut service = LeaveService::new();

    // sample directory, balances as in the original demo data set
    let john = seed(&mut service, "John Doe", "john.doe@company.com", Role::Employee, "Engineering", 18);
    let jane = seed(&mut service, "Jane Smith", "jane.smith@company.com", Role::Employee, "Marketing", 15);
    let mike = seed(&mut service, "Mike Johnson", "mike.johnson@company.com", Role::Manager, "Engineering", 22);
    let _sarah = seed(&mut service, "Sarah Wilson", "sarah.wilson@company.com", Role::Manager, "Marketing", 20);
    let david = seed(&mut service, "David Brown", "david.brown@company.com", Role::Employee, "HR", 12);

    let today = Utc::now().date_naive();
    let fmt = |days: u64| (today + Days::new(days)).format("%Y-%m-%d").to_string();

    // apply, then approve: balance is only debited at approval time
    let vacation = service.apply(
        &john,
        LeaveApplication::new()
            .set_start_date(&fmt(7))
            .set_end_date(&fmt(9))
            .set_reason("Family vacation")
            .set_leave_type(LeaveType::Annual),
    )?;
    info!(balance = service.user(&john).unwrap().leave_balance, "balance after apply");

    let resolution = service.approve_or_reject(&vacation.id, &mike, "approve", None)?;
    println!("{}", serde_json::to_string_pretty(&resolution)?);
    info!(balance = service.user(&john).unwrap().leave_balance, "balance after approval");

    // a rejection without a reason stores the placeholder and leaves the balance alone
    let appointment = service.apply(
        &jane,
        LeaveApplication::new()
            .set_start_date(&fmt(10))
            .set_end_date(&fmt(12))
            .set_reason("Medical appointment")
            .set_leave_type(LeaveType::Sick),
    )?;
    let resolution = service.approve_or_reject(&appointment.id, &mike, "reject", None)?;
    println!("{}", serde_json::to_string_pretty(&resolution)?);

    // one left pending for the listings
    service.apply(
        &david,
        LeaveApplication::new()
            .set_start_date(&fmt(14))
            .set_end_date(&fmt(16))
            .set_reason("Wedding")
            .set_leave_type(LeaveType::Personal),
    )?;

    for entry in service.list_pending() {
        let name = entry
            .employee
            .as_ref()
            .map(|employee| employee.name.as_str())
            .unwrap_or("Unknown");
        println!("pending: {} [{}] {} to {}", entry.request.id, name, entry.request.start_date, entry.request.end_date);
    }

    let summary = service.monthly_summary(today.year(), today.month());
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn seed(
    service: &mut LeaveService,
    name: &str,
    email: &str,
    role: Role,
    department: &str,
    balance: u32,
) -> String {
    let user = User::with_balance(name, email, role, department, balance);
    let id = user.id.clone();
    service.add_user(user);
    id
}
