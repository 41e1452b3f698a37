//! Service layer API for the leave-request workflow
use chrono::Datelike;
use serde::Serialize;

use crate::clock::{Clock, SystemClock};
use crate::error::LeaveError;
use crate::request::{LeaveApplication, LeaveRequest, LeaveStatus};
use crate::store::LeaveStore;
use crate::user::{DEFAULT_LEAVE_BALANCE, Role, User, UserDirectory};
use crate::validation;

const MSG_LEAVE_APPROVED: &str = "Leave request approved successfully";
const MSG_LEAVE_REJECTED: &str = "Leave request rejected successfully";
const REJECTION_PLACEHOLDER: &str = "No reason provided";

/// Tunables the deployment may vary without touching the rules.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Leave days granted to users registered through the service.
    pub default_balance: u32,
    /// Stored rejection reason when the approver supplies none.
    pub rejection_placeholder: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_balance: DEFAULT_LEAVE_BALANCE,
            rejection_placeholder: REJECTION_PLACEHOLDER.to_string(),
        }
    }
}

/// Employee name and email attached to a request in list projections.
/// Absent when the employee record cannot be resolved; rendering a
/// fallback for that is the presentation layer's call.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeRef {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaveRequestWithEmployee {
    #[serde(flatten)]
    pub request: LeaveRequest,
    pub employee: Option<EmployeeRef>,
}

/// Outcome of resolving a pending request.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub message: String,
    pub request: LeaveRequest,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub total_requests: usize,
    pub approved_requests: usize,
    pub rejected_requests: usize,
    pub pending_requests: usize,
    pub requests: Vec<LeaveRequestWithEmployee>,
}

/// Orchestrates the leave rules over the user directory and request
/// store it owns. Mutating operations take `&mut self`; a concurrent
/// boundary layer must serialize calls, there is no internal locking.
pub struct LeaveService {
    users: UserDirectory,
    requests: LeaveStore,
    clock: Box<dyn Clock>,
    config: ServiceConfig,
}

impl Default for LeaveService {
    fn default() -> Self {
        Self::new()
    }
}

impl LeaveService {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            users: UserDirectory::new(),
            requests: LeaveStore::new(),
            clock: Box::new(clock),
            config: ServiceConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a user with the configured default balance.
    pub fn register_user(&mut self, name: &str, email: &str, role: Role, department: &str) -> User {
        let user = User::with_balance(name, email, role, department, self.config.default_balance);
        self.users.insert(user.clone());
        user
    }

    /// Seed a pre-built user, balance and all.
    pub fn add_user(&mut self, user: User) {
        self.users.insert(user);
    }

    /// Seed a pre-built request, e.g. historical records at bootstrap.
    pub fn add_request(&mut self, request: LeaveRequest) {
        self.requests.insert(request);
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn request(&self, id: &str) -> Option<&LeaveRequest> {
        self.requests.find_by_id(id)
    }

    pub fn request_count(&self) -> usize {
        self.requests.len()
    }

    /// Submit a leave application for an employee.
    ///
    /// Checks run in order: employee exists, date range is valid, no
    /// overlap with the employee's approved requests, balance covers the
    /// duration. Only then is the pending record inserted; any failure
    /// leaves the store untouched. The balance is checked here but not
    /// debited until approval.
    pub fn apply(
        &mut self,
        employee_id: &str,
        application: LeaveApplication,
    ) -> Result<LeaveRequest, LeaveError> {
        let employee = self
            .users
            .get(employee_id)
            .ok_or(LeaveError::EmployeeNotFound)?;
        let balance = employee.leave_balance;

        let (start, end) = validation::validate_date_range(
            &application.start_date,
            &application.end_date,
            self.clock.today(),
        )?;

        if let Some(conflict) =
            validation::check_overlap(start, end, self.requests.find_by_employee(employee_id))
        {
            tracing::debug!(
                employee_id,
                conflict_id = %conflict.id,
                "leave application overlaps an approved request"
            );
            return Err(LeaveError::DateOverlap);
        }

        let duration = validation::inclusive_days(start, end);
        if i64::from(balance) < duration {
            return Err(LeaveError::InsufficientBalance);
        }

        let request = LeaveRequest::new(employee_id, application, self.clock.now());
        self.requests.insert(request.clone());
        tracing::info!(employee_id, request_id = %request.id, duration, "leave request submitted");

        Ok(request)
    }

    /// Resolve a pending request. `action` arrives from the boundary as a
    /// plain string; anything other than "approve" or "reject" fails with
    /// `InvalidAction`. Approval re-checks the balance at resolution time
    /// and debits exactly the request duration; rejection never touches
    /// the balance and falls back to the configured placeholder reason.
    pub fn approve_or_reject(
        &mut self,
        request_id: &str,
        approver_id: &str,
        action: &str,
        rejection_reason: Option<&str>,
    ) -> Result<Resolution, LeaveError> {
        let request = self
            .requests
            .find_by_id(request_id)
            .ok_or(LeaveError::RequestNotFound)?;
        if !request.is_pending() {
            return Err(LeaveError::AlreadyProcessed);
        }
        let mut request = request.clone();

        let mut employee = self
            .users
            .get(&request.employee_id)
            .cloned()
            .ok_or(LeaveError::EmployeeNotFound)?;

        match action {
            "approve" => {
                // balance may have moved since the application was made
                let duration = u32::try_from(request.duration().max(0)).unwrap_or(u32::MAX);
                if employee.leave_balance < duration {
                    return Err(LeaveError::InsufficientBalance);
                }

                tracing::info!(
                    request_id,
                    employee_id = %employee.id,
                    balance = employee.leave_balance,
                    duration,
                    "approving leave request"
                );

                request.approve(approver_id, self.clock.now());
                employee.leave_balance -= duration;
                self.users.update(employee.clone());
                self.requests.update(&request);

                tracing::info!(
                    request_id,
                    balance = employee.leave_balance,
                    "leave balance debited"
                );

                Ok(Resolution {
                    message: MSG_LEAVE_APPROVED.to_string(),
                    request,
                })
            }
            "reject" => {
                let reason = rejection_reason
                    .filter(|reason| !reason.is_empty())
                    .unwrap_or(&self.config.rejection_placeholder)
                    .to_string();

                request.reject(approver_id, reason, self.clock.now());
                self.requests.update(&request);
                tracing::info!(request_id, approver_id, "leave request rejected");

                Ok(Resolution {
                    message: MSG_LEAVE_REJECTED.to_string(),
                    request,
                })
            }
            _ => Err(LeaveError::InvalidAction),
        }
    }

    /// Requests whose start date falls inside the given month (1-indexed),
    /// with counts by status. A month with no matches yields zero counts
    /// and an empty list, not an error.
    pub fn monthly_summary(&self, year: i32, month: u32) -> MonthlySummary {
        let matching: Vec<&LeaveRequest> = self
            .requests
            .iter()
            .filter(|request| {
                validation::parse_date(&request.start_date)
                    .is_some_and(|start| start.year() == year && start.month() == month)
            })
            .collect();

        let count_status = |status: LeaveStatus| {
            matching
                .iter()
                .filter(|request| request.status == status)
                .count()
        };

        MonthlySummary {
            year,
            month,
            total_requests: matching.len(),
            approved_requests: count_status(LeaveStatus::Approved),
            rejected_requests: count_status(LeaveStatus::Rejected),
            pending_requests: count_status(LeaveStatus::Pending),
            requests: matching
                .into_iter()
                .map(|request| self.annotate(request))
                .collect(),
        }
    }

    pub fn list_pending(&self) -> Vec<LeaveRequestWithEmployee> {
        self.requests
            .iter()
            .filter(|request| request.is_pending())
            .map(|request| self.annotate(request))
            .collect()
    }

    pub fn list_all(&self) -> Vec<LeaveRequestWithEmployee> {
        self.requests
            .iter()
            .map(|request| self.annotate(request))
            .collect()
    }

    pub fn list_by_employee(&self, employee_id: &str) -> Vec<LeaveRequestWithEmployee> {
        self.requests
            .find_by_employee(employee_id)
            .into_iter()
            .map(|request| self.annotate(request))
            .collect()
    }

    fn annotate(&self, request: &LeaveRequest) -> LeaveRequestWithEmployee {
        let employee = self.users.get(&request.employee_id).map(|user| EmployeeRef {
            name: user.name.clone(),
            email: user.email.clone(),
        });
        LeaveRequestWithEmployee {
            request: request.clone(),
            employee,
        }
    }
}
