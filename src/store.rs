//! Append-only in-memory collection of leave requests
use crate::request::LeaveRequest;

/// Holds every leave request for the life of the process. Records are
/// appended on application and never removed; the only mutation allowed
/// afterwards is the status/resolution update of a resolve.
#[derive(Debug, Default)]
pub struct LeaveStore {
    requests: Vec<LeaveRequest>,
}

impl LeaveStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, request: LeaveRequest) {
        self.requests.push(request);
    }

    pub fn find_by_id(&self, id: &str) -> Option<&LeaveRequest> {
        self.requests.iter().find(|request| request.id == id)
    }

    /// All requests for one employee, in insertion order.
    pub fn find_by_employee(&self, employee_id: &str) -> Vec<&LeaveRequest> {
        self.requests
            .iter()
            .filter(|request| request.employee_id == employee_id)
            .collect()
    }

    /// Copy the resolution fields onto the stored record. Id, employee and
    /// dates are structural and stay as inserted.
    pub fn update(&mut self, request: &LeaveRequest) -> bool {
        match self
            .requests
            .iter_mut()
            .find(|existing| existing.id == request.id)
        {
            Some(existing) => {
                existing.status = request.status;
                existing.approved_by = request.approved_by.clone();
                existing.resolved_at = request.resolved_at;
                existing.rejection_reason = request.rejection_reason.clone();
                existing.updated_at = request.updated_at;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LeaveRequest> {
        self.requests.iter()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
