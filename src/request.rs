//! Leave request records and application payloads
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::new_prefixed_id;
use crate::validation::{inclusive_days, parse_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    #[default]
    Annual,
    Sick,
    Personal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

/// What an employee submits when applying for leave. Dates stay in their
/// boundary form (`YYYY-MM-DD` strings) until validation parses them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaveApplication {
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub leave_type: LeaveType,
}

impl LeaveApplication {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_start_date(mut self, date: &str) -> Self {
        self.start_date = date.to_string();
        self
    }

    pub fn set_end_date(mut self, date: &str) -> Self {
        self.end_date = date.to_string();
        self
    }

    pub fn set_reason(mut self, reason: &str) -> Self {
        self.reason = reason.to_string();
        self
    }

    pub fn set_leave_type(mut self, leave_type: LeaveType) -> Self {
        self.leave_type = leave_type;
        self
    }
}

/// A single leave request. Created pending, resolved exactly once to
/// approved or rejected, and kept forever for history and summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: String,
    pub employee_id: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub leave_type: LeaveType,
    pub status: LeaveStatus,
    pub approved_by: Option<String>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LeaveRequest {
    pub fn new(employee_id: &str, application: LeaveApplication, now: DateTime<Utc>) -> Self {
        Self {
            id: new_prefixed_id("leave-"),
            employee_id: employee_id.to_string(),
            start_date: application.start_date,
            end_date: application.end_date,
            reason: application.reason,
            leave_type: application.leave_type,
            status: LeaveStatus::Pending,
            approved_by: None,
            resolved_at: None,
            rejection_reason: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Both stored dates, when they parse. Hand-seeded records may hold
    /// malformed dates; those yield `None` and never conflict with anything.
    pub fn dates(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((parse_date(&self.start_date)?, parse_date(&self.end_date)?))
    }

    /// Inclusive day count, end and start both counted. Zero when the
    /// stored dates do not parse.
    pub fn duration(&self) -> i64 {
        self.dates()
            .map(|(start, end)| inclusive_days(start, end))
            .unwrap_or(0)
    }

    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }

    pub fn approve(&mut self, approver_id: &str, now: DateTime<Utc>) {
        self.status = LeaveStatus::Approved;
        self.approved_by = Some(approver_id.to_string());
        self.resolved_at = Some(now);
        self.updated_at = now;
    }

    pub fn reject(&mut self, approver_id: &str, reason: String, now: DateTime<Utc>) {
        self.status = LeaveStatus::Rejected;
        self.approved_by = Some(approver_id.to_string());
        self.resolved_at = Some(now);
        self.rejection_reason = Some(reason);
        self.updated_at = now;
    }
}
