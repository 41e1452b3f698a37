//! Employees, managers, and the in-memory user directory
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::new_prefixed_id;

/// Leave days granted to a user when nothing else is specified.
pub const DEFAULT_LEAVE_BALANCE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Manager,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    /// Remaining paid leave days. Debited only when a request is approved.
    pub leave_balance: u32,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: &str, email: &str, role: Role, department: &str) -> Self {
        Self::with_balance(name, email, role, department, DEFAULT_LEAVE_BALANCE)
    }

    pub fn with_balance(
        name: &str,
        email: &str,
        role: Role,
        department: &str,
        leave_balance: u32,
    ) -> Self {
        Self {
            id: new_prefixed_id("user-"),
            name: name.to_string(),
            email: email.to_string(),
            role,
            department: department.to_string(),
            leave_balance,
            created_at: Utc::now(),
        }
    }
}

/// In-memory user collection. Lookup by id, whole-record replacement on
/// update, nothing ever removed.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn update(&mut self, user: User) -> bool {
        match self.users.iter_mut().find(|existing| existing.id == user.id) {
            Some(existing) => {
                *existing = user;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
