#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LeaveError {
    #[error("Employee not found")]
    EmployeeNotFound,
    #[error("Leave request not found")]
    RequestNotFound,
    #[error("Start date cannot be in the past")]
    PastDate,
    #[error("End date must be after start date")]
    InvalidRange,
    #[error("Leave dates overlap with existing approved request")]
    DateOverlap,
    #[error("Insufficient leave balance")]
    InsufficientBalance,
    #[error("Leave request has already been processed")]
    AlreadyProcessed,
    #[error("Invalid action. Must be approve or reject")]
    InvalidAction,
}

impl LeaveError {
    /// Stable code for the boundary layer to map onto a transport status.
    pub fn code(&self) -> &'static str {
        match self {
            LeaveError::EmployeeNotFound => "EMPLOYEE_NOT_FOUND",
            LeaveError::RequestNotFound => "REQUEST_NOT_FOUND",
            LeaveError::PastDate => "PAST_DATE",
            LeaveError::InvalidRange => "INVALID_RANGE",
            LeaveError::DateOverlap => "DATE_OVERLAP",
            LeaveError::InsufficientBalance => "INSUFFICIENT_BALANCE",
            LeaveError::AlreadyProcessed => "ALREADY_PROCESSED",
            LeaveError::InvalidAction => "INVALID_ACTION",
        }
    }
}
