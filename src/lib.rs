//! Employee leave-request management: apply for leave against a balance,
//! approve or reject pending requests, and summarize activity per month.

pub mod clock;
pub mod error;
pub mod request;
pub mod service;
pub mod store;
pub mod user;
pub mod utils;
pub mod validation;
