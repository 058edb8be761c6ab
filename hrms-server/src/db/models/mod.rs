//! Database Models

pub mod employee;

// Re-exports
pub use employee::{Employee, EmployeeDocument, EmployeePayload};
