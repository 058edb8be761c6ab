//! Repository Module
//!
//! Sequences the record mapper and the document store for each operation.

pub mod employee;

// Re-exports
pub use employee::EmployeeRepository;
