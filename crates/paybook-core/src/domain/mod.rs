//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (JSON files, terminals, etc.).
//!
//! # Structure
//!
//! - `employee` - Employee types (`EmployeeRecord`, `EmployeeInput`, `EmployeeUpdate`)
//! - `EmployeeWithPayroll` is the derived view built by [`crate::payroll`]

mod employee;

// Re-export employee types at the domain level for convenience
pub use employee::{
    EmployeeId, EmployeeInput, EmployeeRecord, EmployeeUpdate, EmployeeWithPayroll,
    attribute_keys, is_reserved_key,
};
