//! Core domain types, payroll engine and port definitions for paybook.
//!
//! The crate has no infrastructure dependencies. Persistence is reached only
//! through the [`ports::RecordStore`] trait, which adapters (see
//! `paybook-store`) implement.
//!
//! - [`domain`] - employee records and their derived payroll view
//! - [`payroll`] - tax and net salary derivation
//! - [`validation`] - input validation that reports every problem at once
//! - [`ids`] - creation-ordered employee identifiers
//! - [`services`] - the load, mutate, save orchestration used by adapters

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod ids;
pub mod paths;
pub mod payroll;
pub mod ports;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::StoreConfig;
pub use domain::{
    EmployeeId, EmployeeInput, EmployeeRecord, EmployeeUpdate, EmployeeWithPayroll,
    attribute_keys, is_reserved_key,
};
pub use ids::{IdGenerator, generate_id};
pub use payroll::{
    PayrollSummary, TAX_RATE, calculate_net_salary, calculate_tax, enrich_with_payroll,
};
pub use ports::{CoreError, PersistenceError, RecordStore};
pub use services::EmployeeService;
pub use validation::{
    EmployeeFields, ValidationIssue, ValidationReport, parse_salary, prepare_fields,
    validate_input,
};

// Re-export path utilities
pub use paths::{
    DirectoryCreationStrategy, PathError, data_root, employees_file_path, ensure_directory,
    verify_writable,
};

// Dev-dependencies exercised only by the integration tests
#[cfg(test)]
use paybook_store as _;
