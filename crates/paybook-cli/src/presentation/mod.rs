//! Shared CLI presentation utilities.
//!
//! This module provides reusable display and formatting functions
//! for consistent CLI output across commands.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Payroll figures come from the core; nothing here recomputes them

pub mod employee_display;
pub mod tables;

// Re-export commonly used items
pub use employee_display::{EmployeeDisplayOpts, attribute_label, display_employee, format_attribute};
pub use tables::{format_money, print_separator, truncate_string};
