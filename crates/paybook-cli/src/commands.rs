//! Main commands enum and primary subcommands.
//!
//! This module defines the available commands for the CLI tool.

use clap::{Args, Subcommand};

/// Available commands for the paybook register.
#[derive(Subcommand)]
pub enum Commands {
    /// List employees with their tax and net salary
    List {
        /// Only employees in this department (case-insensitive)
        #[arg(short, long, conflicts_with = "search")]
        department: Option<String>,
        /// Only employees whose name or department contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show every stored field of one employee
    Show {
        /// Employee ID
        id: i64,
    },

    /// Add a new employee
    Add(AddArgs),

    /// Change fields of an existing employee
    Update(UpdateArgs),

    /// Delete an employee
    Delete {
        /// Employee ID
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show payroll totals for all employees
    Summary,

    /// Show resolved paths for the data directory and employees file
    Paths,
}

/// Arguments for `paybook add`.
///
/// Name, department and salary are optional here on purpose: the core
/// validator reports every missing or malformed value at once.
#[derive(Args, Debug, Clone, Default)]
pub struct AddArgs {
    /// Employee name
    #[arg(long)]
    pub name: Option<String>,
    /// Department
    #[arg(long)]
    pub department: Option<String>,
    /// Basic monthly salary, a positive number
    #[arg(long)]
    pub salary: Option<String>,
    #[command(flatten)]
    pub details: DetailArgs,
}

/// Arguments for `paybook update`.
#[derive(Args, Debug, Clone, Default)]
pub struct UpdateArgs {
    /// Employee ID
    pub id: i64,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    /// New department
    #[arg(long)]
    pub department: Option<String>,
    /// New basic monthly salary
    #[arg(long)]
    pub salary: Option<String>,
    #[command(flatten)]
    pub details: DetailArgs,
    /// Remove the notes field
    #[arg(long, conflicts_with = "notes")]
    pub clear_notes: bool,
}

/// Descriptive fields stored alongside an employee.
#[derive(Args, Debug, Clone, Default)]
pub struct DetailArgs {
    /// Gender
    #[arg(long)]
    pub gender: Option<String>,
    /// Start date, e.g. 2024-01-15
    #[arg(long)]
    pub start_date: Option<String>,
    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
    /// Profile image path or URL
    #[arg(long)]
    pub profile_image: Option<String>,
}

impl DetailArgs {
    /// Pairs of stored attribute key and supplied value.
    pub fn supplied(&self) -> impl Iterator<Item = (&'static str, &str)> {
        use paybook_core::attribute_keys::{GENDER, NOTES, PROFILE_IMAGE, START_DATE};

        [
            (GENDER, self.gender.as_deref()),
            (START_DATE, self.start_date.as_deref()),
            (NOTES, self.notes.as_deref()),
            (PROFILE_IMAGE, self.profile_image.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
    }
}
