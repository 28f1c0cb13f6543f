//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the paybook employee payroll register.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "paybook")]
#[command(about = "Keep an employee register and compute payroll")]
#[command(version)]
pub struct Cli {
    /// Use this employees file instead of the configured one
    #[arg(long = "data-file", global = true)]
    pub data_file: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
