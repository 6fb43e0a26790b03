//! Command-line interface
//!
//! - `args` - clap argument definitions
//! - `commands` - subcommand implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
