//! # calcdesk
//!
//! Small calculators exposed as a library, a CLI and an HTTP service.
//!
//! ## Usage
//!
//! ```bash
//! calcdesk serve [--host 127.0.0.1] [--port 5000] [-c config.toml]
//! calcdesk bmi --height 1.8 --weight 70
//! calcdesk discount --price 100 --percent 20
//! calcdesk palindrome "Never odd or even"
//! ```
//!
//! ## Modules
//!
//! - `bmi` - Validation and calculation of Body-Mass Index from raw inputs
//! - `api` - HTTP endpoint serving the BMI pipeline
//! - `pricing` - Percentage discounts
//! - `text` - Palindrome detection
//! - `config` - Server configuration from file and environment
//! - `cli` - Command-line arguments and subcommands
pub mod api;
pub mod bmi;
pub mod cli;
pub mod config;
pub mod error;
pub mod pricing;
pub mod text;

pub use error::{Error, Result};
