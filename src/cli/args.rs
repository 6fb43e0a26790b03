//! CLI argument structures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Small calculators: BMI, discounts and palindromes
#[derive(Parser)]
#[command(name = "calcdesk")]
#[command(about = "calcdesk - BMI service and small calculators", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the BMI HTTP service
    #[command(name = "serve")]
    Serve {
        /// Address to bind (overrides config and CALCDESK_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config and CALCDESK_PORT)
        #[arg(short = 'p', long)]
        port: Option<u16>,

        /// Path to a TOML configuration file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },

    /// Compute Body-Mass Index and print it as JSON
    #[command(name = "bmi")]
    Bmi {
        /// Height (any unit; squared as given)
        #[arg(long, allow_hyphen_values = true)]
        height: Option<String>,

        /// Weight (any unit)
        #[arg(long, allow_hyphen_values = true)]
        weight: Option<String>,

        /// Fail with the validation error instead of printing null
        #[arg(long)]
        strict: bool,
    },

    /// Apply a percentage discount to a price
    #[command(name = "discount")]
    Discount {
        /// Original price
        #[arg(long, allow_hyphen_values = true)]
        price: Option<String>,

        /// Discount percentage between 0 and 100
        #[arg(long, allow_hyphen_values = true)]
        percent: Option<String>,

        /// Fail with the reason instead of printing 0
        #[arg(long)]
        strict: bool,
    },

    /// Check whether text is a palindrome
    #[command(name = "palindrome")]
    Palindrome {
        /// Text to check (letters and digits only are compared)
        text: String,
    },
}
