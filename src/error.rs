use thiserror::Error;

use crate::bmi::InvalidInput;
use crate::pricing::DiscountError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("Discount error: {0}")]
    Discount(#[from] DiscountError),
}

pub type Result<T> = std::result::Result<T, Error>;
