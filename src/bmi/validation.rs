//! Validation of BMI inputs
//!
//! Turns raw request values into [`Measurement`]s: finite numbers strictly
//! greater than zero. A `Measurement` cannot be built any other way, so the
//! calculator never sees an unchecked value.

use super::input::{ConversionFailure, RawValue};
use thiserror::Error;

/// A validated, strictly positive measurement
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Measurement(f64);

impl Measurement {
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Input rejected by the validator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("{field} must be a number, got {raw}")]
    NotANumber {
        field: String,
        raw: RawValue,
        reason: ConversionFailure,
    },

    #[error("{field} must be > 0, got {value}")]
    NotPositive { field: String, value: f64 },
}

impl InvalidInput {
    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            InvalidInput::NotANumber { field, .. } | InvalidInput::NotPositive { field, .. } => {
                field
            }
        }
    }
}

/// Convert `value` to a positive measurement, naming `field` on failure
pub fn to_positive_measurement(value: &RawValue, field: &str) -> Result<Measurement, InvalidInput> {
    let number = value
        .to_f64()
        .map_err(|reason| InvalidInput::NotANumber {
            field: field.to_string(),
            raw: value.clone(),
            reason,
        })?;

    if number <= 0.0 {
        return Err(InvalidInput::NotPositive {
            field: field.to_string(),
            value: number,
        });
    }

    Ok(Measurement(number))
}

/// Validate height then weight, stopping at the first failure
pub fn validate_bmi_inputs(
    height: &RawValue,
    weight: &RawValue,
) -> Result<(Measurement, Measurement), InvalidInput> {
    let height = to_positive_measurement(height, "height")?;
    let weight = to_positive_measurement(weight, "weight")?;
    Ok((height, weight))
}
