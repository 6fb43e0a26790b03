//! Body-Mass Index pipeline
//!
//! Raw values flow through three stages:
//!
//! - [`input`] - typed union of what a caller may send (number, text, absent)
//! - [`validation`] - coercion to strictly positive [`Measurement`]s
//! - [`calculator`] - `weight / height²` rounded to two decimals, or `None`
//!
//! Validation errors stop at the calculator. Callers only ever see a value or
//! its absence.

pub mod calculator;
pub mod input;
pub mod validation;

pub use calculator::{bmi_from_raw, calculate_bmi, round2};
pub use input::{ConversionFailure, RawValue};
pub use validation::{to_positive_measurement, validate_bmi_inputs, InvalidInput, Measurement};
