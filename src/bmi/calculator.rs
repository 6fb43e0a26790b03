//! BMI calculation
//!
//! Failures never leave this module: invalid input and degenerate arithmetic
//! both come back as `None`.

use super::input::RawValue;
use super::validation::{validate_bmi_inputs, Measurement};
use tracing::debug;

/// Round to two decimal places, ties to even
///
/// Works from the exact decimal expansion of `value`, so a quotient stored
/// just below a `.xx5` boundary rounds down.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Compute `weight / height²` rounded to two decimals
///
/// Returns `None` when `height²` underflows to zero or the quotient is not
/// finite.
pub fn calculate_bmi(height: Measurement, weight: Measurement) -> Option<f64> {
    let divisor = height.value() * height.value();
    if divisor == 0.0 {
        return None;
    }

    let quotient = weight.value() / divisor;
    quotient.is_finite().then(|| round2(quotient))
}

/// Validate raw inputs and compute BMI, absorbing every failure into `None`
pub fn bmi_from_raw(height: &RawValue, weight: &RawValue) -> Option<f64> {
    match validate_bmi_inputs(height, weight) {
        Ok((height, weight)) => calculate_bmi(height, weight),
        Err(e) => {
            debug!(field = e.field(), "BMI unavailable: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bmi(height: impl Into<RawValue>, weight: impl Into<RawValue>) -> Option<f64> {
        bmi_from_raw(&height.into(), &weight.into())
    }

    #[test]
    fn test_typical_adult() {
        assert_eq!(bmi(1.8, 70.0), Some(21.6));
    }

    #[test]
    fn test_zero_height_is_unavailable() {
        assert_eq!(bmi(0.0, 70.0), None);
    }

    #[test]
    fn test_non_numeric_height_is_unavailable() {
        assert_eq!(bmi("abc", 70.0), None);
    }

    #[test]
    fn test_absent_height_is_unavailable() {
        assert_eq!(bmi(None::<f64>, 70.0), None);
    }

    #[test]
    fn test_negative_weight_is_unavailable() {
        assert_eq!(bmi(1.7, -5.0), None);
    }

    #[test]
    fn test_zero_weight_is_unavailable() {
        assert_eq!(bmi(1.7, 0.0), None);
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(bmi("1.8", "70"), Some(21.6));
        assert_eq!(bmi("2", 80.0), Some(20.0));
    }

    #[test]
    fn test_rounding_ties_to_even() {
        // 0.5 / 4 = 0.125 and 1.5 / 4 = 0.375 are exact in binary
        assert_eq!(bmi(2.0, 0.5), Some(0.12));
        assert_eq!(bmi(2.0, 1.5), Some(0.38));
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(21.604938271604937), 21.6);
    }

    #[test]
    fn test_rounding_uses_stored_quotient() {
        // 89.1 / 4 is stored as 22.27499999..., 90.9 / 4 as 22.72500000...1
        assert_eq!(bmi(2.0, 89.1), Some(22.27));
        assert_eq!(bmi(2.0, 90.9), Some(22.73));
    }

    #[test]
    fn test_huge_finite_result_is_kept() {
        assert_eq!(bmi(1.0, 1e307), Some(1e307));
        assert_eq!(round2(1e307), 1e307);
    }

    #[test]
    fn test_underflowing_height_is_unavailable() {
        assert_eq!(bmi(1e-200, 70.0), None);
    }

    #[test]
    fn test_overflowing_result_is_unavailable() {
        assert_eq!(bmi(1e-10, 1e300), None);
    }

    #[test]
    fn test_typed_calculation() {
        let (h, w) = validate_bmi_inputs(&RawValue::Number(1.6), &RawValue::Number(64.0)).unwrap();
        assert_eq!(calculate_bmi(h, w), Some(25.0));
    }

    proptest! {
        #[test]
        fn test_positive_inputs_match_formula(
            height in 0.5f64..2.5f64,
            weight in 1.0f64..300.0f64,
        ) {
            let expected = round2(weight / (height * height));
            prop_assert_eq!(bmi(height, weight), Some(expected));
            prop_assert_eq!(bmi(height.to_string(), weight.to_string()), Some(expected));
        }

        #[test]
        fn test_non_positive_inputs_are_unavailable(
            bad in -1000.0f64..=0.0f64,
            good in 0.1f64..300.0f64,
        ) {
            prop_assert_eq!(bmi(bad, good), None);
            prop_assert_eq!(bmi(good, bad), None);
        }

        #[test]
        fn test_calculation_is_idempotent(
            height in prop_oneof![
                (0.1f64..3.0).prop_map(RawValue::Number),
                "[a-z0-9.\\-]{0,6}".prop_map(RawValue::Text),
                Just(RawValue::Absent),
            ],
            weight in 0.1f64..300.0f64,
        ) {
            let weight = RawValue::Number(weight);
            prop_assert_eq!(bmi_from_raw(&height, &weight), bmi_from_raw(&height, &weight));
        }
    }
}
