//! Raw request values before validation
//!
//! A request field may hold a number, a string, nothing at all, or some JSON
//! shape that can never be a measurement. `RawValue` names those cases so the
//! conversion to `f64` is a single match instead of runtime type probing.

use serde_json::Value;
use std::fmt;

/// An untyped input value as it arrived from the caller
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Absent,
    /// Booleans, arrays and objects, kept as their JSON rendering for messages
    Unsupported(String),
}

/// Why a raw value could not be turned into a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionFailure {
    Missing,
    Unparseable,
    NotFinite,
    WrongType,
}

impl RawValue {
    /// Look up `field` in a JSON object, treating anything else as absent
    pub fn from_field(payload: &Value, field: &str) -> Self {
        payload
            .as_object()
            .and_then(|object| object.get(field))
            .map(Self::from)
            .unwrap_or(RawValue::Absent)
    }

    /// Convert to a finite `f64`
    pub fn to_f64(&self) -> Result<f64, ConversionFailure> {
        let number = match self {
            RawValue::Number(n) => *n,
            RawValue::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| ConversionFailure::Unparseable)?,
            RawValue::Absent => return Err(ConversionFailure::Missing),
            RawValue::Unsupported(_) => return Err(ConversionFailure::WrongType),
        };

        if number.is_finite() {
            Ok(number)
        } else {
            Err(ConversionFailure::NotFinite)
        }
    }
}

impl From<&Value> for RawValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => RawValue::Absent,
            Value::Number(n) => n
                .as_f64()
                .map(RawValue::Number)
                .unwrap_or_else(|| RawValue::Unsupported(n.to_string())),
            Value::String(s) => RawValue::Text(s.clone()),
            other => RawValue::Unsupported(other.to_string()),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawValue::Absent)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{n}"),
            RawValue::Text(s) => write!(f, "{s:?}"),
            RawValue::Absent => write!(f, "null"),
            RawValue::Unsupported(rendered) => write!(f, "{rendered}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(RawValue::from(&json!(1.8)), RawValue::Number(1.8));
        assert_eq!(RawValue::from(&json!(70)), RawValue::Number(70.0));
        assert_eq!(
            RawValue::from(&json!("1.8")),
            RawValue::Text("1.8".to_string())
        );
        assert_eq!(RawValue::from(&json!(null)), RawValue::Absent);
    }

    #[test]
    fn test_from_json_non_scalars_are_unsupported() {
        assert_eq!(
            RawValue::from(&json!(true)),
            RawValue::Unsupported("true".to_string())
        );
        assert_eq!(
            RawValue::from(&json!([1, 2])),
            RawValue::Unsupported("[1,2]".to_string())
        );
        assert!(matches!(
            RawValue::from(&json!({"cm": 180})),
            RawValue::Unsupported(_)
        ));
    }

    #[test]
    fn test_from_field() {
        let payload = json!({"height": 1.8, "weight": null});
        assert_eq!(
            RawValue::from_field(&payload, "height"),
            RawValue::Number(1.8)
        );
        assert_eq!(RawValue::from_field(&payload, "weight"), RawValue::Absent);
        assert_eq!(RawValue::from_field(&payload, "age"), RawValue::Absent);

        // Not an object at all
        assert_eq!(
            RawValue::from_field(&json!([1.8, 70]), "height"),
            RawValue::Absent
        );
    }

    #[test]
    fn test_to_f64_accepts_numbers_and_numeric_text() {
        assert_eq!(RawValue::Number(70.0).to_f64(), Ok(70.0));
        assert_eq!(RawValue::from("1.75").to_f64(), Ok(1.75));
        assert_eq!(RawValue::from(" 42 ").to_f64(), Ok(42.0));
        assert_eq!(RawValue::from("1e2").to_f64(), Ok(100.0));
        assert_eq!(RawValue::from("-3").to_f64(), Ok(-3.0));
    }

    #[test]
    fn test_to_f64_failures() {
        assert_eq!(
            RawValue::from("abc").to_f64(),
            Err(ConversionFailure::Unparseable)
        );
        assert_eq!(
            RawValue::from("").to_f64(),
            Err(ConversionFailure::Unparseable)
        );
        assert_eq!(RawValue::Absent.to_f64(), Err(ConversionFailure::Missing));
        assert_eq!(
            RawValue::Unsupported("true".into()).to_f64(),
            Err(ConversionFailure::WrongType)
        );
        assert_eq!(
            RawValue::from("nan").to_f64(),
            Err(ConversionFailure::NotFinite)
        );
        assert_eq!(
            RawValue::from("inf").to_f64(),
            Err(ConversionFailure::NotFinite)
        );
    }

    #[test]
    fn test_to_f64_rejects_digit_separators() {
        assert_eq!(
            RawValue::from("1_000").to_f64(),
            Err(ConversionFailure::Unparseable)
        );
        assert_eq!(
            RawValue::from("1,000").to_f64(),
            Err(ConversionFailure::Unparseable)
        );
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(RawValue::from(None::<f64>), RawValue::Absent);
        assert_eq!(RawValue::from(Some(2.5)), RawValue::Number(2.5));
        assert_eq!(
            RawValue::from(Some("x")),
            RawValue::Text("x".to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(RawValue::Number(1.5).to_string(), "1.5");
        assert_eq!(RawValue::from("abc").to_string(), "\"abc\"");
        assert_eq!(RawValue::Absent.to_string(), "null");
    }
}
