//! Request handlers

use axum::{body::Bytes, response::Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::bmi::{bmi_from_raw, RawValue};

/// Body of every `/bmi` response; `None` serializes as `null`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResponse {
    pub bmi: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Compute BMI from a raw request body
///
/// Anything that is not a JSON object is handled like an object with no
/// fields, so the caller always gets `200 OK`.
pub fn bmi_for_body(body: &[u8]) -> BmiResponse {
    let payload: Value = serde_json::from_slice(body).unwrap_or_else(|e| {
        debug!("Unreadable BMI request body: {}", e);
        Value::Null
    });

    let height = RawValue::from_field(&payload, "height");
    let weight = RawValue::from_field(&payload, "weight");

    BmiResponse {
        bmi: bmi_from_raw(&height, &weight),
    }
}

pub async fn calculate_bmi(body: Bytes) -> Json<BmiResponse> {
    Json(bmi_for_body(&body))
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}
