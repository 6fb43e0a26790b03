//! Subcommand implementations

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use crate::api::{ApiServer, BmiResponse};
use crate::bmi::{bmi_from_raw, calculate_bmi, validate_bmi_inputs, RawValue};
use crate::config::ServerConfig;
use crate::pricing::{discounted_price, try_discounted_price};
use crate::text::is_palindrome;

/// Load server config, letting command-line flags win over file and environment
pub fn load_server_config(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<PathBuf>,
) -> crate::Result<ServerConfig> {
    let mut config = ServerConfig::load(config_path.as_deref())?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    Ok(config)
}

pub async fn run_serve(config: ServerConfig) -> Result<()> {
    debug!("Server config: {:?}", config);
    ApiServer::new(config).start().await
}

/// Render the `bmi` subcommand output
pub fn bmi_output(height: Option<String>, weight: Option<String>, strict: bool) -> crate::Result<String> {
    let height = RawValue::from(height);
    let weight = RawValue::from(weight);

    let bmi = if strict {
        let (height, weight) = validate_bmi_inputs(&height, &weight)?;
        calculate_bmi(height, weight)
    } else {
        bmi_from_raw(&height, &weight)
    };

    Ok(serde_json::to_string(&BmiResponse { bmi })?)
}

/// Render the `discount` subcommand output
pub fn discount_output(
    price: Option<String>,
    percent: Option<String>,
    strict: bool,
) -> crate::Result<String> {
    let price = RawValue::from(price);
    let percent = RawValue::from(percent);

    let discounted = if strict {
        try_discounted_price(&price, &percent)?
    } else {
        discounted_price(&price, &percent)
    };

    Ok(discounted.to_string())
}

pub fn palindrome_output(text: &str) -> String {
    is_palindrome(text).to_string()
}
