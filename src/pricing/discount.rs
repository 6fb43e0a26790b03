//! Percentage discounts
//!
//! [`discounted_price`] keeps the lenient contract: any bad input yields `0.0`.
//! [`try_discounted_price`] exposes the reason for callers that want it.

use crate::bmi::RawValue;
use thiserror::Error;
use tracing::debug;

/// Discount rejected before calculation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiscountError {
    #[error("{field} must be a number, got {raw}")]
    NotANumber { field: &'static str, raw: RawValue },

    #[error("Price must be greater than 0, got {0}")]
    NonPositivePrice(f64),

    #[error("Discount percent must be non-negative, got {0}")]
    NegativeDiscount(f64),

    #[error("Discount percent cannot exceed 100, got {0}")]
    DiscountTooLarge(f64),
}

fn to_number(value: &RawValue, field: &'static str) -> Result<f64, DiscountError> {
    value.to_f64().map_err(|_| DiscountError::NotANumber {
        field,
        raw: value.clone(),
    })
}

/// Price after removing `discount_percent` percent
pub fn try_discounted_price(
    price: &RawValue,
    discount_percent: &RawValue,
) -> Result<f64, DiscountError> {
    let price = to_number(price, "price")?;
    let percent = to_number(discount_percent, "discount_percent")?;

    if price <= 0.0 {
        return Err(DiscountError::NonPositivePrice(price));
    }
    if percent < 0.0 {
        return Err(DiscountError::NegativeDiscount(percent));
    }
    if percent > 100.0 {
        return Err(DiscountError::DiscountTooLarge(percent));
    }

    Ok(price - (price * percent / 100.0))
}

/// Like [`try_discounted_price`], but returns `0.0` on any failure
pub fn discounted_price(price: &RawValue, discount_percent: &RawValue) -> f64 {
    try_discounted_price(price, discount_percent).unwrap_or_else(|e| {
        debug!("Discount unavailable: {}", e);
        0.0
    })
}
