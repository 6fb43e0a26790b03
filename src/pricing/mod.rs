//! Pricing helpers

pub mod discount;

pub use discount::{discounted_price, try_discounted_price, DiscountError};
