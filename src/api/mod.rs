//! HTTP surface for the BMI pipeline

pub mod handlers;
pub mod server;


pub use handlers::{BmiResponse, HealthStatus};
pub use server::{build_router, ApiServer};
