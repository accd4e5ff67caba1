//! Shared API types

pub mod error;
pub mod json;

pub use error::ApiError;
pub use json::Json;
