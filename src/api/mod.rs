//! HTTP API layer

pub mod health;
pub mod info;
pub mod predict;
pub mod router;
pub mod types;

pub use router::create_router;
