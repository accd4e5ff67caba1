//! Sentiment Analysis API
//!
//! A small HTTP service that classifies text into one of three sentiment
//! labels (positive, negative, neutral) using ordered keyword matching.
//! Exposes three endpoints:
//! - `GET /` - service information
//! - `GET /health` - liveness probe
//! - `POST /predict` - classify a piece of text

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
