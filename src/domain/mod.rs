//! Domain logic for sentiment classification

pub mod sentiment;

pub use sentiment::{classify, Classification, Sentiment};
