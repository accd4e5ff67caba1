//! CLI for the sentiment API

pub mod serve;

use clap::{Parser, Subcommand};

/// Sentiment Analysis API - keyword-based sentiment classification service
#[derive(Parser)]
#[command(name = "sentiment-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),
}
