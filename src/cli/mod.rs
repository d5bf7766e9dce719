//! CLI module for the tenancy extraction service
//!
//! A single subcommand: `serve` runs the HTTP API.

pub mod serve;

use clap::{Parser, Subcommand};

/// Tenancy Extract - rental agreement transcription and structured extraction
#[derive(Parser)]
#[command(name = "tenancy-extract")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
