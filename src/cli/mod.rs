//! Command-line interface wiring for the `playfair` binary.
//!
//! This module owns the clap definitions and delegates execution to one
//! submodule per command.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod common;
pub mod decrypt;
pub mod encrypt;
pub mod matrix;
pub mod utils;

/// Parsed CLI entrypoint for the `playfair` binary.
#[derive(Parser, Debug)]
#[command(name = "playfair", version, about = "Playfair cipher with English and Czech alphabets")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Operations made available to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encrypt a message.
    Encrypt(encrypt::EncryptArgs),
    /// Decrypt a message; filler letters added on encryption remain.
    Decrypt(decrypt::DecryptArgs),
    /// Show the 5x5 matrix generated for a key.
    Matrix(matrix::MatrixArgs),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Encrypt(args) => encrypt::handle(args),
        Command::Decrypt(args) => decrypt::handle(args),
        Command::Matrix(args) => matrix::handle(args),
    }
}
