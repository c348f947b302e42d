//! Shared clap helper types for CLI commands.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use playfair::Language;

/// Alphabet flag accepted by every command.
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum LanguageArg {
    /// English, J is merged into I.
    #[default]
    En,
    /// Czech, Q is merged into O.
    Cs,
}

impl From<LanguageArg> for Language {
    fn from(value: LanguageArg) -> Language {
        match value {
            LanguageArg::En => Language::English,
            LanguageArg::Cs => Language::Czech,
        }
    }
}

/// Key and alphabet selection shared by all commands.
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Cipher key used to build the matrix.
    #[arg(long, short = 'k', env = "PLAYFAIR_KEY", hide_env_values = true)]
    pub key: String,
    /// Alphabet of the message.
    #[arg(long = "lang", short = 'l', default_value_t = LanguageArg::En, value_enum)]
    pub language: LanguageArg,
    /// Emit JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Message input/output options for encrypt and decrypt.
#[derive(Args, Debug)]
pub struct MessageArgs {
    /// Message text (falls back to stdin if omitted).
    #[arg(long, short = 't', conflicts_with = "from")]
    pub text: Option<String>,
    /// Read the message from a file (`-` for stdin).
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
    /// Write the result to a file (`-` for stdout).
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// Print the 5x5 matrix before the result.
    #[arg(long = "show-matrix")]
    pub show_matrix: bool,
}
