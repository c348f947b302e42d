//! Convenience helpers shared across command handlers.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use playfair::{CipherError, CipherReport};

use crate::cli::common::MessageArgs;

/// Resolve message input for commands that accept either inline strings or files.
pub fn read_text_arg(text: Option<String>, from: Option<PathBuf>) -> Result<String> {
    if let Some(t) = text {
        return Ok(t);
    }
    if let Some(path) = from {
        if path.as_os_str() == "-" {
            return read_stdin();
        }
        return fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    read_stdin()
}

/// Read the entire stdin stream into memory.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
    Ok(buffer)
}

/// Persist a string either to a file or stdout when `-` is provided.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if path.as_os_str() == "-" {
        io::stdout().write_all(content.as_bytes())?;
        return Ok(());
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Print to stdout, or write to `output` when one was requested.
pub fn emit(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => write_output(path, &format!("{content}\n")),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}

/// Render a cipher result as JSON or text, honouring `--show-matrix` and `--output`.
pub fn present(report: &CipherReport<'_>, json: bool, message: &MessageArgs) -> Result<()> {
    let content = if json {
        serde_json::to_string_pretty(report).context("failed to serialize report")?
    } else if message.show_matrix {
        format!("{}

{}", report.matrix, report.output)
    } else {
        report.output.clone()
    };
    emit(message.output.as_deref(), &content)
}

/// Reject a blank key or message before running the cipher.
pub fn ensure_present(key: &str, message: &str) -> Result<(), CipherError> {
    ensure_key(key)?;
    if message.trim().is_empty() {
        return Err(CipherError::EmptyMessage);
    }
    Ok(())
}

/// Reject a blank key for commands that take no message.
pub fn ensure_key(key: &str) -> Result<(), CipherError> {
    if key.trim().is_empty() {
        return Err(CipherError::EmptyMessage);
    }
    Ok(())
}
