//! Decryption command (`playfair decrypt ...`).

use anyhow::{Context, Result};
use clap::Args;
use log::debug;
use playfair::{CipherReport, Direction, Language, Playfair};

use crate::cli::common::{KeyArgs, MessageArgs};
use crate::cli::utils::{ensure_present, present, read_text_arg};

/// Arguments for `playfair decrypt`.
#[derive(Args, Debug)]
pub struct DecryptArgs {
    #[command(flatten)]
    pub key: KeyArgs,
    #[command(flatten)]
    pub message: MessageArgs,
}

/// Execute a decrypt command.
pub fn handle(args: DecryptArgs) -> Result<()> {
    let text = read_text_arg(args.message.text.clone(), args.message.from.clone())?;
    ensure_present(&args.key.key, &text)?;

    let language: Language = args.key.language.into();
    let cipher = Playfair::new(language);
    let matrix = cipher.matrix(&args.key.key);
    debug!("language {language}, matrix:\n{matrix}");

    let output = cipher
        .decrypt(&args.key.key, &text, Some(&matrix))
        .context("decryption failed")?;

    let report = CipherReport {
        mode: Direction::Decrypt,
        language,
        matrix: &matrix,
        output,
    };
    present(&report, args.key.json, &args.message)
}
