//! Encryption command (`playfair encrypt ...`).

use anyhow::{Context, Result};
use clap::Args;
use log::debug;
use playfair::{CipherReport, Direction, Language, Playfair, group_characters};

use crate::cli::common::{KeyArgs, MessageArgs};
use crate::cli::utils::{ensure_present, present, read_text_arg};

/// Arguments for `playfair encrypt`.
#[derive(Args, Debug)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub key: KeyArgs,
    #[command(flatten)]
    pub message: MessageArgs,
    /// Characters per block in the printed cipher text.
    #[arg(long, default_value_t = 5)]
    pub group: usize,
    /// Print the cipher text as one unbroken block.
    #[arg(long = "no-group")]
    pub no_group: bool,
}

/// Execute an encrypt command.
pub fn handle(args: EncryptArgs) -> Result<()> {
    let text = read_text_arg(args.message.text.clone(), args.message.from.clone())?;
    ensure_present(&args.key.key, &text)?;

    let language: Language = args.key.language.into();
    let cipher = Playfair::new(language);
    let matrix = cipher.matrix(&args.key.key);
    debug!("language {language}, matrix:\n{matrix}");
    debug!(
        "normalized message has {} letters",
        cipher.normalize_text(&text).len()
    );

    let encrypted = cipher
        .encrypt(&args.key.key, &text, Some(&matrix))
        .context("encryption failed")?;
    let output = if args.no_group {
        encrypted
    } else {
        group_characters(&encrypted, args.group)?
    };

    let report = CipherReport {
        mode: Direction::Encrypt,
        language,
        matrix: &matrix,
        output,
    };
    present(&report, args.key.json, &args.message)
}
