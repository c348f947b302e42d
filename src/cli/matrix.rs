//! Matrix inspection (`playfair matrix ...`).

use anyhow::Result;
use clap::Args;
use playfair::{Language, MatrixReport, Playfair};

use crate::cli::common::KeyArgs;
use crate::cli::utils::{emit, ensure_key};

/// Arguments for `playfair matrix`.
#[derive(Args, Debug)]
pub struct MatrixArgs {
    #[command(flatten)]
    pub key: KeyArgs,
}

/// Print the matrix generated for a key.
pub fn handle(args: MatrixArgs) -> Result<()> {
    ensure_key(&args.key.key)?;
    let language: Language = args.key.language.into();
    let cipher = Playfair::new(language);
    let matrix = cipher.matrix(&args.key.key);
    if args.key.json {
        let report = MatrixReport {
            language,
            key: cipher.normalize_key(&args.key.key),
            matrix: &matrix,
        };
        emit(None, &serde_json::to_string_pretty(&report)?)
    } else {
        emit(None, &matrix.to_string())
    }
}
