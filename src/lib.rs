//! Playfair digraph cipher over a keyed 5×5 letter matrix.
//!
//! Two alphabets are supported: English (`J` folded into `I`) and Czech
//! (`Q` folded into `O`). Spaces and digits are carried through the cipher
//! as letter markers so they survive a round trip.

mod cipher;
mod digraph;
mod error;
mod format;
mod key;
mod language;
mod matrix;
mod report;
mod text;
mod translit;

pub use cipher::{Direction, Playfair, transform};
pub use digraph::{Digraph, join_digraphs, pad_digraphs, split_digraphs};
pub use error::{CipherError, Result};
pub use format::group_characters;
pub use key::normalize_key;
pub use language::{Language, normalize_language_chars};
pub use matrix::{CipherMatrix, Position, SIZE};
pub use report::{CipherReport, MatrixReport};
pub use text::{MARKERS, decode_markers, normalize_text};
pub use translit::{AsciiFolding, Transliterate, to_ascii_approximation};

/// Builds the cipher matrix for `key` in the given language.
pub fn generate_cipher_matrix(key: &str, language: Language) -> CipherMatrix {
    Playfair::new(language).matrix(key)
}

/// Encrypts `plain_text`. Pass `matrix` to reuse one already built for `key`.
pub fn encrypt(
    key: &str,
    plain_text: &str,
    language: Language,
    matrix: Option<&CipherMatrix>,
) -> Result<String> {
    Playfair::new(language).encrypt(key, plain_text, matrix)
}

/// Decrypts `cipher_text`; whitespace in the input is ignored.
pub fn decrypt(
    key: &str,
    cipher_text: &str,
    language: Language,
    matrix: Option<&CipherMatrix>,
) -> Result<String> {
    Playfair::new(language).decrypt(key, cipher_text, matrix)
}
