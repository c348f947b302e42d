use crate::language::Language;
use thiserror::Error;

/// Errors raised by the cipher pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("invalid language '{0}' (expected 'en' or 'cs')")]
    InvalidLanguage(String),
    #[error("key and message cannot be empty")]
    EmptyMessage,
    #[error("cipher text has odd length {0} and cannot be split into digraphs")]
    OddLengthCiphertext(usize),
    #[error("cipher text contains '{0}', which is not a letter of the {1} matrix")]
    InvalidCiphertextChar(char, Language),
    #[error("matrix was built for language '{matrix}' but the cipher uses '{cipher}'")]
    LanguageMismatch { cipher: Language, matrix: Language },
    /// A letter survived normalization but is missing from the matrix.
    /// This points at a normalization bug rather than bad user input.
    #[error("letter '{0}' not found in cipher matrix; input filtering is likely inconsistent")]
    LetterNotFound(char),
    #[error("group size must be at least 1 (got {0})")]
    InvalidGroupSize(usize),
}

pub type Result<T> = std::result::Result<T, CipherError>;
