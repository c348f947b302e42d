use crate::cipher::Direction;
use crate::language::Language;
use crate::matrix::CipherMatrix;
use serde::Serialize;

/// Machine-readable summary of one cipher run.
#[derive(Debug, Clone, Serialize)]
pub struct CipherReport<'a> {
    pub mode: Direction,
    pub language: Language,
    pub matrix: &'a CipherMatrix,
    pub output: String,
}

/// Matrix listing for a key, without running the cipher.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixReport<'a> {
    pub language: Language,
    pub key: String,
    pub matrix: &'a CipherMatrix,
}
