use crate::digraph::{Digraph, join_digraphs, pad_digraphs, split_digraphs};
use crate::error::{CipherError, Result};
use crate::key::normalize_key;
use crate::language::Language;
use crate::matrix::CipherMatrix;
use crate::text::{decode_markers, normalize_text};
use crate::translit::{AsciiFolding, Transliterate};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Which way the substitution rules are applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    fn delta(self) -> isize {
        match self {
            Direction::Encrypt => 1,
            Direction::Decrypt => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => write!(f, "encrypt"),
            Direction::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// Applies the Playfair rules to every digraph.
///
/// - same row: each letter moves one column right (left when decrypting)
/// - same column: each letter moves one row down (up when decrypting)
/// - otherwise: letters swap columns, which is its own inverse
pub fn transform(
    digraphs: &[Digraph],
    matrix: &CipherMatrix,
    direction: Direction,
) -> Result<Vec<Digraph>> {
    let delta = direction.delta();
    digraphs
        .iter()
        .map(|&Digraph(a, b)| {
            let first = matrix.locate(a)?;
            let second = matrix.locate(b)?;
            let (first, second) = if first.row == second.row {
                (first.shift_col(delta), second.shift_col(delta))
            } else if first.col == second.col {
                (first.shift_row(delta), second.shift_row(delta))
            } else {
                (first.with_col(second.col), second.with_col(first.col))
            };
            Ok(Digraph(matrix.get(first), matrix.get(second)))
        })
        .collect()
}

/// Cipher context: a language plus the transliterator used for keys and
/// messages.
#[derive(Debug, Clone)]
pub struct Playfair<T: Transliterate = AsciiFolding> {
    language: Language,
    translit: T,
}

impl Playfair<AsciiFolding> {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            translit: AsciiFolding,
        }
    }
}

impl<T: Transliterate> Playfair<T> {
    pub fn with_transliterator(language: Language, translit: T) -> Self {
        Self { language, translit }
    }

    pub fn normalize_key(&self, key: &str) -> String {
        normalize_key(&self.translit, key, self.language)
    }

    pub fn normalize_text(&self, text: &str) -> String {
        normalize_text(&self.translit, text, self.language)
    }

    /// Builds the cipher matrix for `key`.
    pub fn matrix(&self, key: &str) -> CipherMatrix {
        CipherMatrix::from_key(&self.normalize_key(key), self.language)
    }

    fn resolve_matrix<'a>(
        &self,
        key: &str,
        matrix: Option<&'a CipherMatrix>,
    ) -> Result<Cow<'a, CipherMatrix>> {
        match matrix {
            Some(m) if m.language() != self.language => Err(CipherError::LanguageMismatch {
                cipher: self.language,
                matrix: m.language(),
            }),
            Some(m) => Ok(Cow::Borrowed(m)),
            None => Ok(Cow::Owned(self.matrix(key))),
        }
    }

    /// Encrypts `plain_text`, building the matrix from `key` unless one is
    /// supplied. A supplied matrix must match the cipher's language.
    pub fn encrypt(
        &self,
        key: &str,
        plain_text: &str,
        matrix: Option<&CipherMatrix>,
    ) -> Result<String> {
        let matrix = self.resolve_matrix(key, matrix)?;
        let letters = self.normalize_text(plain_text);
        let padded = pad_digraphs(&letters)?;
        let digraphs = split_digraphs(&padded)?;
        let cipher = transform(&digraphs, &matrix, Direction::Encrypt)?;
        Ok(join_digraphs(&cipher))
    }

    /// Decrypts `cipher_text` and restores spaces and digits. Filler letters
    /// added during encryption stay in the output.
    pub fn decrypt(
        &self,
        key: &str,
        cipher_text: &str,
        matrix: Option<&CipherMatrix>,
    ) -> Result<String> {
        let matrix = self.resolve_matrix(key, matrix)?;
        let compact: String = cipher_text
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| ch.to_ascii_uppercase())
            .collect();
        if compact.is_empty() {
            return Err(CipherError::EmptyMessage);
        }
        let digraphs = split_digraphs(&compact)?;
        if let Some(bad) = compact.chars().find(|&ch| !self.language.is_valid_letter(ch)) {
            return Err(CipherError::InvalidCiphertextChar(bad, self.language));
        }
        let plain = transform(&digraphs, &matrix, Direction::Decrypt)?;
        Ok(decode_markers(&join_digraphs(&plain)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn monarchy() -> CipherMatrix {
        CipherMatrix::from_key("MONARCHY", Language::English)
    }

    fn run(pairs: &str, direction: Direction) -> String {
        let digraphs = split_digraphs(pairs).unwrap();
        join_digraphs(&transform(&digraphs, &monarchy(), direction).unwrap())
    }

    #[test]
    fn row_rule_shifts_right_and_wraps() {
        // M O N A R
        assert_eq!(run("MO", Direction::Encrypt), "ON");
        assert_eq!(run("AR", Direction::Encrypt), "RM");
        assert_eq!(run("RM", Direction::Decrypt), "AR");
    }

    #[test]
    fn column_rule_shifts_down_and_wraps() {
        // column 0: M C E L U
        assert_eq!(run("MC", Direction::Encrypt), "CE");
        assert_eq!(run("LU", Direction::Encrypt), "UM");
        assert_eq!(run("UM", Direction::Decrypt), "LU");
    }

    #[test]
    fn rectangle_rule_swaps_columns() {
        assert_eq!(run("MH", Direction::Encrypt), "OC");
        assert_eq!(run("OC", Direction::Decrypt), "MH");
        assert_eq!(run("OC", Direction::Encrypt), "MH");
    }

    #[test]
    fn missing_letter_is_reported() {
        let digraphs = [Digraph('J', 'A')];
        assert_eq!(
            transform(&digraphs, &monarchy(), Direction::Encrypt),
            Err(CipherError::LetterNotFound('J'))
        );
    }

    #[test]
    fn encrypts_reference_message() {
        let cipher = Playfair::new(Language::English);
        assert_eq!(
            cipher.encrypt("Gravity Falls", "Attack at dawn!", None).unwrap(),
            "GFFGBMZLNIDHWVLQHZRDOVNFAW"
        );
    }

    #[test]
    fn reuses_supplied_matrix() {
        let cipher = Playfair::new(Language::English);
        let matrix = cipher.matrix("Gravity Falls");
        assert_eq!(
            cipher
                .encrypt("ignored", "Attack at dawn!", Some(&matrix))
                .unwrap(),
            "GFFGBMZLNIDHWVLQHZRDOVNFAW"
        );
        assert_eq!(
            cipher
                .decrypt("ignored", "GFFGB MZLNI DHWVL QHZRD OVNFA W", Some(&matrix))
                .unwrap(),
            "ATTACK AT DAWN"
        );
    }

    #[test]
    fn decrypt_accepts_lowercase_and_newlines() {
        let cipher = Playfair::new(Language::English);
        assert_eq!(
            cipher
                .decrypt("Gravity Falls", "gffgb mzlni\ndhwvl\tqhzrd ovnfa w", None)
                .unwrap(),
            "ATTACK AT DAWN"
        );
    }

    #[test]
    fn decrypt_rejects_odd_and_empty_input() {
        let cipher = Playfair::new(Language::English);
        assert_eq!(
            cipher.decrypt("key", "ABC", None),
            Err(CipherError::OddLengthCiphertext(3))
        );
        assert_eq!(
            cipher.decrypt("key", " \n ", None),
            Err(CipherError::EmptyMessage)
        );
    }

    #[test]
    fn encrypt_rejects_message_without_letters() {
        let cipher = Playfair::new(Language::English);
        assert_eq!(
            cipher.encrypt("key", "?!", None),
            Err(CipherError::EmptyMessage)
        );
    }

    #[test]
    fn decrypt_names_invalid_ciphertext_char() {
        let cipher = Playfair::new(Language::English);
        assert_eq!(
            cipher.decrypt("Monarchy", "JA", None),
            Err(CipherError::InvalidCiphertextChar('J', Language::English))
        );
        assert_eq!(
            cipher.decrypt("Monarchy", "ÁB", None),
            Err(CipherError::InvalidCiphertextChar('Á', Language::English))
        );
        let err = cipher.decrypt("Monarchy", "A1", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cipher text contains '1', which is not a letter of the en matrix"
        );
        assert_eq!(
            Playfair::new(Language::Czech).decrypt("Monarchie", "QA", None),
            Err(CipherError::InvalidCiphertextChar('Q', Language::Czech))
        );
    }

    #[test]
    fn supplied_matrix_must_match_language() {
        let czech = Playfair::new(Language::Czech).matrix("Monarchie");
        let english = Playfair::new(Language::English);
        let expected = Err(CipherError::LanguageMismatch {
            cipher: Language::English,
            matrix: Language::Czech,
        });
        assert_eq!(english.encrypt("Monarchie", "Quiz", Some(&czech)), expected);
        assert_eq!(english.decrypt("Monarchie", "ABCD", Some(&czech)), expected);
    }

    /// Maps `ß` to `SS` and records every input it sees.
    #[derive(Debug, Default)]
    struct RecordingTranslit {
        seen: std::sync::Mutex<Vec<String>>,
    }

    impl Transliterate for RecordingTranslit {
        fn to_ascii(&self, text: &str) -> String {
            self.seen.lock().unwrap().push(text.to_string());
            text.replace('ß', "SS")
        }
    }

    #[test]
    fn custom_transliterator_sees_key_and_text() {
        let cipher =
            Playfair::with_transliterator(Language::English, RecordingTranslit::default());
        assert_eq!(cipher.normalize_key("Weiß"), "WEIS");
        assert_eq!(cipher.normalize_text("Straße"), "STRASSE");

        let encrypted = cipher.encrypt("Weiß", "Straße", None).unwrap();
        assert_eq!(
            encrypted,
            Playfair::new(Language::English)
                .encrypt("WEISS", "STRASSE", None)
                .unwrap()
        );
        assert_eq!(cipher.decrypt("Weiß", &encrypted, None).unwrap(), "STRASWSE");

        let seen = cipher.translit.seen.lock().unwrap();
        assert!(seen.iter().filter(|s| s.as_str() == "Weiß").count() >= 2);
        assert!(seen.iter().any(|s| s == "Straße"));
    }

    #[test]
    fn cipher_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CipherMatrix>();
        assert_send_sync::<Playfair>();
    }

    proptest! {
        #[test]
        fn decrypt_inverts_encrypt_per_digraph(
            key in "[A-Z]{0,12}",
            text in "[A-IK-Z]{1,40}",
        ) {
            let matrix = CipherMatrix::from_key(&key, Language::English);
            let padded = pad_digraphs(&text).unwrap();
            let digraphs = split_digraphs(&padded).unwrap();
            let encrypted = transform(&digraphs, &matrix, Direction::Encrypt).unwrap();
            let decrypted = transform(&encrypted, &matrix, Direction::Decrypt).unwrap();
            prop_assert_eq!(decrypted, digraphs);
        }
    }
}
