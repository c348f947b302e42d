//! Plaintext normalization and the marker tokens that carry spaces and
//! digits through the letters-only cipher.

use crate::language::{Language, normalize_language_chars};
use crate::translit::Transliterate;

/// Marker tokens in replacement order: space first, then digits `0..=9`.
///
/// No token contains a space, a digit or another token, so replacing them
/// one after another gives the same result as a single pass.
pub const MARKERS: [(char, &str); 11] = [
    (' ', "XSPACEX"),
    ('0', "XZEROX"),
    ('1', "XONEX"),
    ('2', "XTWOX"),
    ('3', "XTHREEX"),
    ('4', "XFOURX"),
    ('5', "XFIVEX"),
    ('6', "XSIXX"),
    ('7', "XSEVENX"),
    ('8', "XEIGHTX"),
    ('9', "XNINEX"),
];

fn marker_for(ch: char) -> Option<&'static str> {
    MARKERS
        .iter()
        .find(|(original, _)| *original == ch)
        .map(|(_, token)| *token)
}

/// Turns a raw message into the uppercase letter stream fed to the cipher.
///
/// Spaces and digits become marker tokens, any other non-letter is dropped
/// and the language's omitted letter is folded.
pub fn normalize_text<T: Transliterate + ?Sized>(
    translit: &T,
    text: &str,
    language: Language,
) -> String {
    let ascii = translit.to_ascii(text).to_ascii_uppercase();
    let mut letters = String::with_capacity(ascii.len());
    for ch in ascii.chars() {
        if let Some(token) = marker_for(ch) {
            letters.push_str(token);
        } else if ch.is_ascii_alphabetic() {
            letters.push(ch);
        }
    }
    normalize_language_chars(&letters, language)
}

/// Replaces marker tokens with the space or digit they stand for.
pub fn decode_markers(text: &str) -> String {
    MARKERS
        .iter()
        .fold(text.to_string(), |acc, (original, token)| {
            acc.replace(*token, &original.to_string())
        })
}
