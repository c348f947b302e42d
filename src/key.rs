use crate::language::{Language, normalize_language_chars};
use crate::translit::Transliterate;

/// Reduces a raw key to the letters that seed the cipher matrix.
///
/// Steps run in a fixed order: transliterate, uppercase, keep ASCII letters,
/// drop repeated letters (first occurrence wins), then fold the language's
/// omitted letter. Folding runs last, so the result can still contain a
/// repeat (`QUASIMODO` becomes `OUASIMOD` in Czech); the matrix builder
/// removes it.
pub fn normalize_key<T: Transliterate + ?Sized>(
    translit: &T,
    key: &str,
    language: Language,
) -> String {
    let ascii = translit.to_ascii(key).to_ascii_uppercase();
    let mut unique = String::with_capacity(ascii.len());
    for ch in ascii.chars().filter(char::is_ascii_alphabetic) {
        if !unique.contains(ch) {
            unique.push(ch);
        }
    }
    normalize_language_chars(&unique, language)
}
