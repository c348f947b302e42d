use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Maps arbitrary Unicode text onto its closest ASCII approximation.
///
/// Implementations must pass ASCII input through unchanged; everything else
/// is a best-effort mapping of accented or foreign letters to plain ones.
pub trait Transliterate {
    fn to_ascii(&self, text: &str) -> String;
}

/// Letters that carry no canonical or compatibility decomposition.
static FOLDS: &[(char, &str)] = &[
    ('Æ', "AE"),
    ('æ', "ae"),
    ('Ð', "D"),
    ('ð', "d"),
    ('Đ', "D"),
    ('đ', "d"),
    ('Ø', "O"),
    ('ø', "o"),
    ('Þ', "TH"),
    ('þ', "th"),
    ('ß', "ss"),
    ('ẞ', "SS"),
    ('Ħ', "H"),
    ('ħ', "h"),
    ('ı', "i"),
    ('Ł', "L"),
    ('ł', "l"),
    ('Œ', "OE"),
    ('œ', "oe"),
    ('Ŧ', "T"),
    ('ŧ', "t"),
];

/// Default transliterator: NFKD decomposition with combining marks removed,
/// plus a fold table for letters that do not decompose. Characters with no
/// ASCII approximation are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiFolding;

impl Transliterate for AsciiFolding {
    fn to_ascii(&self, text: &str) -> String {
        if text.is_ascii() {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len());
        for ch in text.nfkd() {
            if ch.is_ascii() {
                out.push(ch);
            } else if is_combining_mark(ch) {
                continue;
            } else if let Some((_, folded)) = FOLDS.iter().find(|(from, _)| *from == ch) {
                out.push_str(folded);
            }
        }
        out
    }
}

/// Convenience wrapper around [`AsciiFolding`].
pub fn to_ascii_approximation(text: &str) -> String {
    AsciiFolding.to_ascii(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ascii_passes_through() {
        let text = "Attack at 8 AM! ~{}";
        assert_eq!(to_ascii_approximation(text), text);
    }

    #[test]
    fn strips_czech_diacritics() {
        assert_eq!(
            to_ascii_approximation("Příliš žluťoučký kůň"),
            "Prilis zlutoucky kun"
        );
        assert_eq!(to_ascii_approximation("Černá"), "Cerna");
    }

    #[test]
    fn folds_letters_without_decomposition() {
        assert_eq!(to_ascii_approximation("Straße"), "Strasse");
        assert_eq!(to_ascii_approximation("Łódź"), "Lodz");
        assert_eq!(to_ascii_approximation("Ærø"), "AEro");
    }

    #[test]
    fn compatibility_forms_are_decomposed() {
        assert_eq!(to_ascii_approximation("ﬁx²"), "fix2");
        assert_eq!(to_ascii_approximation("a\u{00A0}b"), "a b");
    }

    #[test]
    fn unknown_characters_are_dropped() {
        assert_eq!(to_ascii_approximation("a→b✓"), "ab");
    }
}
