use crate::error::CipherError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Alphabet variant used to build the 25-letter matrix.
///
/// Each language folds one letter of the Latin alphabet into another so that
/// exactly 25 letters remain:
/// - English: `J` is written as `I`
/// - Czech: `Q` is written as `O`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "cs")]
    Czech,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Czech];

    /// Short language code accepted by [`FromStr`].
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Czech => "cs",
        }
    }

    /// Letter that never appears in this language's matrix.
    pub fn omitted_letter(self) -> char {
        match self {
            Language::English => 'J',
            Language::Czech => 'Q',
        }
    }

    /// Letter the omitted one is folded into.
    pub fn replacement_letter(self) -> char {
        match self {
            Language::English => 'I',
            Language::Czech => 'O',
        }
    }

    /// Maps an uppercase letter onto the language-adjusted alphabet.
    pub fn fold(self, ch: char) -> char {
        if ch == self.omitted_letter() {
            self.replacement_letter()
        } else {
            ch
        }
    }

    /// The 25 valid letters, `A..=Z` order with the omitted letter removed.
    pub fn alphabet(self) -> impl Iterator<Item = char> {
        let omitted = self.omitted_letter();
        ('A'..='Z').filter(move |&ch| ch != omitted)
    }

    /// Whether `ch` belongs to the language-adjusted alphabet.
    pub fn is_valid_letter(self, ch: char) -> bool {
        ch.is_ascii_uppercase() && ch != self.omitted_letter()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| CipherError::InvalidLanguage(s.to_string()))
    }
}

/// Replaces the language's omitted letter with its substitute.
///
/// The caller is expected to pass uppercase text; lowercase letters are left
/// untouched.
pub fn normalize_language_chars(text: &str, language: Language) -> String {
    text.chars().map(|ch| language.fold(ch)).collect()
}
