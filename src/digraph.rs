use crate::error::{CipherError, Result};
use std::fmt;

/// Filler inserted between identical letters and after an odd final letter.
const FILLER: char = 'W';
/// Filler used when the letter being separated is itself [`FILLER`].
const ALT_FILLER: char = 'X';

/// Ordered pair of letters, the unit the substitution rules work on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digraph(pub char, pub char);

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

/// Inserts filler letters so the text splits into digraphs of distinct letters.
///
/// The filler after a repeated letter is only inserted when the output built
/// so far has odd length, i.e. when the repeat would land inside one
/// digraph. Parity is checked against the growing output, not the input
/// index. A trailing single letter is completed with `X`, or `W` if it is
/// already an `X`.
pub fn pad_digraphs(text: &str) -> Result<String> {
    let chars: Vec<char> = text.chars().collect();
    let Some(&last) = chars.last() else {
        return Err(CipherError::EmptyMessage);
    };

    let mut out: Vec<char> = Vec::with_capacity(chars.len() * 2);
    for pair in chars.windows(2) {
        out.push(pair[0]);
        if pair[0] == pair[1] && out.len() % 2 != 0 {
            out.push(if pair[0] != FILLER { FILLER } else { ALT_FILLER });
        }
    }
    out.push(last);

    if out.len() % 2 != 0 {
        out.push(if last != ALT_FILLER { ALT_FILLER } else { FILLER });
    }
    Ok(out.into_iter().collect())
}

/// Splits even-length text into consecutive digraphs without any padding.
pub fn split_digraphs(text: &str) -> Result<Vec<Digraph>> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(CipherError::OddLengthCiphertext(chars.len()));
    }
    Ok(chars
        .chunks_exact(2)
        .map(|pair| Digraph(pair[0], pair[1]))
        .collect())
}

/// Joins digraphs back into a flat string.
pub fn join_digraphs(digraphs: &[Digraph]) -> String {
    let mut out = String::with_capacity(digraphs.len() * 2);
    for Digraph(a, b) in digraphs {
        out.push(*a);
        out.push(*b);
    }
    out
}
