use crate::error::{CipherError, Result};

/// Inserts a single space after every `n` characters.
///
/// Display formatting only; [`decrypt`](crate::decrypt) strips the spaces again.
pub fn group_characters(text: &str, n: usize) -> Result<String> {
    if n == 0 {
        return Err(CipherError::InvalidGroupSize(n));
    }
    let chars: Vec<char> = text.chars().collect();
    Ok(chars
        .chunks(n)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" "))
}
