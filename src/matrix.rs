use crate::error::{CipherError, Result};
use crate::language::Language;
use serde::{Serialize, Serializer};
use std::fmt;

/// Side length of the square cipher matrix.
pub const SIZE: usize = 5;
const CELLS: usize = SIZE * SIZE;

/// Row/column coordinates of a letter inside a [`CipherMatrix`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Moves along the row by `delta` columns, wrapping around the edge.
    pub fn shift_col(self, delta: isize) -> Self {
        Self {
            row: self.row,
            col: wrap(self.col, delta),
        }
    }

    /// Moves along the column by `delta` rows, wrapping around the edge.
    pub fn shift_row(self, delta: isize) -> Self {
        Self {
            row: wrap(self.row, delta),
            col: self.col,
        }
    }

    pub fn with_col(self, col: usize) -> Self {
        Self { row: self.row, col }
    }
}

fn wrap(value: usize, delta: isize) -> usize {
    (value as isize + delta).rem_euclid(SIZE as isize) as usize
}

/// Reverse lookup from letter to position, built once per matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MatrixIndex {
    slots: [Option<Position>; 26],
}

impl MatrixIndex {
    fn new(cells: &[[char; SIZE]; SIZE]) -> Self {
        let mut slots = [None; 26];
        for (row, letters) in cells.iter().enumerate() {
            for (col, &ch) in letters.iter().enumerate() {
                if let Some(slot) = slot_of(ch) {
                    slots[slot] = Some(Position::new(row, col));
                }
            }
        }
        Self { slots }
    }

    /// Finds the position of `letter`, failing if it is not in the matrix.
    fn locate(&self, letter: char) -> Result<Position> {
        slot_of(letter)
            .and_then(|slot| self.slots[slot])
            .ok_or(CipherError::LetterNotFound(letter))
    }
}

fn slot_of(ch: char) -> Option<usize> {
    ch.is_ascii_uppercase().then(|| (ch as u8 - b'A') as usize)
}

/// 5×5 grid holding each letter of the language-adjusted alphabet once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherMatrix {
    language: Language,
    cells: [[char; SIZE]; SIZE],
    index: MatrixIndex,
}

impl CipherMatrix {
    /// Lays out the key letters followed by the rest of the alphabet, row-major.
    ///
    /// `key` is expected to be normalized already; letters outside the
    /// language's alphabet and repeats are skipped, so an empty key yields
    /// the plain alphabet grid.
    pub fn from_key(key: &str, language: Language) -> Self {
        let mut letters: Vec<char> = Vec::with_capacity(CELLS);
        for ch in key.chars().chain(language.alphabet()) {
            if language.is_valid_letter(ch) && !letters.contains(&ch) {
                letters.push(ch);
            }
        }
        letters.truncate(CELLS);

        let mut cells = [[' '; SIZE]; SIZE];
        for (i, ch) in letters.into_iter().enumerate() {
            cells[i / SIZE][i % SIZE] = ch;
        }
        let index = MatrixIndex::new(&cells);
        Self {
            language,
            cells,
            index,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn rows(&self) -> &[[char; SIZE]; SIZE] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> char {
        self.cells[pos.row][pos.col]
    }

    pub fn locate(&self, letter: char) -> Result<Position> {
        self.index.locate(letter)
    }

    /// All 25 letters in row-major order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }
}

impl fmt::Display for CipherMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, ch) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

impl Serialize for CipherMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let rows: Vec<String> = self
            .cells
            .iter()
            .map(|row| row.iter().collect())
            .collect();
        rows.serialize(serializer)
    }
}
