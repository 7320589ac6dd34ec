//! Fixed-length words with constant-time letter membership.

use crate::error::WordError;
use crate::{ALPHABET_SIZE, WORD_LENGTH};
use std::fmt;
use std::str::FromStr;

/// An immutable five letter word over `a..=z`.
///
/// Alongside the letters, each word keeps a bitmap per alphabet letter of the
/// positions where that letter occurs, so "does the word contain x" is a
/// single array lookup.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    // Field order matters: derived comparisons look at the letters first and
    // the bitmap is a pure function of them.
    letters: [u8; WORD_LENGTH],
    presence: [u8; ALPHABET_SIZE],
}

impl Word {
    pub fn new(text: &str) -> Result<Self, WordError> {
        let found = text.chars().count();
        if found != WORD_LENGTH {
            return Err(WordError::InvalidLength {
                expected: WORD_LENGTH,
                found,
            });
        }

        let mut letters = [0u8; WORD_LENGTH];
        let mut presence = [0u8; ALPHABET_SIZE];
        for (i, c) in text.chars().enumerate() {
            let index = letter_index(c)?;
            letters[i] = c as u8;
            presence[index] |= 1 << i;
        }

        Ok(Self { letters, presence })
    }

    /// The letter at a 0-based position. Panics if `position >= WORD_LENGTH`.
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Whether `letter` occurs anywhere in the word.
    pub fn contains_letter(&self, letter: char) -> Result<bool, WordError> {
        Ok(self.presence[letter_index(letter)?] != 0)
    }

    /// Membership test on a byte taken from another validated word.
    #[inline]
    pub(crate) fn contains(&self, letter: u8) -> bool {
        self.presence[(letter - b'a') as usize] != 0
    }

    pub fn as_str(&self) -> &str {
        // Only bytes in b'a'..=b'z' are ever stored.
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }
}

fn letter_index(c: char) -> Result<usize, WordError> {
    if c.is_ascii_lowercase() {
        Ok((c as u8 - b'a') as usize)
    } else {
        Err(WordError::InvalidLetter(c))
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self.as_str())
    }
}
