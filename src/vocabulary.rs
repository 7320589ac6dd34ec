//! Loading the guess and answer word lists.

use crate::error::LoadError;
use crate::word::Word;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

/// The words a solver may guess and the words that may be the answer.
///
/// Answers are always legal guesses: the guess list is the loaded guess-only
/// words followed by every answer.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    guesses: Arc<[Word]>,
    answers: Arc<[Word]>,
}

impl Vocabulary {
    pub fn new(guess_only: Vec<Word>, answers: Vec<Word>) -> Self {
        let mut guesses = guess_only;
        guesses.extend_from_slice(&answers);
        Self {
            guesses: guesses.into(),
            answers: answers.into(),
        }
    }

    /// Read both lists from newline-delimited files.
    pub fn load(guesses_path: &Path, answers_path: &Path) -> Result<Self, LoadError> {
        let answers = read_word_file(answers_path)?;
        if answers.is_empty() {
            return Err(LoadError::EmptyAnswers {
                path: answers_path.to_path_buf(),
            });
        }
        let guesses = read_word_file(guesses_path)?;
        log::debug!(
            "loaded {} guess-only words and {} answers",
            guesses.len(),
            answers.len()
        );
        Ok(Self::new(guesses, answers))
    }

    /// Build a vocabulary from in-memory list text, one word per line.
    pub fn from_lists(guesses: &str, answers: &str) -> Result<Self, LoadError> {
        let answers_path = Path::new("<answers>");
        let answers = read_words(answers.as_bytes(), answers_path)?;
        if answers.is_empty() {
            return Err(LoadError::EmptyAnswers {
                path: answers_path.to_path_buf(),
            });
        }
        let guesses = read_words(guesses.as_bytes(), Path::new("<guesses>"))?;
        Ok(Self::new(guesses, answers))
    }

    /// Every word that may be played, guess-only words first.
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    pub fn answers(&self) -> &[Word] {
        &self.answers
    }
}

fn read_word_file(path: &Path) -> Result<Vec<Word>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_words(BufReader::new(file), path)
}

/// Parse one word per line, skipping blank lines. `path` only labels errors.
pub fn read_words(reader: impl BufRead, path: &Path) -> Result<Vec<Word>, LoadError> {
    let mut words = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let word = Word::new(&line.to_lowercase()).map_err(|source| LoadError::InvalidWord {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
        words.push(word);
    }
    Ok(words)
}
