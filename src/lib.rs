//! # Wordle Narrow
//!
//! An interactive Wordle solver. Each turn it plays the guess that splits the
//! remaining candidate answers into the smallest total partition cost, then
//! narrows the candidates with the feedback the player reports.

pub mod error;
pub mod feedback;
pub mod filter;
pub mod selector;
pub mod session;
pub mod solver;
pub mod vocabulary;
pub mod word;

pub use error::{FeedbackError, LoadError, WordError};
pub use feedback::{Feedback, FeedbackCode, GuessFeedback};
pub use filter::CandidateFilter;
pub use selector::{GuessAnalysis, GuessSelector, OPENING_GUESS};
pub use session::{Outcome, Session};
pub use solver::{BenchmarkReport, WordleSolver};
pub use vocabulary::Vocabulary;
pub use word::Word;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Letters `a` through `z`
pub const ALPHABET_SIZE: usize = 26;
