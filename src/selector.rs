//! Guess selection by partition cost.
//!
//! Every guess in the vocabulary splits the answers that are still possible
//! into classes by the feedback it would receive. For each class the
//! selector adds the class size times the number of answers left once that
//! feedback is accepted, and plays the guess whose sum is smallest. Ties go
//! to the guess seen first in vocabulary order.

use crate::feedback::{FeedbackCode, GuessFeedback};
use crate::filter::CandidateFilter;
use crate::word::Word;

/// The first guess, played while no feedback has been received.
///
/// Searching the opening position means partitioning every answer for every
/// guess, so this word was computed once offline and is not derived here.
pub const OPENING_GUESS: &str = "roate";

/// Remaining-answer count at or below which a remaining answer is played
/// directly instead of searching.
pub const SHORT_CIRCUIT_REMAINING: usize = 2;

/// Result of analyzing a potential guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessAnalysis {
    pub word: Word,
    /// Partition cost, `None` when the word was picked without a search.
    pub cost: Option<u64>,
    /// Answers still possible before this guess is played.
    pub remaining: usize,
    pub is_possible_answer: bool,
}

/// Picks guesses from a fixed guess and answer vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct GuessSelector<'a> {
    guesses: &'a [Word],
    answers: &'a [Word],
}

impl<'a> GuessSelector<'a> {
    pub fn new(guesses: &'a [Word], answers: &'a [Word]) -> Self {
        Self { guesses, answers }
    }

    pub fn opening_guess() -> Word {
        // The constant is a valid lowercase five letter word.
        Word::new(OPENING_GUESS).unwrap_or_else(|e| unreachable!("bad opening guess: {e}"))
    }

    /// The next guess for the constraints in `filter`.
    ///
    /// Returns `None` only when no answer is consistent with the feedback,
    /// which means the feedback entered was contradictory. `filter` is
    /// borrowed mutably to try out hypothetical feedback; it is left with
    /// the same constraints it came in with.
    pub fn select(&self, filter: &mut CandidateFilter) -> Option<GuessAnalysis> {
        if filter.is_empty() {
            let word = Self::opening_guess();
            return Some(GuessAnalysis {
                word,
                cost: None,
                remaining: self.answers.len(),
                is_possible_answer: self.answers.contains(&word),
            });
        }

        let remaining: Vec<Word> = filter.possible(self.answers).copied().collect();
        log::debug!(
            "{} of {} answers possible after {} guesses",
            remaining.len(),
            self.answers.len(),
            filter.len()
        );

        let first = *remaining.first()?;
        if remaining.len() <= SHORT_CIRCUIT_REMAINING {
            return Some(GuessAnalysis {
                word: first,
                cost: None,
                remaining: remaining.len(),
                is_possible_answer: true,
            });
        }

        let mut best: Option<(Word, u64)> = None;
        for guess in self.guesses {
            let cost = self.score(guess, filter, &remaining);
            if best.map_or(true, |(_, least)| cost < least) {
                best = Some((*guess, cost));
            }
        }

        let (word, cost) = best?;
        log::debug!("selected {word} with cost {cost}");
        Some(GuessAnalysis {
            word,
            cost: Some(cost),
            remaining: remaining.len(),
            is_possible_answer: remaining.contains(&word),
        })
    }

    /// Partition cost of playing `guess` when `remaining` are the answers
    /// still possible under `filter`.
    ///
    /// For each feedback class the hypothetical feedback is pushed onto
    /// `filter`, the answers still possible are counted, and the feedback is
    /// popped again.
    pub fn score(&self, guess: &Word, filter: &mut CandidateFilter, remaining: &[Word]) -> u64 {
        let mut counts = [0u64; FeedbackCode::TABLE_SIZE];
        for solution in remaining {
            counts[FeedbackCode::compute(guess, solution).0 as usize] += 1;
        }

        let mut total = 0u64;
        for (code, &count) in counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let hypothetical = GuessFeedback::new(*guess, FeedbackCode(code as u16));
            let narrowed = filter.scoped(hypothetical).count_possible(self.answers) as u64;
            total += count * narrowed;
        }
        total
    }

    /// The `n` cheapest guesses for the constraints in `filter`.
    ///
    /// Unlike [`select`](Self::select) this always searches, even with no
    /// feedback yet or very few answers left. Equal costs keep vocabulary
    /// order, so the first entry is the guess a search would select.
    pub fn rank(&self, filter: &mut CandidateFilter, n: usize) -> Vec<GuessAnalysis> {
        let remaining: Vec<Word> = filter.possible(self.answers).copied().collect();
        if remaining.is_empty() {
            return vec![];
        }

        let mut analyses: Vec<GuessAnalysis> = self
            .guesses
            .iter()
            .map(|guess| GuessAnalysis {
                word: *guess,
                cost: Some(self.score(guess, filter, &remaining)),
                remaining: remaining.len(),
                is_possible_answer: remaining.contains(guess),
            })
            .collect();

        // Stable, so ties stay in vocabulary order.
        analyses.sort_by_key(|a| a.cost);
        analyses.truncate(n);
        analyses
    }
}
