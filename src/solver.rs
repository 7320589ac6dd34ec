//! A solver owning its vocabulary and the live game state.
//!
//! [`WordleSolver`] ties a [`Vocabulary`] to the [`CandidateFilter`] of the
//! game in progress and drives the [`GuessSelector`]. It also plays whole
//! games against a known answer, which the benchmark runs over every answer
//! in parallel.

use crate::feedback::{FeedbackCode, GuessFeedback};
use crate::filter::CandidateFilter;
use crate::selector::{GuessAnalysis, GuessSelector};
use crate::vocabulary::Vocabulary;
use crate::word::Word;
use rayon::prelude::*;

/// Upper bound on turns in a self-played game.
pub const MAX_GUESSES: usize = 10;

/// Guesses allowed by the real game; longer games count as failures.
pub const GAME_GUESSES: usize = 6;

/// The main solver
#[derive(Debug, Clone)]
pub struct WordleSolver {
    vocabulary: Vocabulary,
    filter: CandidateFilter,
}

impl WordleSolver {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            filter: CandidateFilter::new(),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn filter(&self) -> &CandidateFilter {
        &self.filter
    }

    pub fn possible_answers(&self) -> Vec<Word> {
        self.filter
            .possible(self.vocabulary.answers())
            .copied()
            .collect()
    }

    pub fn remaining_count(&self) -> usize {
        self.filter.count_possible(self.vocabulary.answers())
    }

    pub fn is_possible(&self, word: &Word) -> bool {
        self.filter.is_possible(word)
    }

    pub fn reset(&mut self) {
        self.filter.clear();
    }

    pub fn apply_feedback(&mut self, feedback: GuessFeedback) {
        log::trace!("accepted {feedback}");
        self.filter.push(feedback);
    }

    pub fn find_best_guess(&mut self) -> Option<GuessAnalysis> {
        let selector = GuessSelector::new(self.vocabulary.guesses(), self.vocabulary.answers());
        selector.select(&mut self.filter)
    }

    pub fn get_top_guesses(&mut self, n: usize) -> Vec<GuessAnalysis> {
        let selector = GuessSelector::new(self.vocabulary.guesses(), self.vocabulary.answers());
        selector.rank(&mut self.filter, n)
    }

    /// Play a game, given a function that provides feedback for each guess.
    /// Returns the sequence of guesses made
    pub fn solve_with_feedback<F>(&mut self, mut get_feedback: F) -> Vec<(Word, FeedbackCode)>
    where
        F: FnMut(&Word) -> FeedbackCode,
    {
        let mut guesses = Vec::new();

        for _ in 0..MAX_GUESSES {
            let best = match self.find_best_guess() {
                Some(g) => g,
                None => break,
            };

            let code = get_feedback(&best.word);
            guesses.push((best.word, code));

            if code.is_win() {
                break;
            }

            self.apply_feedback(GuessFeedback::new(best.word, code));
        }

        guesses
    }

    /// Solve a puzzle knowing the target word (for testing/benchmarking)
    pub fn solve_for_target(&mut self, target: &Word) -> Vec<(Word, FeedbackCode)> {
        self.solve_with_feedback(|guess| FeedbackCode::compute(guess, target))
    }

    /// Play every answer (or the first `limit`) from a fresh state.
    ///
    /// Games are independent, so they run on the rayon pool, each on its
    /// own copy of the solver. Results come back in answer order.
    pub fn benchmark_guess_distribution(&self, limit: Option<usize>) -> BenchmarkReport {
        let targets = self.vocabulary.answers();
        let targets = &targets[..limit.unwrap_or(targets.len()).min(targets.len())];

        let fresh = Self::new(self.vocabulary.clone());
        let guess_counts: Vec<Option<usize>> = targets
            .par_iter()
            .map(|target| {
                let mut solver = fresh.clone();
                let guesses = solver.solve_for_target(target);
                match guesses.last() {
                    Some((_, code)) if code.is_win() => Some(guesses.len()),
                    _ => None,
                }
            })
            .collect();

        BenchmarkReport::from_counts(&guess_counts)
    }
}

/// Outcome of playing many games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchmarkReport {
    /// `(guesses, games)` pairs for every guess count that occurred.
    pub distribution: Vec<(usize, usize)>,
    /// Games not won within [`MAX_GUESSES`].
    pub unsolved: usize,
    pub games: usize,
}

impl BenchmarkReport {
    fn from_counts(counts: &[Option<usize>]) -> Self {
        let mut distribution = vec![0usize; MAX_GUESSES + 1];
        let mut unsolved = 0;
        for count in counts {
            match count {
                Some(n) => distribution[*n] += 1,
                None => unsolved += 1,
            }
        }

        Self {
            distribution: distribution
                .into_iter()
                .enumerate()
                .filter(|(_, count)| *count > 0)
                .collect(),
            unsolved,
            games: counts.len(),
        }
    }

    pub fn solved(&self) -> usize {
        self.games - self.unsolved
    }

    /// Average guesses over the games that were solved.
    pub fn average(&self) -> f64 {
        let total: usize = self.distribution.iter().map(|(g, c)| g * c).sum();
        if self.solved() == 0 {
            0.0
        } else {
            total as f64 / self.solved() as f64
        }
    }

    /// Solved games that took more than the real game allows.
    pub fn over_limit(&self) -> usize {
        self.distribution
            .iter()
            .filter(|(g, _)| *g > GAME_GUESSES)
            .map(|(_, c)| c)
            .sum()
    }
}
