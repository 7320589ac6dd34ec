//! The interactive guess/feedback loop.
//!
//! Each turn the session prints the solver's guess and reads feedback lines
//! until one parses. Bad lines are reported and re-prompted without touching
//! the game state.

use crate::feedback::GuessFeedback;
use crate::solver::WordleSolver;
use std::io::{self, BufRead, Write};

/// Below this many remaining answers, the session lists them each turn.
pub const LIST_REMAINING_BELOW: usize = 100;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All-exact feedback was entered after this many guesses.
    Solved(usize),
    /// The feedback entered rules out every answer.
    NoCandidates,
    /// Input ran out before the game finished.
    EndOfInput,
}

pub struct Session {
    solver: WordleSolver,
}

impl Session {
    pub fn new(solver: WordleSolver) -> Self {
        Self { solver }
    }

    pub fn solver(&self) -> &WordleSolver {
        &self.solver
    }

    pub fn run(&mut self, mut input: impl BufRead, mut output: impl Write) -> io::Result<Outcome> {
        let mut turn = 0;
        loop {
            let remaining = self.solver.possible_answers();
            if !self.solver.filter().is_empty() && remaining.len() < LIST_REMAINING_BELOW {
                writeln!(output, "possible solutions:")?;
                for word in &remaining {
                    writeln!(output, "{word}")?;
                }
            }

            let analysis = match self.solver.find_best_guess() {
                Some(analysis) => analysis,
                None => {
                    writeln!(output, "no possible answers remain")?;
                    return Ok(Outcome::NoCandidates);
                }
            };
            turn += 1;
            writeln!(output, "guess: {}", analysis.word)?;

            let feedback = loop {
                write!(output, "feedback: ")?;
                output.flush()?;

                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    return Ok(Outcome::EndOfInput);
                }
                let tokens = line.trim().to_lowercase();
                match GuessFeedback::parse(&analysis.word, &tokens) {
                    Ok(feedback) => break feedback,
                    Err(e) => {
                        log::debug!("rejected feedback {tokens:?}: {e}");
                        writeln!(output, "invalid feedback!")?;
                    }
                }
            };

            if feedback.code().is_win() {
                writeln!(output, "solved in {turn} guesses")?;
                return Ok(Outcome::Solved(turn));
            }
            self.solver.apply_feedback(feedback);
        }
    }
}
