//! Feedback calculation for guesses.
//!
//! This module computes the per-position feedback (exact/present/absent) for a
//! guess against a solution, packs it into a compact code, and checks whether
//! a candidate word could have produced a recorded guess and feedback.
//!
//! Letter presence is judged naively: a letter of the guess that is not an
//! exact match is reported as present whenever the solution contains that
//! letter anywhere, with no accounting for how many times it occurs. Guesses
//! with repeated letters can therefore receive more "present" marks than the
//! real game would give (guess `eerie` against `crane` marks both leading
//! `e`s present). The selector's notion of the best guess depends on this
//! rule, so it is kept as is.

use crate::error::FeedbackError;
use crate::word::Word;
use crate::WORD_LENGTH;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter not in word (gray)
    Absent = 0,
    /// Letter in word but in another position (yellow)
    Present = 1,
    /// Letter in this exact position (green)
    Exact = 2,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Exact => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// The input token for this feedback (r=absent, y=present, g=exact)
    pub fn to_token(self) -> char {
        match self {
            Feedback::Absent => 'r',
            Feedback::Present => 'y',
            Feedback::Exact => 'g',
        }
    }

    /// Parse from an input token
    pub fn from_token(c: char) -> Option<Self> {
        match c {
            'r' => Some(Feedback::Absent),
            'y' => Some(Feedback::Present),
            'g' => Some(Feedback::Exact),
            _ => None,
        }
    }

    fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0 => Feedback::Absent,
            1 => Feedback::Present,
            // 0b11 is never packed
            _ => Feedback::Exact,
        }
    }
}

/// A complete feedback pattern for a 5-letter guess.
/// Each position takes two bits, position `i` at bit offset `2 * i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackCode(pub u16);

impl FeedbackCode {
    /// The code with every position exact, and the largest code ever produced.
    pub const MAX: Self = Self(
        (Feedback::Exact as u16)
            | (Feedback::Exact as u16) << 2
            | (Feedback::Exact as u16) << 4
            | (Feedback::Exact as u16) << 6
            | (Feedback::Exact as u16) << 8,
    );

    /// Size of a table indexed by every code up to and including `MAX`.
    pub const TABLE_SIZE: usize = Self::MAX.0 as usize + 1;

    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let code = feedbacks
            .iter()
            .enumerate()
            .fold(0u16, |acc, (i, &fb)| acc | (fb as u16) << (2 * i));
        Self(code)
    }

    /// Calculate the code `guess` receives when the answer is `solution`.
    pub fn compute(guess: &Word, solution: &Word) -> Self {
        let mut code = 0u16;
        for i in 0..WORD_LENGTH {
            let letter = guess.letter_at(i);
            let fb = if solution.letter_at(i) == letter {
                Feedback::Exact
            } else if solution.contains(letter) {
                Feedback::Present
            } else {
                Feedback::Absent
            };
            code |= (fb as u16) << (2 * i);
        }
        Self(code)
    }

    /// Parse a token string like "gyrrr".
    pub fn parse(tokens: &str) -> Result<Self, FeedbackError> {
        let found = tokens.chars().count();
        if found != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength {
                expected: WORD_LENGTH,
                found,
            });
        }
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for (position, symbol) in tokens.chars().enumerate() {
            feedbacks[position] = Feedback::from_token(symbol)
                .ok_or(FeedbackError::InvalidSymbol { symbol, position })?;
        }
        Ok(Self::new(feedbacks))
    }

    pub fn at(self, position: usize) -> Feedback {
        Feedback::from_bits(self.0 >> (2 * position))
    }

    /// Convert pattern to array of feedbacks
    pub fn feedbacks(self) -> [Feedback; WORD_LENGTH] {
        std::array::from_fn(|i| self.at(i))
    }

    /// The token string that parses back to this code.
    pub fn to_tokens(self) -> String {
        self.feedbacks().iter().map(|f| f.to_token()).collect()
    }

    /// Check if this pattern represents a win (all exact)
    pub fn is_win(self) -> bool {
        self == Self::MAX
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.feedbacks().iter().map(|f| f.to_char()).collect()
    }
}

impl std::fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}

/// An observed guess together with the feedback it received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessFeedback {
    guess: Word,
    code: FeedbackCode,
}

impl GuessFeedback {
    pub fn new(guess: Word, code: FeedbackCode) -> Self {
        Self { guess, code }
    }

    /// Build a constraint from the tokens a player typed for `guess`.
    pub fn parse(guess: &Word, tokens: &str) -> Result<Self, FeedbackError> {
        Ok(Self::new(*guess, FeedbackCode::parse(tokens)?))
    }

    /// The constraint observed when playing `guess` against `solution`.
    pub fn observe(guess: &Word, solution: &Word) -> Self {
        Self::new(*guess, FeedbackCode::compute(guess, solution))
    }

    pub fn guess(&self) -> &Word {
        &self.guess
    }

    pub fn code(&self) -> FeedbackCode {
        self.code
    }

    /// Whether `word` could be the solution given this guess and feedback.
    ///
    /// Mirrors the branches of [`FeedbackCode::compute`] position by position
    /// and stops at the first position that disagrees.
    pub fn is_consistent_with(&self, word: &Word) -> bool {
        for i in 0..WORD_LENGTH {
            let letter = self.guess.letter_at(i);
            let ok = match self.code.at(i) {
                Feedback::Absent => !word.contains(letter),
                Feedback::Present => word.contains(letter) && word.letter_at(i) != letter,
                Feedback::Exact => word.letter_at(i) == letter,
            };
            if !ok {
                return false;
            }
        }
        true
    }
}

impl std::fmt::Display for GuessFeedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.guess, self.code)
    }
}
