//! The stack of accepted feedback and the candidate test built on it.

use crate::feedback::GuessFeedback;
use crate::word::Word;
use std::ops::Deref;

/// Every constraint accepted so far, oldest first.
///
/// A word is a possible answer while it is consistent with all of them.
/// Constraints only ever enter and leave at the tail.
#[derive(Debug, Clone, Default)]
pub struct CandidateFilter {
    constraints: Vec<GuessFeedback>,
}

impl CandidateFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, constraint: GuessFeedback) {
        self.constraints.push(constraint);
    }

    pub fn pop(&mut self) -> Option<GuessFeedback> {
        self.constraints.pop()
    }

    /// Push `constraint` for the lifetime of the returned guard.
    ///
    /// The constraint is popped again when the guard is dropped, whichever
    /// way the caller leaves its scope.
    pub fn scoped(&mut self, constraint: GuessFeedback) -> ScopedConstraint<'_> {
        self.push(constraint);
        ScopedConstraint { filter: self }
    }

    pub fn is_possible(&self, word: &Word) -> bool {
        self.constraints.iter().all(|c| c.is_consistent_with(word))
    }

    pub fn possible<'w>(&'w self, words: &'w [Word]) -> impl Iterator<Item = &'w Word> + 'w {
        words.iter().filter(move |w| self.is_possible(w))
    }

    pub fn count_possible(&self, words: &[Word]) -> usize {
        self.possible(words).count()
    }

    pub fn constraints(&self) -> &[GuessFeedback] {
        &self.constraints
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn clear(&mut self) {
        self.constraints.clear();
    }
}

/// A hypothetical constraint sitting on top of a [`CandidateFilter`].
pub struct ScopedConstraint<'a> {
    filter: &'a mut CandidateFilter,
}

impl Deref for ScopedConstraint<'_> {
    type Target = CandidateFilter;

    fn deref(&self) -> &Self::Target {
        self.filter
    }
}

impl Drop for ScopedConstraint<'_> {
    fn drop(&mut self) {
        self.filter.pop();
    }
}
