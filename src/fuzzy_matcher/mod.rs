//! Fuzzy scoring algorithms.
//!
//! A matcher turns a `(choice, pattern)` pair into a score in `[0, 1]`, where
//! `0` means the pattern does not match the choice at all.

/// Command palette scoring (recursive subsequence matching with memoization)
pub mod command_score;
#[cfg(test)]
mod util;

/// Score produced by a [`FuzzyMatcher`], always within `[0, 1]`
pub type ScoreType = f64;

/// Trait for fuzzy matching text patterns against choices
pub trait FuzzyMatcher: Send + Sync {
    /// Score `choice` (followed by its `aliases`) against `pattern`.
    ///
    /// Returns `0.0` when `pattern` cannot be found in order inside the choice.
    fn fuzzy_score(&self, choice: &str, pattern: &str, aliases: &[String]) -> ScoreType;

    /// fuzzy match choice with pattern, and return the score of matching, or `None` if the score
    /// is zero
    fn fuzzy_match(&self, choice: &str, pattern: &str) -> Option<ScoreType> {
        let score = self.fuzzy_score(choice, pattern, &[]);
        (score > 0.0).then_some(score)
    }
}
