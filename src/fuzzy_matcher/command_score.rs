//! Command palette scoring, in the spirit of the `command-score` algorithm used by cmdk.
//!
//! The pattern is treated as an abbreviation of the choice: its characters must appear in
//! order (case-insensitively), but not necessarily next to each other. Every way of laying the
//! abbreviation over the choice is explored recursively and the best one wins. A layout is
//! worth the product of the weights of the jumps it makes:
//! - continuing right after the previous match costs nothing,
//! - jumping to the start of a word (after a space or `-`) is cheap,
//! - jumping after punctuation such as `/`, `_` or `.` is a bit more expensive,
//! - jumping into the middle of a word is very expensive.
//!
//! Skipped characters, case mismatches and unconsumed trailing text add small penalties, and
//! a swapped pair of letters is forgiven at a fixed cost.
//!
//! # Example:
//! ```
//! use command_score::fuzzy_matcher::command_score::command_score;
//!
//! let no_aliases: &[&str] = &[];
//! assert_eq!(1.0, command_score("foobar", "foobar", no_aliases));
//! assert_eq!(0.0, command_score("abc", "xyz", no_aliases));
//! assert!(command_score("foo bar", "fb", no_aliases) > command_score("fobar", "fb", no_aliases));
//! assert!(command_score("Widget", "gad", &["gadget"]) > 0.0);
//! ```

use crate::fuzzy_matcher::{FuzzyMatcher, ScoreType};

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

/// The match directly follows the previous one
pub const CONTINUE_MATCH: ScoreType = 1.0;
/// The match starts a word after whitespace or `-`
pub const SPACE_WORD_JUMP: ScoreType = 0.9;
/// The match starts a word after punctuation such as `/`, `_`, `.` or `(`
pub const NON_SPACE_WORD_JUMP: ScoreType = 0.8;
/// The match jumps into the middle of a word
pub const CHARACTER_JUMP: ScoreType = 0.17;
/// Two pattern characters were swapped, or one was typed twice
pub const TRANSPOSITION: ScoreType = 0.1;

// ---------------------------------------------------------------------------
// Penalties
// ---------------------------------------------------------------------------

/// Applied once per skipped character (or skipped word break) when jumping
pub const SKIPPED: ScoreType = 0.999;
/// The characters only match case-insensitively
pub const CASE_MISMATCH: ScoreType = 0.9999;
/// The whole pattern matched but the choice has trailing characters left
pub const NOT_COMPLETE: ScoreType = 0.99;

// ---------------------------------------------------------------------------
// Character classes
// ---------------------------------------------------------------------------

/// Punctuation that separates words without being whitespace
#[inline]
fn is_gap(ch: char) -> bool {
    matches!(
        ch,
        '\\' | '/' | '_' | '+' | '.' | '#' | '"' | '@' | '[' | '(' | '{' | '&'
    )
}

/// Whitespace or `-`. NEL (U+0085) is not a word break.
#[inline]
fn is_space(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{feff}' || ch == '-'
}

/// One char in, one char out, so positions stay aligned with the original string.
#[inline]
fn to_lower(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

fn format_input(chars: &[char]) -> Vec<char> {
    chars
        .iter()
        .map(|&ch| if is_space(ch) { ' ' } else { to_lower(ch) })
        .collect()
}

// ---------------------------------------------------------------------------
// Core
// ---------------------------------------------------------------------------

/// State of one scoring call. The memo table is indexed by
/// `string_index * abbreviation.len() + abbreviation_index`.
struct Scorer<'a> {
    string: &'a [char],
    abbreviation: &'a [char],
    lower_string: Vec<char>,
    lower_abbreviation: Vec<char>,
    memo: Vec<Option<ScoreType>>,
}

impl<'a> Scorer<'a> {
    fn new(string: &'a [char], abbreviation: &'a [char]) -> Self {
        Self {
            string,
            abbreviation,
            lower_string: format_input(string),
            lower_abbreviation: format_input(abbreviation),
            memo: Vec::new(),
        }
    }

    /// Scores the whole query. The memo table is only allocated once the first query
    /// character is known to occur in the string.
    fn run(mut self) -> ScoreType {
        if let Some(&first) = self.lower_abbreviation.first()
            && !self.lower_string.contains(&first)
        {
            return 0.0;
        }
        self.memo = vec![None; (self.string.len() + 1) * self.abbreviation.len()];
        self.score(0, 0)
    }

    /// Position of the next `ch` in the lower-cased string, starting at `from`.
    #[inline]
    fn find(&self, ch: char, from: usize) -> Option<usize> {
        self.lower_string
            .get(from..)?
            .iter()
            .position(|&c| c == ch)
            .map(|offset| from + offset)
    }

    fn count_in_skipped(&self, from: usize, to: usize, class: fn(char) -> bool) -> ScoreType {
        self.string[from..to].iter().filter(|&&ch| class(ch)).count() as ScoreType
    }

    /// Best score for matching `abbreviation[abbreviation_index..]` inside
    /// `string[string_index..]`.
    fn score(&mut self, string_index: usize, abbreviation_index: usize) -> ScoreType {
        if abbreviation_index >= self.abbreviation.len() {
            return if string_index == self.string.len() {
                CONTINUE_MATCH
            } else {
                NOT_COMPLETE
            };
        }

        let memo_key = string_index * self.abbreviation.len() + abbreviation_index;
        if let Some(score) = self.memo[memo_key] {
            return score;
        }

        let abbreviation_char = self.lower_abbreviation[abbreviation_index];
        let next_abbreviation_char = self.lower_abbreviation.get(abbreviation_index + 1).copied();
        let mut high_score = 0.0;
        let mut candidate = self.find(abbreviation_char, string_index);

        while let Some(index) = candidate {
            let mut score = self.score(index + 1, abbreviation_index + 1);

            // jump weights only matter for a path that can still win
            if score > high_score {
                if index == string_index {
                    score *= CONTINUE_MATCH;
                } else if is_gap(self.string[index - 1]) {
                    score *= NON_SPACE_WORD_JUMP;
                    if string_index > 0 {
                        let word_breaks = self.count_in_skipped(string_index, index - 1, is_gap);
                        score *= SKIPPED.powf(word_breaks);
                    }
                } else if is_space(self.string[index - 1]) {
                    score *= SPACE_WORD_JUMP;
                    if string_index > 0 {
                        let space_breaks = self.count_in_skipped(string_index, index - 1, is_space);
                        score *= SKIPPED.powf(space_breaks);
                    }
                } else {
                    score *= CHARACTER_JUMP;
                    if string_index > 0 {
                        score *= SKIPPED.powf((index - string_index) as ScoreType);
                    }
                }

                if self.string[index] != self.abbreviation[abbreviation_index] {
                    score *= CASE_MISMATCH;
                }
            }

            // transposed ("teh") or doubled ("foo" typed as "fooo") characters
            let previous_char = index.checked_sub(1).map(|i| self.lower_string[i]);
            if (score < TRANSPOSITION && previous_char == next_abbreviation_char)
                || (next_abbreviation_char == Some(abbreviation_char) && previous_char != Some(abbreviation_char))
            {
                let transposed_score = self.score(index + 1, abbreviation_index + 2) * TRANSPOSITION;
                if transposed_score > score {
                    score = transposed_score;
                }
            }

            if score > high_score {
                high_score = score;
            }

            candidate = self.find(abbreviation_char, index + 1);
        }

        self.memo[memo_key] = Some(high_score);
        high_score
    }
}

/// Score how well `query` abbreviates `target`, in `[0, 1]`.
///
/// `aliases` are appended to `target`, each preceded by a single space, so the query may
/// match anywhere across the name and its aliases. The result is `0` when the query's
/// characters cannot be found in order, and `1` only when the query equals the whole
/// target, case included. An empty query scores [`NOT_COMPLETE`] against any non-empty
/// target.
pub fn command_score<S: AsRef<str>>(target: &str, query: &str, aliases: &[S]) -> ScoreType {
    let mut input = String::from(target);
    for alias in aliases {
        input.push(' ');
        input.push_str(alias.as_ref());
    }

    let string: Vec<char> = input.chars().collect();
    let abbreviation: Vec<char> = query.chars().collect();
    Scorer::new(&string, &abbreviation).run()
}

// ---------------------------------------------------------------------------
// Public matcher struct
// ---------------------------------------------------------------------------

/// [`FuzzyMatcher`] backed by [`command_score`].
///
/// Stateless: each call builds its own memo table, so one matcher can be shared across
/// threads freely.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandScoreMatcher;

impl FuzzyMatcher for CommandScoreMatcher {
    fn fuzzy_score(&self, choice: &str, pattern: &str, aliases: &[String]) -> ScoreType {
        command_score(choice, pattern, aliases)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;
    use crate::fuzzy_matcher::util::assert_order;

    const NONE: &[&str] = &[];

    fn score(target: &str, query: &str) -> ScoreType {
        command_score(target, query, NONE)
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(NOT_COMPLETE, score("abc", ""));
        assert_eq!(NOT_COMPLETE, score(" ", ""));
        assert_eq!(CONTINUE_MATCH, score("", ""));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(0.0, score("abc", "xyz"));
        assert_eq!(0.0, score("abc", "abx"));
        assert_eq!(0.0, score("abc", "abcd"));
        assert_eq!(0.0, score("", "a"));
        assert_eq!(0.0, score("cba", "abc"));
    }

    #[test]
    fn test_exact_match_is_max() {
        assert_eq!(1.0, score("foobar", "foobar"));
        assert_eq!(1.0, score("a", "a"));
        assert_eq!(1.0, score("Save Calculator", "Save Calculator"));
        assert_eq!(1.0, score("save-calculator", "save-calculator"));
        assert_eq!(1.0, score("src/lib.rs", "src/lib.rs"));
    }

    #[test]
    fn test_prefix_is_not_complete() {
        assert_eq!(NOT_COMPLETE, score("foobar", "foo"));
        assert_eq!(NOT_COMPLETE, score("foobar", "f"));
    }

    #[test]
    fn test_case_mismatch() {
        assert_eq!(CASE_MISMATCH, score("Foo", "foo"));
        assert_eq!(CASE_MISMATCH * CASE_MISMATCH * CASE_MISMATCH, score("FOO", "foo"));
        assert!(score("Foo", "foo") < score("Foo", "Foo"));
    }

    #[test]
    fn test_space_word_jump() {
        assert_eq!(NOT_COMPLETE * SPACE_WORD_JUMP, score("foo bar", "fb"));
        assert_eq!(NOT_COMPLETE * SPACE_WORD_JUMP, score("foo-bar", "fb"));
    }

    #[test]
    fn test_gap_word_jump() {
        assert_eq!(NOT_COMPLETE * NON_SPACE_WORD_JUMP, score("save_calculator", "sc"));
        assert_eq!(NOT_COMPLETE * NON_SPACE_WORD_JUMP, score("src/lib", "sl"));
    }

    #[test]
    fn test_character_jump() {
        // from the very start no skipped-character penalty applies
        assert_eq!(CHARACTER_JUMP, score("barfoo", "foo"));
        assert_eq!(NOT_COMPLETE * CHARACTER_JUMP * SKIPPED.powf(2.0), score("abcdef", "ad"));
    }

    #[test]
    fn test_skipped_characters_penalty() {
        assert_eq!(CHARACTER_JUMP * SKIPPED.powf(6.0), score("abcdefgh", "ah"));
        assert!((score("AEB aC", "aaA") - 0.0989901).abs() < 1e-12);
    }

    #[test]
    fn test_next_line_is_not_a_space() {
        assert_eq!(CHARACTER_JUMP * SKIPPED, score("a\u{85}b", "ab"));
        assert_eq!(SPACE_WORD_JUMP, score("a\u{a0}b", "ab"));
        assert_eq!(SPACE_WORD_JUMP, score("a\u{feff}b", "ab"));
    }

    #[test]
    fn test_missing_first_char_skips_table() {
        let string: Vec<char> = "x".repeat(1 << 20).chars().collect();
        let abbreviation: Vec<char> = "abcdefghijklmnopqrst".chars().collect();
        let scorer = Scorer::new(&string, &abbreviation);
        assert!(scorer.memo.is_empty());
        assert_eq!(0.0, scorer.run());

        // the check is case-insensitive and sees normalized spaces
        assert_eq!(CASE_MISMATCH * NOT_COMPLETE, score("Xyz", "x"));
        assert!(score("a-b", " b") > 0.0);
    }

    #[test]
    fn test_skipped_word_breaks() {
        let one_break = score("a x b", "ab");
        let two_breaks = score("a x y b", "ab");
        assert!(one_break > two_breaks, "one={one_break} > two={two_breaks}");

        let one_gap = score("a_x_b", "ab");
        let two_gaps = score("a_x_y_b", "ab");
        assert!(one_gap > two_gaps, "one={one_gap} > two={two_gaps}");
    }

    #[test]
    fn test_prefix_beats_later_match() {
        assert!(score("foobar", "foo") > score("barfoo", "foo"));
    }

    #[test]
    fn test_word_start_beats_mid_word() {
        assert!(score("foo bar", "fb") > score("fobar", "fb"));
    }

    #[test]
    fn test_transposition() {
        assert_eq!(TRANSPOSITION, score("the", "teh"));
        assert!(score("calculator", "clacuator") > 0.0);
    }

    #[test]
    fn test_duplicated_character() {
        assert!(score("fo", "foo") > 0.0);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(0.0, command_score("Widget", "gad", NONE));
        assert!(command_score("Widget", "gad", &["gadget"]) > 0.0);
        // name and alias are joined by a single space
        assert_eq!(
            command_score("Widget gadget thing", "gt", NONE),
            command_score("Widget", "gt", &["gadget", "thing"])
        );
        assert_eq!(1.0, command_score("a", "a b", &["b".to_string()]));
    }

    #[test]
    fn test_unicode() {
        let s = score("Crème Brûlée", "crème brûlée");
        assert!(s > 0.0 && s < 1.0);
        assert_eq!(1.0, score("日本語", "日本語"));
        assert_eq!(0.0, score("日本語", "中"));
    }

    #[test]
    fn test_deterministic() {
        let first = score("Torpedo Rims", "trp");
        let second = score("Torpedo Rims", "trp");
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_match_quality_ordering() {
        let matcher = CommandScoreMatcher;
        // Case preference
        assert_order(&matcher, "monad", &["monad", "Monad", "mONAD"]);
        // Word starts
        assert_order(&matcher, "fb", &["foo bar", "foo_bar", "fobar"]);
        // Earlier is better
        assert_order(&matcher, "ab", &["ab", "abc", "x ab", "xab"]);
    }

    #[test]
    fn test_fuzzy_match() {
        let matcher = CommandScoreMatcher;
        assert_eq!(None, matcher.fuzzy_match("abc", "z"));
        assert_eq!(Some(NOT_COMPLETE), matcher.fuzzy_match("abc", "a"));
    }

    #[test]
    fn test_long_input() {
        let target = "ab ".repeat(100);
        let query = "ab".repeat(20);
        let s = score(&target, &query);
        assert!(s > 0.0 && s <= 1.0);
    }
}
