//! Items that can be scored, and the result of scoring them.

use std::cmp::Ordering;
use std::fmt::{self, Display};

use crate::fuzzy_matcher::ScoreType;

//------------------------------------------------------------------------------
/// A searchable entry: a display name plus alternative names it should also be found by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    name: String,
    aliases: Vec<String>,
}

impl Candidate {
    /// Creates a candidate without aliases
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    /// Sets the aliases of the candidate
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// The name, used for display and as the start of the scored text
    pub fn text(&self) -> &str {
        &self.name
    }

    /// The aliases, appended to the name when scoring
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }
}

impl From<&str> for Candidate {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Candidate {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

//------------------------------------------------------------------------------
/// A candidate that passed the score threshold
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedItem<'a> {
    /// Position of the candidate in the input
    pub index: usize,
    /// Score in `(0, 1]`
    pub score: ScoreType,
    /// The candidate itself
    pub candidate: &'a Candidate,
}

impl MatchedItem<'_> {
    /// Best score first, then input order.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.index.cmp(&other.index))
    }
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_candidate() {
        let candidate = Candidate::new("Torpedo").with_aliases(["torp", "boat"]);
        assert_eq!("Torpedo", candidate.text());
        assert_eq!(&["torp".to_string(), "boat".to_string()], candidate.aliases());
        assert_eq!("Torpedo", candidate.to_string());
        assert_eq!(Candidate::new("x"), Candidate::from("x"));
    }

    #[test]
    fn test_rank_cmp() {
        let a = Candidate::new("a");
        let b = Candidate::new("b");
        let first = MatchedItem {
            index: 3,
            score: 0.9,
            candidate: &a,
        };
        let second = MatchedItem {
            index: 0,
            score: 0.5,
            candidate: &b,
        };
        let tied = MatchedItem {
            index: 5,
            score: 0.9,
            candidate: &b,
        };
        assert_eq!(Ordering::Less, first.rank_cmp(&second));
        assert_eq!(Ordering::Less, first.rank_cmp(&tied));
        assert_eq!(Ordering::Greater, second.rank_cmp(&tied));
    }
}
