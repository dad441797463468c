//! This module contains the ranking step: score every candidate, drop the ones that do not
//! match and sort the rest.
use crate::fuzzy_matcher::command_score::CommandScoreMatcher;
use crate::fuzzy_matcher::{FuzzyMatcher, ScoreType};
use crate::item::{Candidate, MatchedItem};
use crate::options::CscoreOptions;

//==============================================================================
/// Scores candidates against a query and orders the matches.
pub struct Ranker {
    matcher: Box<dyn FuzzyMatcher>,
    min_score: ScoreType,
    limit: Option<usize>,
    sort: bool,
    tac: bool,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::builder(Box::new(CommandScoreMatcher))
    }
}

impl Ranker {
    /// Creates a new Ranker builder around the given matcher.
    pub fn builder(matcher: Box<dyn FuzzyMatcher>) -> Self {
        Self {
            matcher,
            min_score: 0.0,
            limit: None,
            sort: true,
            tac: false,
        }
    }

    /// Candidates must score strictly above this to be kept. Zero scores never are.
    pub fn min_score(mut self, min_score: ScoreType) -> Self {
        self.min_score = min_score.max(0.0);
        self
    }

    /// Keeps at most this many matches.
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Sorts matches best first. When disabled, matches keep their input order.
    pub fn sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Reverses the order of the matches, before the limit is applied.
    pub fn tac(mut self, tac: bool) -> Self {
        self.tac = tac;
        self
    }

    /// Finalizes the builder and returns the configured Ranker.
    pub fn build(self) -> Self {
        self
    }

    /// Creates a Ranker configured from the given options.
    pub fn from_options(options: &CscoreOptions) -> Self {
        Ranker::default()
            .min_score(options.min_score)
            .limit(options.limit)
            .sort(!options.no_sort)
            .tac(options.tac)
            .build()
    }

    /// Scores a single candidate, `None` if it does not pass the threshold.
    pub fn score(&self, query: &str, candidate: &Candidate) -> Option<ScoreType> {
        let score = self
            .matcher
            .fuzzy_score(candidate.text(), query, candidate.aliases());
        (score > self.min_score).then_some(score)
    }

    /// Scores every candidate and returns the matching ones, ranked.
    pub fn rank<'a>(&self, query: &str, candidates: &'a [Candidate]) -> Vec<MatchedItem<'a>> {
        trace!("ranker start, total: {}", candidates.len());
        let mut matched: Vec<_> = candidates
            .iter()
            .enumerate()
            .filter_map(|(index, candidate)| {
                self.score(query, candidate).map(|score| MatchedItem {
                    index,
                    score,
                    candidate,
                })
            })
            .collect();
        trace!("ranker stop, total matched: {}", matched.len());

        if self.sort {
            matched.sort_by(|a, b| a.rank_cmp(b));
        }
        if self.tac {
            matched.reverse();
        }
        if let Some(limit) = self.limit {
            matched.truncate(limit);
        }
        matched
    }
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;

    fn candidates(names: &[&str]) -> Vec<Candidate> {
        names.iter().copied().map(Candidate::from).collect()
    }

    fn names<'a>(matched: &[MatchedItem<'a>]) -> Vec<&'a str> {
        matched.iter().map(|item| item.candidate.text()).collect()
    }

    #[test]
    fn test_rank_best_first() {
        let items = candidates(&["fobar", "baz", "foo_bar", "foo bar"]);
        let matched = Ranker::default().rank("fb", &items);
        assert_eq!(vec!["foo bar", "foo_bar", "fobar"], names(&matched));
        assert_eq!(vec![3, 2, 0], matched.iter().map(|m| m.index).collect::<Vec<_>>());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = candidates(&["b", "a", "c"]);
        let matched = Ranker::default().rank("", &items);
        assert_eq!(vec!["b", "a", "c"], names(&matched));
    }

    #[test]
    fn test_aliases_are_scored() {
        let items = vec![
            Candidate::new("Widget").with_aliases(["gadget"]),
            Candidate::new("Sprocket"),
        ];
        let matched = Ranker::default().rank("gad", &items);
        assert_eq!(vec!["Widget"], names(&matched));
    }

    #[test]
    fn test_min_score_limit_tac() {
        let items = candidates(&["fobar", "foo_bar", "foo bar"]);

        let matched = Ranker::default().min_score(0.5).rank("fb", &items);
        assert_eq!(vec!["foo bar", "foo_bar"], names(&matched));

        let matched = Ranker::default().limit(Some(1)).rank("fb", &items);
        assert_eq!(vec!["foo bar"], names(&matched));

        let matched = Ranker::default().tac(true).rank("fb", &items);
        assert_eq!(vec!["fobar", "foo_bar", "foo bar"], names(&matched));

        let matched = Ranker::default().sort(false).rank("fb", &items);
        assert_eq!(vec!["fobar", "foo_bar", "foo bar"], names(&matched));
    }

    #[test]
    fn test_from_options() {
        let options = crate::options::CscoreOptionsBuilder::default()
            .limit(Some(2))
            .no_sort(true)
            .build()
            .unwrap();
        let items = candidates(&["abc", "xyz", "aaa", "ab"]);
        let matched = Ranker::from_options(&options).rank("a", &items);
        assert_eq!(vec!["abc", "aaa"], names(&matched));
    }
}
