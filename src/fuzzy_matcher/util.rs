use crate::fuzzy_matcher::FuzzyMatcher;

/// Asserts that `choices`, given best first, score strictly decreasing against `pattern`.
pub fn assert_order(matcher: &dyn FuzzyMatcher, pattern: &str, choices: &[&str]) {
    let scores: Vec<_> = choices
        .iter()
        .map(|choice| matcher.fuzzy_score(choice, pattern, &[]))
        .collect();

    for (pair, choice_pair) in scores.windows(2).zip(choices.windows(2)) {
        assert!(
            pair[0] > pair[1],
            "expected {:?}({}) > {:?}({}) for pattern {:?}",
            choice_pair[0],
            pair[0],
            choice_pair[1],
            pair[1],
            pattern
        );
    }
}
