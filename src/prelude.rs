//! Convenience re-exports of commonly used types.
//!
//! This module provides a convenient way to import all the commonly used
//! command-score types and traits with a single `use command_score::prelude::*;` statement.

pub use crate::catalog::{Catalog, CatalogError, GameItem, ItemCategory, format_value};
pub use crate::fuzzy_matcher::command_score::{CommandScoreMatcher, command_score as score};
pub use crate::fuzzy_matcher::{FuzzyMatcher, ScoreType};
pub use crate::item::{Candidate, MatchedItem};
pub use crate::matcher::Ranker;
pub use crate::options::{CscoreOptions, CscoreOptionsBuilder};
pub use crate::reader::{ReaderError, ReaderOption, read_candidates};
