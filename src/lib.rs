//! command-score ranks text candidates by how well they match a typed abbreviation.
//!
//! It is the scoring used by command palettes: the query's characters must appear in order in
//! the candidate, jumps to the start of a word are cheap, jumps into the middle of a word are
//! expensive, and every score lies in `[0, 1]`. It can be used as a library or through the
//! `cscore` command-line filter.
//!
//! # Examples
//!
//! ```
//! use command_score::prelude::*;
//!
//! assert_eq!(1.0, score("Torpedo", "Torpedo", &[] as &[&str]));
//! assert!(score("Torpedo", "tor", &[] as &[&str]) > score("Motor Oil", "tor", &[] as &[&str]));
//!
//! let items = vec![
//!     Candidate::new("Motor Oil"),
//!     Candidate::new("Torpedo").with_aliases(["torp"]),
//!     Candidate::new("Brulee"),
//! ];
//! let matched = Ranker::default().rank("tor", &items);
//! let names: Vec<_> = matched.iter().map(|m| m.candidate.text()).collect();
//! assert_eq!(names, ["Torpedo", "Motor Oil"]);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub use crate::catalog::{Catalog, CatalogError, GameItem, ItemCategory, format_value};
pub use crate::fuzzy_matcher::command_score::{CommandScoreMatcher, command_score as score};
pub use crate::fuzzy_matcher::{FuzzyMatcher, ScoreType};
pub use crate::item::{Candidate, MatchedItem};
pub use crate::matcher::Ranker;
pub use crate::options::{CscoreOptions, CscoreOptionsBuilder};
pub use crate::reader::{ReaderError, ReaderOption, read_candidates};

pub mod catalog;
pub mod fuzzy_matcher;
pub mod item;
mod matcher;
pub mod options;
pub mod prelude;
pub mod reader;
