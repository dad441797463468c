//! Configuration options for cscore.
//!
//! This module provides the `CscoreOptions` struct and builder, shared by the `cscore` binary
//! (through clap) and library callers (through the builder).

use derive_builder::Builder;
use regex::Regex;

use crate::fuzzy_matcher::ScoreType;

const DEFAULT_DELIMITER: &str = r"\t";

#[cfg(feature = "cli")]
/// Custom value parser for the alias delimiter
fn parse_delimiter_value(s: &str) -> Result<Regex, String> {
    Regex::new(s).map_err(|e| format!("Invalid regex delimiter: {}", e))
}

#[cfg(feature = "cli")]
fn parse_min_score(s: &str) -> Result<ScoreType, String> {
    let score: ScoreType = s.parse().map_err(|e| format!("Invalid score: {}", e))?;
    if (0.0..=1.0).contains(&score) {
        Ok(score)
    } else {
        Err(format!("score must be within [0, 1], got {}", score))
    }
}

/// cscore - rank lines by how well they match an abbreviation
///
/// Reads one candidate per line from stdin, scores each against QUERY and prints the matching
/// ones, best first.
#[derive(Builder, Debug, Clone)]
#[builder(default)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "cscore", args_override_self = true, verbatim_doc_comment, version, about)
)]
pub struct CscoreOptions {
    //  --- Search ---
    /// The abbreviation to score candidates against
    ///
    /// An empty query keeps every candidate, in input order
    #[cfg_attr(feature = "cli", arg(default_value = ""))]
    #[builder(setter(into))]
    pub query: String,

    /// Minimum score (exclusive) for a candidate to be printed
    ///
    /// Candidates scoring 0 never match, whatever this is set to
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = "0", value_parser = parse_min_score, help_heading = "Search")
    )]
    pub min_score: ScoreType,

    /// Do not sort the results
    ///
    /// Matching candidates are printed in input order
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Search"))]
    pub no_sort: bool,

    /// Reverse the order of the results
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Search"))]
    pub tac: bool,

    /// Print at most this many results
    #[cfg_attr(feature = "cli", arg(short = 'n', long, help_heading = "Search"))]
    pub limit: Option<usize>,

    //  --- Input ---
    /// Delimiter between a candidate's name and its aliases
    ///
    /// In regex format. The first field is the name, the following non-empty fields are aliases.
    #[cfg_attr(
        feature = "cli",
        arg(short, long, default_value = DEFAULT_DELIMITER, value_parser = parse_delimiter_value, help_heading = "Input")
    )]
    pub delimiter: Regex,

    /// Treat each input line as a plain name, without aliases
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Input"))]
    pub no_aliases: bool,

    /// Read candidates from a JSON item catalog instead of stdin
    ///
    /// The catalog maps item ids to `{ "name": ..., "value": ... }` objects
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Input"))]
    #[builder(setter(into, strip_option))]
    pub catalog: Option<String>,

    /// Read input delimited by ASCII NUL(\\0) characters
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Input"))]
    pub read0: bool,

    //  --- Scripting ---
    /// Print the score before each result, separated by a tab
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Scripting"))]
    pub print_score: bool,

    /// Print the formatted trade value before each result, separated by a tab.
    /// Only catalog items carry a value
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Scripting"))]
    pub print_value: bool,

    /// Print the query as the first line
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Scripting"))]
    pub print_query: bool,

    /// Print output delimited by ASCII NUL(\\0) characters
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Scripting"))]
    pub print0: bool,
}

impl Default for CscoreOptions {
    fn default() -> Self {
        Self {
            query: String::new(),
            min_score: 0.0,
            no_sort: false,
            tac: false,
            limit: None,
            delimiter: Regex::new(DEFAULT_DELIMITER).expect("default delimiter is a valid regex"),
            no_aliases: false,
            catalog: None,
            read0: false,
            print_score: false,
            print_value: false,
            print_query: false,
            print0: false,
        }
    }
}

impl CscoreOptions {
    /// The record terminator used for output
    pub fn output_ending(&self) -> &'static str {
        if self.print0 { "\0" } else { "\n" }
    }
}
