//! Reading candidates from line-oriented input (stdin, files, command output).
//!
//! Each record becomes one [`Candidate`]. Unless aliases are disabled, a record is split on the
//! delimiter: the first field is the name and the remaining non-empty fields are its aliases.

use std::io::{self, BufRead};

use regex::Regex;
use thiserror::Error;

use crate::item::Candidate;
use crate::options::CscoreOptions;

const DELIMITER_STR: &str = r"\t";

/// Errors raised while reading candidates
#[derive(Debug, Error)]
pub enum ReaderError {
    /// The underlying reader failed
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    /// A record is not valid UTF-8
    #[error("record {record} is not valid UTF-8")]
    InvalidUtf8 {
        /// Zero-based position of the offending record
        record: usize,
        /// The decoding error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Options for configuring how records are read and split
#[derive(Debug, Clone)]
pub struct ReaderOption {
    line_ending: u8,
    delimiter: Regex,
    aliases: bool,
}

impl Default for ReaderOption {
    fn default() -> Self {
        Self {
            line_ending: b'\n',
            delimiter: Regex::new(DELIMITER_STR).expect("default delimiter is a valid regex"),
            aliases: true,
        }
    }
}

impl ReaderOption {
    /// Creates reader options from cscore options
    pub fn from_options(options: &CscoreOptions) -> Self {
        Self {
            line_ending: if options.read0 { b'\0' } else { b'\n' },
            delimiter: options.delimiter.clone(),
            aliases: !options.no_aliases,
        }
    }

    /// Enables reading null-terminated records instead of newline-terminated
    pub fn read0(mut self, enable: bool) -> Self {
        self.line_ending = if enable { b'\0' } else { b'\n' };
        self
    }

    /// Sets the delimiter between the name and the aliases
    pub fn delimiter(mut self, delimiter: Regex) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enables or disables alias splitting
    pub fn aliases(mut self, enable: bool) -> Self {
        self.aliases = enable;
        self
    }

    fn strip_ending<'a>(&self, mut record: &'a [u8]) -> &'a [u8] {
        if let Some(rest) = record.strip_suffix(&[self.line_ending]) {
            record = rest;
        }
        if self.line_ending == b'\n'
            && let Some(rest) = record.strip_suffix(b"\r")
        {
            record = rest;
        }
        record
    }

    fn parse_record(&self, record: &str) -> Option<Candidate> {
        if !self.aliases {
            return Some(Candidate::new(record));
        }

        let mut fields = self.delimiter.split(record);
        let name = fields.next().unwrap_or_default();
        if name.is_empty() {
            return None;
        }
        let aliases = fields.filter(|field| !field.is_empty());
        Some(Candidate::new(name).with_aliases(aliases))
    }
}

/// Reads every record of `source` into a candidate.
///
/// Empty records, and records whose name field is empty, are skipped.
pub fn read_candidates<R: BufRead>(mut source: R, option: &ReaderOption) -> Result<Vec<Candidate>, ReaderError> {
    let mut candidates = Vec::new();
    let mut buffer = Vec::new();
    let mut record_index = 0;

    loop {
        buffer.clear();
        if source.read_until(option.line_ending, &mut buffer)? == 0 {
            break;
        }

        let record = option.strip_ending(&buffer);
        if !record.is_empty() {
            let record = String::from_utf8(record.to_vec()).map_err(|source| ReaderError::InvalidUtf8 {
                record: record_index,
                source,
            })?;
            match option.parse_record(&record) {
                Some(candidate) => candidates.push(candidate),
                None => debug!("skipping record {record_index} without a name"),
            }
        }
        record_index += 1;
    }

    trace!("read {} candidates from {} records", candidates.len(), record_index);
    Ok(candidates)
}
