//! Item catalogs in the jbvalues.com `/api/items` format.
//!
//! A catalog is a JSON object mapping item ids to their name and trade value:
//!
//! ```json
//! {
//!   "v_torpedo": { "name": "Torpedo", "value": 1500000 },
//!   "hyper_red_1": { "name": "Hyper Red Level 1", "value": 250000 }
//! }
//! ```
//!
//! The category of an item is encoded in the prefix of its id. Items without value and
//! duplicated ("duped") items are not tradeable and are dropped.
//!
//! Values are shown abbreviated, see [`format_value`].

use std::fmt::{self, Display};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::item::Candidate;

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be opened
    #[error("failed to open catalog: {0}")]
    Io(#[from] io::Error),
    /// The catalog is not valid JSON, or not shaped like a catalog
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// No known category prefix matches the item id
    #[error("failed to match item category for `{0}`")]
    UnknownCategory(String),
    /// The id is not a tradeable item of the catalog
    #[error("item with id `{0}` not found")]
    UnknownItem(String),
}

/// Kind of item, derived from the id prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    /// `v` prefix
    Vehicle,
    /// `s` prefix
    Spoiler,
    /// `r` prefix
    Rim,
    /// `t` prefix
    Texture,
    /// `c` prefix
    Color,
    /// `hyper` prefix
    Hyper,
}

/// Checked in order, first match wins
const CATEGORY_PREFIXES: [(&str, ItemCategory); 6] = [
    ("v", ItemCategory::Vehicle),
    ("r", ItemCategory::Rim),
    ("s", ItemCategory::Spoiler),
    ("t", ItemCategory::Texture),
    ("c", ItemCategory::Color),
    ("hyper", ItemCategory::Hyper),
];

impl ItemCategory {
    /// Derives the category from an item id
    pub fn from_id(id: &str) -> Option<Self> {
        CATEGORY_PREFIXES
            .iter()
            .find(|(prefix, _)| id.starts_with(prefix))
            .map(|&(_, category)| category)
    }
}

impl Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ItemCategory::Vehicle => "vehicle",
            ItemCategory::Spoiler => "spoiler",
            ItemCategory::Rim => "rim",
            ItemCategory::Texture => "texture",
            ItemCategory::Color => "color",
            ItemCategory::Hyper => "hyper",
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawItem {
    name: String,
    value: f64,
}

/// A tradeable item
#[derive(Debug, Clone, PartialEq)]
pub struct GameItem {
    /// Catalog id, e.g. `v_torpedo`
    pub id: String,
    /// Display name
    pub name: String,
    /// Trade value
    pub value: f64,
    /// Category derived from the id
    pub category: ItemCategory,
}

/// The tradeable items of a catalog, in document order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<GameItem>,
}

impl Catalog {
    /// Opens and parses a catalog file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses a catalog from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let raw: IndexMap<String, RawItem> = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    /// Parses a catalog from a string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: IndexMap<String, RawItem> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: IndexMap<String, RawItem>) -> Result<Self, CatalogError> {
        let total = raw.len();
        let mut items = Vec::with_capacity(total);

        for (id, RawItem { name, value }) in raw {
            let category = ItemCategory::from_id(&id).ok_or_else(|| CatalogError::UnknownCategory(id.clone()))?;
            if value == 0.0 || id.contains("duped") {
                debug!("skipping untradeable item {id}");
                continue;
            }
            items.push(GameItem {
                id,
                name,
                value,
                category,
            });
        }

        debug!("loaded {} of {} catalog items", items.len(), total);
        Ok(Self { items })
    }

    /// All tradeable items
    pub fn items(&self) -> &[GameItem] {
        &self.items
    }

    /// Looks an item up by id
    pub fn get(&self, id: &str) -> Option<&GameItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of tradeable items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no tradeable item
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `value * amount` over `(id, amount)` pairs
    pub fn total_value<S: AsRef<str>>(&self, entries: &[(S, u32)]) -> Result<f64, CatalogError> {
        entries
            .iter()
            .try_fold(0.0, |sum: f64, (id, amount)| -> Result<f64, CatalogError> {
                let id = id.as_ref();
                let item = self.get(id).ok_or_else(|| CatalogError::UnknownItem(id.to_string()))?;
                Ok(sum + item.value * f64::from(*amount))
            })
    }

    /// One candidate per item, named after the item
    pub fn candidates(&self) -> Vec<Candidate> {
        self.items.iter().map(|item| Candidate::new(item.name.as_str())).collect()
    }
}

//------------------------------------------------------------------------------
// Value formatting

const VALUE_UNITS: [(f64, &str); 4] = [
    (1_000_000_000_000.0, "T"),
    (1_000_000_000.0, "B"),
    (1_000_000.0, "M"),
    (1_000.0, "K"),
];

/// Formats a trade value the way it is quoted between traders: `1500` is `$1.5K`,
/// `2_000_000` is `$2M`.
///
/// Values of a thousand and more are scaled to the largest unit (`K`, `M`, `B`, `T`) and
/// kept to one decimal, dropping a trailing `.0`. Smaller values are printed with digit
/// grouping and at most three decimals. With `no_show_text` the unit letter is left out.
pub fn format_value(value: f64, no_show_text: bool) -> String {
    for (unit, suffix) in VALUE_UNITS {
        if value >= unit {
            let suffix = if no_show_text { "" } else { suffix };
            return format!("${}{}", one_decimal(value / unit), suffix);
        }
    }
    format!("${}", group_digits(value))
}

/// One decimal, exact ties rounded up, no trailing `.0`
fn one_decimal(num: f64) -> String {
    let scaled = num * 10.0;
    let exact = num.mul_add(10.0, -scaled) == 0.0;
    let num = if exact && scaled.fract() == 0.5 {
        scaled.ceil() / 10.0
    } else {
        num
    };

    let formatted = format!("{num:.1}");
    match formatted.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => formatted,
    }
}

/// `1234.5` becomes `1,234.5`
fn group_digits(value: f64) -> String {
    let formatted = format!("{value:.3}");
    let formatted = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", formatted),
    };
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(formatted.len() + whole.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
