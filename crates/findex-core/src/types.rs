//! Shared catalog types.

use crate::units::format_size;

/// Typed result of parsing a record's stored size text.
///
/// The store keeps sizes as unvalidated text. Whether that text is a usable
/// byte count is decided here once, so the exclusion of bad sizes from
/// size-bounded queries and their rendering are explicit branches instead of
/// casts buried in the query engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SizeField {
    /// The stored text parsed as a non-negative integer byte count.
    Valid(u64),
    /// The stored text did not parse; the raw value is kept for display.
    Invalid(String),
}

impl SizeField {
    /// Parse stored size text.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<u64>() {
            Ok(n) => SizeField::Valid(n),
            Err(_) => SizeField::Invalid(raw.to_string()),
        }
    }

    /// The byte count, if the stored text was a valid size.
    pub fn bytes(&self) -> Option<u64> {
        match self {
            SizeField::Valid(n) => Some(*n),
            SizeField::Invalid(_) => None,
        }
    }

    /// Human-readable rendering: magnitude string for valid sizes, the raw
    /// stored text otherwise.
    pub fn display(&self) -> String {
        match self {
            SizeField::Valid(n) => format_size(*n),
            SizeField::Invalid(raw) => raw.clone(),
        }
    }
}

/// One cataloged item as returned by a query.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Display name, used for substring matching. Unconstrained.
    pub name: String,
    /// Size text, parsed once on the way out of the store.
    pub size: SizeField,
    /// Date text in `YYYY-MM-DD` form; compared lexicographically.
    pub date: String,
}

/// Sort order for query results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    /// Order by name text.
    Filename,
    /// Order by numeric size (unparseable sizes cast to 0).
    Size,
    /// Order by date text.
    Date,
}
