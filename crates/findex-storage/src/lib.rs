//! findex storage crate - SQLite persistence for the file catalog.
//!
//! Provides the embedded record store (three untyped text columns, no keys),
//! the one-shot CSV importer, and the filter/query builder that assembles
//! parameterized searches from optional criteria.

pub mod db;
pub mod import;
pub mod query;

pub use db::Database;
pub use import::import_csv;
pub use query::{SearchCriteria, SearchOutcome, SearchService};
