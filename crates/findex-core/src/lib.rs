pub mod config;
pub mod error;
pub mod types;
pub mod units;

pub use config::FindexConfig;
pub use error::{FindexError, Result};
pub use types::{Record, SizeField, SortKey};
pub use units::{format_size, parse_size};
