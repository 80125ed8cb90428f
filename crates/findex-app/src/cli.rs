//! CLI argument definitions for the findex binary.
//!
//! Uses `clap` with derive macros. Priority resolution for shared settings:
//! CLI args > env vars > config file > defaults.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use findex_core::types::SortKey;

/// findex — catalog a file index in an embedded store and search it.
#[derive(Parser, Debug)]
#[command(name = "findex", version, about)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Path of the store file (overrides the config value).
    #[arg(long = "db")]
    pub db: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > FINDEX_CONFIG env var > findex.toml in the
    /// working directory.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("FINDEX_CONFIG") {
            return PathBuf::from(p);
        }
        PathBuf::from("findex.toml")
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the catalog using optional, combinable criteria.
    Search(SearchArgs),
    /// Import a comma-delimited index file into the store.
    Import {
        /// Path of the CSV file to import.
        file: PathBuf,
    },
    /// Aggregate JSON report files under a directory into a table, CSV, or HTML.
    Report(ReportArgs),
    /// Render a record file as an HTML listing or directory tree.
    Show(ShowArgs),
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Comma-separated list of keywords to search for in the catalog.
    #[arg(short = 's', long = "search")]
    pub search: Option<String>,

    /// Filter results on or before this date (YYYY-MM-DD).
    #[arg(long)]
    pub before: Option<String>,

    /// Filter results on or after this date (YYYY-MM-DD).
    #[arg(long)]
    pub after: Option<String>,

    /// Show items newer than this many days.
    #[arg(long = "daysold")]
    pub days_old: Option<u32>,

    /// Sort results by filename, size, or date.
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Truncate filenames to the given width; defaults to 50 characters if
    /// no number is provided.
    #[arg(short = 't', long, num_args = 0..=1, default_missing_value = "50")]
    pub truncate: Option<usize>,

    /// Minimum result size. Accepts bytes, or values with a "kb", "mb",
    /// "gb" or "tb" suffix.
    #[arg(long)]
    pub minsize: Option<String>,
}

/// CLI-facing sort choice, mapped onto the core sort key.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortArg {
    Filename,
    Size,
    Date,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Filename => SortKey::Filename,
            SortArg::Size => SortKey::Size,
            SortArg::Date => SortKey::Date,
        }
    }
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Write the report to a CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the report to an HTML file.
    #[arg(long, conflicts_with = "csv")]
    pub html: Option<PathBuf>,

    /// Sort rows by total size, largest first.
    #[arg(short = 's', long = "sort-size")]
    pub sort_size: bool,

    /// Keep only the first N rows (applied after sorting).
    #[arg(long)]
    pub limit: Option<usize>,

    /// Directory to scan for report files.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Path of the record file to render.
    pub file: PathBuf,

    /// Render the directory-prefix tree instead of the file listing.
    #[arg(long)]
    pub tree: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_flags_parse() {
        let cli = Cli::parse_from([
            "findex", "search", "-s", "foo,bar", "--before", "2024-06-30", "--daysold", "7",
            "--sort", "size", "--minsize", "10kb",
        ]);
        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.search.as_deref(), Some("foo,bar"));
                assert_eq!(args.before.as_deref(), Some("2024-06-30"));
                assert_eq!(args.days_old, Some(7));
                assert_eq!(args.sort, Some(SortArg::Size));
                assert_eq!(args.minsize.as_deref(), Some("10kb"));
                assert_eq!(args.truncate, None);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_truncate_without_value_defaults_to_50() {
        let cli = Cli::parse_from(["findex", "search", "-t"]);
        match cli.command {
            Command::Search(args) => assert_eq!(args.truncate, Some(50)),
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_truncate_with_value() {
        let cli = Cli::parse_from(["findex", "search", "--truncate", "10"]);
        match cli.command {
            Command::Search(args) => assert_eq!(args.truncate, Some(10)),
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_report_csv_and_html_conflict() {
        let result = Cli::try_parse_from([
            "findex", "report", "--csv", "out.csv", "--html", "out.html",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path_flag_wins() {
        let cli = Cli::parse_from(["findex", "-c", "/tmp/other.toml", "search"]);
        assert_eq!(
            cli.resolve_config_path(),
            PathBuf::from("/tmp/other.toml")
        );
    }
}
