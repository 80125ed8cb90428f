//! findex binary - composition root.
//!
//! Ties the crates together behind a clap CLI:
//! 1. Load configuration from TOML
//! 2. Open (bootstrapping if absent) the SQLite store
//! 3. Import on first run, interactively
//! 4. Dispatch to search, import, report, or show

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;

use findex_core::config::FindexConfig;
use findex_core::error::Result;
use findex_report as report;
use findex_storage::{import_csv, Database, SearchCriteria, SearchService};

mod cli;
mod output;

use cli::{Cli, Command, ReportArgs, SearchArgs, ShowArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.resolve_config_path();
    let config = FindexConfig::load_or_default(&config_path);

    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.general.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let db_path = cli
        .db
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.general.db_path));

    match cli.command {
        Command::Search(args) => run_search(args, &db_path, &config),
        Command::Import { file } => run_import(&file, &db_path),
        Command::Report(args) => run_report(args),
        Command::Show(args) => run_show(args),
    }
}

fn run_search(args: SearchArgs, db_path: &Path, config: &FindexConfig) -> Result<()> {
    let first_run = !db_path.exists();
    let db = Arc::new(Database::open(db_path)?);

    if first_run {
        prompt_initial_import(&db)?;
    }

    let criteria = SearchCriteria {
        search: args.search,
        before: args.before,
        after: args.after,
        days_old: args.days_old,
        min_size: args.minsize,
        sort: args.sort.map(Into::into),
    };

    let service = SearchService::new(db, config.search.row_cap);
    let outcome = service.search(&criteria)?;
    print!("{}", output::render_results(&outcome, args.truncate));
    Ok(())
}

/// First run: the store file was just created, so ask for a CSV to seed it.
/// An empty response proceeds with an empty store.
fn prompt_initial_import(db: &Database) -> Result<()> {
    print!("Enter the path to the CSV file: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let source = line.trim();
    if source.is_empty() {
        tracing::warn!("No import source given; the store starts empty");
        return Ok(());
    }

    let inserted = import_csv(db, Path::new(source))?;
    println!("Imported {} records.", inserted);
    Ok(())
}

fn run_import(file: &Path, db_path: &Path) -> Result<()> {
    let db = Database::open(db_path)?;
    let inserted = import_csv(&db, file)?;
    println!("Imported {} records.", inserted);
    Ok(())
}

fn run_report(args: ReportArgs) -> Result<()> {
    let mut summaries = report::collect_summaries(&args.root)?;
    if args.sort_size {
        report::sort_by_size(&mut summaries);
    }
    if let Some(limit) = args.limit {
        summaries.truncate(limit);
    }

    if let Some(csv_path) = &args.csv {
        report::write_csv(csv_path, &summaries)?;
        tracing::info!(rows = summaries.len(), path = %csv_path.display(), "CSV report written");
    } else if let Some(html_path) = &args.html {
        report::write_html(html_path, &summaries)?;
        tracing::info!(rows = summaries.len(), path = %html_path.display(), "HTML report written");
    } else {
        print!("{}", report::render_table(&summaries));
    }
    Ok(())
}

fn run_show(args: ShowArgs) -> Result<()> {
    let record = report::RecordFile::load(&args.file)?;
    let body = if args.tree {
        report::render_directory_tree(&record)
    } else {
        report::render_file_table(&record)
    };

    println!("{}", report::listing::start_html());
    println!("{}", body);
    println!("{}", report::listing::end_html());
    Ok(())
}
