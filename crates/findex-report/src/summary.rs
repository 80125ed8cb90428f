//! Directory-report aggregation.
//!
//! Scans a tree for JSON report files carrying `name`, `files_count` and
//! `files_size`, and collects them into summary rows for the renderers.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;
use walkdir::WalkDir;

use findex_core::error::{FindexError, Result};

/// Width at which collected names are truncated.
const NAME_WIDTH: usize = 50;

/// The fields a JSON file must carry to count as a report.
#[derive(Debug, Deserialize)]
struct ReportFile {
    name: String,
    files_count: u64,
    files_size: u64,
}

/// One aggregated directory summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirSummary {
    /// Report name, head-truncated to 50 characters.
    pub name: String,
    /// Number of files the report covers.
    pub files_count: u64,
    /// Total size of those files, in bytes.
    pub files_size: u64,
    /// Absolute path of the report file itself.
    pub path: PathBuf,
}

/// Walk `root` and collect every JSON report file into a summary row.
///
/// Files that are not JSON, fail to parse, or lack any of the required
/// fields are skipped silently; the walk order is preserved.
pub fn collect_summaries(root: &Path) -> Result<Vec<DirSummary>> {
    let mut summaries = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| FindexError::Report(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().map_or(true, |ext| ext != "json") {
            continue;
        }

        let content = std::fs::read_to_string(entry.path())?;
        let report: ReportFile = match serde_json::from_str(&content) {
            Ok(report) => report,
            Err(_) => {
                debug!(path = %entry.path().display(), "Skipping non-report JSON");
                continue;
            }
        };

        let path = entry.path().canonicalize()?;
        summaries.push(DirSummary {
            name: truncate_name(&report.name, NAME_WIDTH),
            files_count: report.files_count,
            files_size: report.files_size,
            path,
        });
    }

    Ok(summaries)
}

/// Sort summaries by total size, largest first.
pub fn sort_by_size(summaries: &mut [DirSummary]) {
    summaries.sort_by(|a, b| b.files_size.cmp(&a.files_size));
}

/// Head-truncate a name to `width` characters, marking the cut with `..`.
fn truncate_name(name: &str, width: usize) -> String {
    if name.chars().count() > width {
        let head: String = name.chars().take(width).collect();
        format!("{}..", head)
    } else {
        name.to_string()
    }
}
