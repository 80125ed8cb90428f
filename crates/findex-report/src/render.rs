//! Table, CSV, and HTML rendering of directory summaries.

use std::path::Path;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use findex_core::error::{FindexError, Result};
use findex_core::units::format_size;

use crate::summary::DirSummary;

/// Characters left verbatim in HTML path links: unreserved characters plus
/// the path separator.
const PATH_LINK: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'.')
    .remove(b'_')
    .remove(b'-')
    .remove(b'~');

/// Render summaries as an aligned text table, one row per line.
pub fn render_table(summaries: &[DirSummary]) -> String {
    let mut out = String::new();
    for s in summaries {
        out.push_str(&format!(
            "{:<52} {:<12} {:<15} {}\n",
            s.name,
            s.files_count,
            format_size(s.files_size),
            s.path.display()
        ));
    }
    out
}

/// Write summaries to a CSV file with a header row.
pub fn write_csv(path: &Path, summaries: &[DirSummary]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| FindexError::Report(e.to_string()))?;

    writer
        .write_record(["Name", "Files Count", "Files Size", "Path"])
        .map_err(|e| FindexError::Report(e.to_string()))?;

    for s in summaries {
        writer
            .write_record([
                s.name.clone(),
                s.files_count.to_string(),
                format_size(s.files_size),
                s.path.display().to_string(),
            ])
            .map_err(|e| FindexError::Report(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| FindexError::Report(e.to_string()))?;
    Ok(())
}

/// Write summaries as an HTML table.
///
/// Each Path cell links into the record-listing viewer with the report path
/// percent-encoded into the query string.
pub fn write_html(path: &Path, summaries: &[DirSummary]) -> Result<()> {
    std::fs::write(path, render_html(summaries))?;
    Ok(())
}

fn render_html(summaries: &[DirSummary]) -> String {
    let mut html = String::from("<html><body><table border='1'>");
    html.push_str("<tr><th>Name</th><th>Files Count</th><th>Files Size</th><th>Path</th></tr>");

    for s in summaries {
        let raw_path = s.path.display().to_string();
        let encoded = utf8_percent_encode(&raw_path, PATH_LINK);
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td><a href=\"/run/content?path={}&format=0\">{}</a></td></tr>",
            s.name,
            s.files_count,
            format_size(s.files_size),
            encoded,
            raw_path
        ));
    }

    html.push_str("</table></body></html>");
    html
}
