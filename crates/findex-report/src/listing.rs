//! Record-listing viewer.
//!
//! Loads an arbitrary structured record file (a JSON document with a flat
//! `files` list) and renders either the file listing as an HTML table or the
//! directory-prefix tree computed from the entry names.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use findex_core::error::Result;

/// One file entry in a record file.
#[derive(Debug, Clone, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
}

/// A structured record file: a flat list of file entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordFile {
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

impl RecordFile {
    /// Load a record file from disk. Missing or unparseable files surface
    /// as errors.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Opening fragment of the HTML document wrapper.
pub fn start_html() -> &'static str {
    "<html><head></head><body>"
}

/// Closing fragment of the HTML document wrapper.
pub fn end_html() -> &'static str {
    "</body></html>"
}

/// Render the file entries as an HTML table of name and size rows.
pub fn render_file_table(record: &RecordFile) -> String {
    let mut html = String::from("<table border=\"1\">\n");
    html.push_str("  <tr><th>File Name</th><th>Size (bytes)</th></tr>\n");
    for file in &record.files {
        html.push_str(&format!(
            "  <tr><td>{}</td><td>{}</td></tr>\n",
            file.name, file.size
        ));
    }
    html.push_str("</table>");
    html
}

/// Render the unique directory prefixes of all entry names, sorted, one per
/// line.
///
/// Every `/`-separated prefix of a name counts as a directory except the
/// final segment (the file itself).
pub fn render_directory_tree(record: &RecordFile) -> String {
    let mut dirs = BTreeSet::new();
    for file in &record.files {
        let parts: Vec<&str> = file.name.split('/').collect();
        for i in 1..parts.len() {
            dirs.insert(parts[..i].join("/"));
        }
    }
    dirs.into_iter().collect::<Vec<_>>().join("<br>")
}
