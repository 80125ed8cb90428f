//! findex report crate - directory-report aggregation and rendering.
//!
//! Walks a directory tree collecting summary records from JSON report
//! files and renders them as a text table, CSV, or an HTML page whose rows
//! link into the record-listing viewer. The viewer itself (file tables and
//! directory-prefix trees from a structured record file) lives here too.

pub mod listing;
pub mod render;
pub mod summary;

pub use listing::{render_directory_tree, render_file_table, RecordFile};
pub use render::{render_table, write_csv, write_html};
pub use summary::{collect_summaries, sort_by_size, DirSummary};
