//! Search result formatting.
//!
//! Renders matched records as fixed-width text lines plus a timing and
//! count summary. Pure string building; printing is left to the caller.

use findex_core::types::Record;
use findex_storage::SearchOutcome;

/// Format one result row as `name size date`.
///
/// With a truncation width `w`, a name longer than `w` characters is
/// replaced by `...` plus its LAST `w` characters — keeping the most
/// specific path segment visible at the cost of hiding the root — and the
/// name column is `w + 5` wide. The size column is left-justified to 15
/// regardless.
pub fn format_row(record: &Record, truncate: Option<usize>) -> String {
    let size = record.size.display();
    match truncate {
        Some(width) => {
            let name = truncate_name(&record.name, width);
            format!(
                "{:<name_width$} {:<15} {}",
                name,
                size,
                record.date,
                name_width = width + 5
            )
        }
        None => format!("{} {:<15} {}", record.name, size, record.date),
    }
}

fn truncate_name(name: &str, width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() > width {
        let tail: String = chars[chars.len() - width..].iter().collect();
        format!("...{}", tail)
    } else {
        name.to_string()
    }
}

/// Render the full result listing followed by the elapsed-time and count
/// summary lines.
pub fn render_results(outcome: &SearchOutcome, truncate: Option<usize>) -> String {
    let mut out = String::new();
    for record in &outcome.rows {
        out.push_str(&format_row(record, truncate));
        out.push('\n');
    }
    out.push_str(&format!(
        "\nSearch took {:.4} seconds.\n",
        outcome.elapsed.as_secs_f64()
    ));
    out.push_str(&format!("Found {} results.\n", outcome.rows.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use findex_core::types::SizeField;

    fn record(name: &str, size: &str, date: &str) -> Record {
        Record {
            name: name.to_string(),
            size: SizeField::parse(size),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_truncation_keeps_last_characters() {
        let rec = record("/a/b/c/verylongfilename.txt", "100", "2024-01-01");
        let row = format_row(&rec, Some(10));
        assert!(row.starts_with("...lename.txt"));
    }

    #[test]
    fn test_short_names_not_truncated() {
        let rec = record("a.txt", "100", "2024-01-01");
        let row = format_row(&rec, Some(10));
        assert!(row.starts_with("a.txt "));
    }

    #[test]
    fn test_name_column_width_is_truncate_plus_five() {
        let rec = record("a.txt", "100", "2024-01-01");
        let row = format_row(&rec, Some(10));
        // Name padded to 10 + 5, one separating space, then the size column.
        assert!(row[16..].starts_with("100.00 B"));
        assert!(row[5..16].chars().all(|c| c == ' '));
    }

    #[test]
    fn test_size_rendered_human_readable_and_left_justified() {
        let rec = record("a.txt", "1536", "2024-01-01");
        let row = format_row(&rec, None);
        assert_eq!(row, format!("a.txt {:<15} 2024-01-01", "1.50 KB"));
    }

    #[test]
    fn test_invalid_size_renders_raw_text() {
        let rec = record("c.txt", "abc", "2024-06-15");
        let row = format_row(&rec, None);
        assert!(row.contains("abc"));
    }

    #[test]
    fn test_summary_lines() {
        let outcome = SearchOutcome {
            rows: vec![record("a.txt", "100", "2024-01-01")],
            elapsed: Duration::from_millis(1500),
        };
        let text = render_results(&outcome, None);
        assert!(text.contains("\nSearch took 1.5000 seconds.\n"));
        assert!(text.ends_with("Found 1 results.\n"));
    }

    #[test]
    fn test_empty_outcome_still_prints_summary() {
        let outcome = SearchOutcome {
            rows: Vec::new(),
            elapsed: Duration::from_millis(2),
        };
        let text = render_results(&outcome, None);
        assert!(text.starts_with("\nSearch took 0.0020 seconds.\n"));
        assert!(text.contains("Found 0 results.\n"));
    }
}
