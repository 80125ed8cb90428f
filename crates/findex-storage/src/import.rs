//! One-shot CSV import into the record store.
//!
//! Rows are inserted verbatim, in file order, with no validation and no
//! type coercion. The whole import is a single transaction committed at the
//! end; a crash mid-import leaves a partially populated store.

use std::path::Path;

use tracing::info;

use findex_core::error::{FindexError, Result};

use crate::db::Database;

/// Import a comma-delimited file into the store.
///
/// Decoding is lenient: malformed byte sequences are dropped rather than
/// failing the import. A row with fewer than 3 fields is fatal for the whole
/// import. Returns the number of rows inserted.
pub fn import_csv(db: &Database, source: &Path) -> Result<usize> {
    let raw = std::fs::read(source)?;
    let mut text = String::from_utf8_lossy(&raw).into_owned();
    text.retain(|c| c != char::REPLACEMENT_CHARACTER);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    db.with_conn(|conn| {
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| FindexError::Storage(format!("Failed to begin import: {}", e)))?;

        let mut inserted = 0usize;
        {
            let mut stmt = tx
                .prepare("INSERT INTO files (name, size, date) VALUES (?1, ?2, ?3)")
                .map_err(|e| FindexError::Storage(format!("Insert prepare: {}", e)))?;

            for (idx, row) in reader.records().enumerate() {
                let row = row.map_err(|e| FindexError::Import(e.to_string()))?;
                if row.len() < 3 {
                    return Err(FindexError::MalformedInput {
                        row: idx + 1,
                        fields: row.len(),
                    });
                }
                stmt.execute(rusqlite::params![&row[0], &row[1], &row[2]])
                    .map_err(|e| FindexError::Storage(format!("Insert failed: {}", e)))?;
                inserted += 1;
            }
        }

        tx.commit()
            .map_err(|e| FindexError::Storage(format!("Import commit failed: {}", e)))?;

        info!(rows = inserted, source = %source.display(), "CSV import complete");
        Ok(inserted)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content).unwrap();
        (dir, path)
    }

    fn all_names(db: &Database) -> Vec<String> {
        db.with_conn(|conn| {
            let mut stmt = conn
                .prepare("SELECT name FROM files")
                .map_err(|e| FindexError::Storage(e.to_string()))?;
            let rows = stmt
                .query_map([], |row| row.get::<_, String>(0))
                .map_err(|e| FindexError::Storage(e.to_string()))?;
            let mut names = Vec::new();
            for row in rows {
                names.push(row.map_err(|e| FindexError::Storage(e.to_string()))?);
            }
            Ok(names)
        })
        .unwrap()
    }

    #[test]
    fn test_import_inserts_rows_in_file_order() {
        let (_dir, path) = write_csv(b"a.txt,100,2024-01-01\nb.txt,2048,2024-06-01\n");
        let db = Database::in_memory().unwrap();

        let inserted = import_csv(&db, &path).unwrap();
        assert_eq!(inserted, 2);
        assert_eq!(all_names(&db), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_import_keeps_first_three_fields() {
        let (_dir, path) = write_csv(b"a.txt,100,2024-01-01,extra,fields\n");
        let db = Database::in_memory().unwrap();

        import_csv(&db, &path).unwrap();

        let row = db
            .with_conn(|conn| {
                conn.query_row("SELECT name, size, date FROM files", [], |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                })
                .map_err(|e| FindexError::Storage(e.to_string()))
            })
            .unwrap();
        assert_eq!(
            row,
            (
                "a.txt".to_string(),
                "100".to_string(),
                "2024-01-01".to_string()
            )
        );
    }

    #[test]
    fn test_import_no_coercion_of_bad_size() {
        let (_dir, path) = write_csv(b"c.txt,abc,2024-06-15\n");
        let db = Database::in_memory().unwrap();

        import_csv(&db, &path).unwrap();

        let size: String = db
            .with_conn(|conn| {
                conn.query_row("SELECT size FROM files", [], |row| row.get(0))
                    .map_err(|e| FindexError::Storage(e.to_string()))
            })
            .unwrap();
        assert_eq!(size, "abc");
    }

    #[test]
    fn test_short_row_is_fatal() {
        let (_dir, path) = write_csv(b"a.txt,100,2024-01-01\nonly-two,fields\n");
        let db = Database::in_memory().unwrap();

        let err = import_csv(&db, &path).unwrap_err();
        assert!(matches!(
            err,
            FindexError::MalformedInput { row: 2, fields: 2 }
        ));
    }

    #[test]
    fn test_invalid_utf8_bytes_are_dropped() {
        let (_dir, path) = write_csv(b"caf\xff\xfe.txt,100,2024-01-01\n");
        let db = Database::in_memory().unwrap();

        import_csv(&db, &path).unwrap();
        assert_eq!(all_names(&db), vec!["caf.txt"]);
    }

    #[test]
    fn test_reimport_duplicates_rows() {
        let (_dir, path) = write_csv(b"a.txt,100,2024-01-01\n");
        let db = Database::in_memory().unwrap();

        import_csv(&db, &path).unwrap();
        import_csv(&db, &path).unwrap();
        assert_eq!(db.record_count().unwrap(), 2);
    }

    #[test]
    fn test_missing_source_is_io_error() {
        let db = Database::in_memory().unwrap();
        let err = import_csv(&db, Path::new("/nonexistent/index.csv")).unwrap_err();
        assert!(matches!(err, FindexError::Io(_)));
    }
}
