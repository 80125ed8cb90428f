//! Search query construction and execution.
//!
//! Assembles one parameterized SELECT from a set of optional, independently
//! combinable criteria. Each criterion contributes an explicit clause; the
//! clauses are ANDed in a fixed order, followed by two data-quality bounds
//! that are always appended. User input only ever reaches SQLite through
//! bound parameters.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{Days, NaiveDate};
use rusqlite::types::ToSql;
use tracing::debug;

use findex_core::error::{FindexError, Result};
use findex_core::types::{Record, SizeField, SortKey};
use findex_core::units::parse_size;

use crate::db::Database;

/// Optional filter criteria for one search.
///
/// All provided criteria must hold simultaneously; none are required.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    /// Comma-separated keywords; a record must contain ALL of them as
    /// substrings of its name. An empty string is "no criterion".
    pub search: Option<String>,
    /// Inclusive upper date bound, `YYYY-MM-DD`.
    pub before: Option<String>,
    /// Inclusive lower date bound, `YYYY-MM-DD`.
    pub after: Option<String>,
    /// Only records dated within the last N days. Combines with `after`;
    /// the more restrictive bound wins at evaluation time.
    pub days_old: Option<u32>,
    /// Minimum size, in any form accepted by `parse_size`.
    pub min_size: Option<String>,
    /// Result ordering; absent means store order.
    pub sort: Option<SortKey>,
}

/// One predicate of the assembled query: a fixed SQL fragment plus its bound
/// parameter, if any.
pub struct Clause {
    pub sql: &'static str,
    pub param: Option<Box<dyn ToSql>>,
}

impl SearchCriteria {
    /// Expand the provided criteria into predicate clauses, in the fixed
    /// composition order, ending with the two always-on data-quality bounds:
    /// `date <= today+1` and `CAST(size AS INTEGER) >= 0`.
    pub fn clauses(&self, today: NaiveDate) -> Result<Vec<Clause>> {
        let mut clauses = Vec::new();

        if let Some(search) = &self.search {
            if !search.is_empty() {
                for keyword in search.split(',') {
                    clauses.push(Clause {
                        sql: "name LIKE ?",
                        param: Some(Box::new(format!("%{}%", keyword.trim()))),
                    });
                }
            }
        }

        if let Some(before) = &self.before {
            clauses.push(Clause {
                sql: "date <= ?",
                param: Some(Box::new(before.clone())),
            });
        }

        if let Some(after) = &self.after {
            clauses.push(Clause {
                sql: "date >= ?",
                param: Some(Box::new(after.clone())),
            });
        }

        if let Some(days) = self.days_old {
            let cutoff = (today - Days::new(u64::from(days)))
                .format("%Y-%m-%d")
                .to_string();
            clauses.push(Clause {
                sql: "date >= ?",
                param: Some(Box::new(cutoff)),
            });
        }

        if let Some(min_size) = &self.min_size {
            let min_bytes = parse_size(min_size)?;
            debug!(min_size = %min_size, min_bytes, "Resolved minimum size");
            clauses.push(Clause {
                sql: "CAST(size AS INTEGER) >= ?",
                param: Some(Box::new(min_bytes as i64)),
            });
        }

        let max_valid_date = (today + Days::new(1)).format("%Y-%m-%d").to_string();
        clauses.push(Clause {
            sql: "date <= ?",
            param: Some(Box::new(max_valid_date)),
        });
        clauses.push(Clause {
            sql: "CAST(size AS INTEGER) >= 0",
            param: None,
        });

        Ok(clauses)
    }

    /// Build the full query: SELECT + ANDed clauses + ORDER BY + LIMIT.
    pub fn build(
        &self,
        today: NaiveDate,
        row_cap: u64,
    ) -> Result<(String, Vec<Box<dyn ToSql>>)> {
        let mut sql = String::from("SELECT name, size, date FROM files WHERE 1=1");
        let mut params: Vec<Box<dyn ToSql>> = Vec::new();

        for clause in self.clauses(today)? {
            sql.push_str(" AND ");
            sql.push_str(clause.sql);
            if let Some(param) = clause.param {
                params.push(param);
            }
        }

        match self.sort {
            Some(SortKey::Filename) => sql.push_str(" ORDER BY name"),
            Some(SortKey::Size) => sql.push_str(" ORDER BY CAST(size AS INTEGER)"),
            Some(SortKey::Date) => sql.push_str(" ORDER BY date"),
            None => {}
        }

        sql.push_str(" LIMIT ?");
        params.push(Box::new(row_cap as i64));

        Ok((sql, params))
    }
}

/// Result of one executed search.
#[derive(Debug)]
pub struct SearchOutcome {
    /// Matched records, fully materialized.
    pub rows: Vec<Record>,
    /// Time spent executing the statement and collecting rows.
    pub elapsed: Duration,
}

/// Executes searches against the record store.
pub struct SearchService {
    db: Arc<Database>,
    row_cap: u64,
}

impl SearchService {
    /// Create a search service with the configured result cap.
    pub fn new(db: Arc<Database>, row_cap: u64) -> Self {
        Self { db, row_cap }
    }

    /// Run one search with "today" taken from the local clock.
    pub fn search(&self, criteria: &SearchCriteria) -> Result<SearchOutcome> {
        self.search_as_of(criteria, chrono::Local::now().date_naive())
    }

    /// Run one search with an explicit "today" for the relative date bounds.
    pub fn search_as_of(
        &self,
        criteria: &SearchCriteria,
        today: NaiveDate,
    ) -> Result<SearchOutcome> {
        let (sql, params) = criteria.build(today, self.row_cap)?;

        self.db.with_conn(|conn| {
            let start = Instant::now();

            let mut stmt = conn
                .prepare(&sql)
                .map_err(|e| FindexError::Storage(format!("Search prepare: {}", e)))?;

            let param_refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();
            let mapped = stmt
                .query_map(param_refs.as_slice(), |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                })
                .map_err(|e| FindexError::Storage(format!("Search query: {}", e)))?;

            let mut rows = Vec::new();
            for row in mapped {
                let (name, size, date) = row.map_err(|e| FindexError::Storage(e.to_string()))?;
                rows.push(Record {
                    name,
                    size: SizeField::parse(&size),
                    date,
                });
            }

            let elapsed = start.elapsed();
            Ok(SearchOutcome { rows, elapsed })
        })
    }
}
