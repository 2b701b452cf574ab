//! Persisted quote rows.
//!
//! Rows are append-only: the store assigns the id on insert and nothing in the
//! server updates or deletes them afterwards.
use quote_common::{Quote, Result};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// A `Quote` together with the auto-incremented id assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredQuoteRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// The quote exactly as it was fetched.
    pub quote: Quote,
}

fn text(row: &SqliteRow, column: &str) -> Result<String> {
    Ok(row.try_get::<String, _>(column)?)
}

impl StoredQuoteRow {
    /// Build a row from a `SELECT * FROM exchange` result.
    pub fn from_row(row: &SqliteRow) -> Result<Self> {
        let quote = Quote {
            code: text(row, "code")?,
            codein: text(row, "codein")?,
            name: text(row, "name")?,
            high: text(row, "high")?,
            low: text(row, "low")?,
            var_bid: text(row, "varBid")?,
            pct_change: text(row, "pctChange")?,
            bid: text(row, "bid")?,
            ask: text(row, "ask")?,
            timestamp: text(row, "timestamp")?,
            create_date: text(row, "create_date")?,
        };
        Ok(Self {
            id: row.try_get::<i64, _>("id")?,
            quote,
        })
    }
}
