//! SQLite-backed quote store.
//!
//! The pool is the only state shared between concurrent requests; the driver's
//! pooling serialises writes, nothing here adds locking.
use std::path::Path;

use log::debug;
use quote_common::{Deadline, Quote, QuoteError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqliteSynchronous};

use crate::model::StoredQuoteRow;

const CREATE_EXCHANGE: &str = r#"
    CREATE TABLE IF NOT EXISTS exchange (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        code TEXT,
        codein TEXT,
        name TEXT,
        high TEXT,
        low TEXT,
        varBid TEXT,
        pctChange TEXT,
        bid TEXT,
        ask TEXT,
        timestamp TEXT,
        create_date TEXT
    )
"#;

const INSERT_EXCHANGE: &str = r#"
    INSERT INTO exchange
    (code, codein, name, high, low, varBid, pctChange, bid, ask, timestamp, create_date)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

const SELECT_EXCHANGE: &str = r#"
    SELECT id, code, codein, name, high, low, varBid, pctChange, bid, ask, timestamp, create_date
    FROM exchange
    ORDER BY id
"#;

/// Append-only persistence for fetched quotes.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    pool: SqlitePool,
}

impl QuoteStore {
    /// Open the database at `path`, creating the file and its directory if missing.
    pub async fn connect(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        // WAL with NORMAL sync keeps a single insert well inside the store budget.
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePool::connect_with(options).await?;
        Ok(Self { pool })
    }

    /// Ensure the `exchange` table exists. Safe to call on every start.
    pub async fn initialize(&self) -> Result<()> {
        sqlx::query(CREATE_EXCHANGE).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert one row for `quote` and return its id.
    ///
    /// Fails with `Timeout` if not complete by `deadline` and with `Store` on
    /// any database error. The insert only becomes visible on commit; a
    /// deadline hit before that drops the transaction, which rolls it back.
    pub async fn save(&self, quote: &Quote, deadline: Deadline) -> Result<i64> {
        let id = deadline
            .run("store write", async {
                let mut tx = self.pool.begin().await?;
                let id = sqlx::query(INSERT_EXCHANGE)
                    .bind(&quote.code)
                    .bind(&quote.codein)
                    .bind(&quote.name)
                    .bind(&quote.high)
                    .bind(&quote.low)
                    .bind(&quote.var_bid)
                    .bind(&quote.pct_change)
                    .bind(&quote.bid)
                    .bind(&quote.ask)
                    .bind(&quote.timestamp)
                    .bind(&quote.create_date)
                    .execute(&mut *tx)
                    .await?
                    .last_insert_rowid();
                tx.commit().await?;
                Ok::<_, QuoteError>(id)
            })
            .await?;

        debug!("Stored quote {} (bid {})", id, quote.bid);
        Ok(id)
    }

    /// All stored rows in insertion order.
    pub async fn rows(&self) -> Result<Vec<StoredQuoteRow>> {
        let rows = sqlx::query(SELECT_EXCHANGE).fetch_all(&self.pool).await?;
        rows.iter().map(StoredQuoteRow::from_row).collect()
    }

    /// Close the pool; later operations fail with `Store`.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
