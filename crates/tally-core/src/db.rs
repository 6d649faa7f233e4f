//! Database operations for tally.

use crate::error::{Error, Result};
use crate::models::{BudgetRecord, HistoryEntry, NewHistoryEntry};
use crate::schema::SCHEMA;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::path::Path;
use std::str::FromStr;
use uuid::Uuid;

/// Database handle for tally.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open or create a database at the given path.
    pub async fn open(path: &Path) -> Result<Self> {
        let parent = path.parent().unwrap_or(Path::new("."));
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.init().await?;
        Ok(db)
    }

    /// Initialize schema.
    async fn init(&self) -> Result<()> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Get the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database.
    pub async fn close(self) {
        self.pool.close().await;
    }

    // =========================================================================
    // Search history
    // =========================================================================

    /// Insert a history entry, returning the assigned id.
    pub async fn insert_history(&self, entry: &NewHistoryEntry) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO search_history (user_id, query, timestamp, result, parameters, notes, tags)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(entry.user_id.to_string())
        .bind(&entry.query)
        .bind(entry.timestamp.timestamp_millis())
        .bind(entry.result.to_string())
        .bind(entry.parameters.to_string())
        .bind(&entry.notes)
        .bind(entry.tags.to_string())
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// List all entries for a user, most recent first.
    pub async fn list_history_for_user(&self, user_id: Uuid) -> Result<Vec<HistoryEntry>> {
        let rows = sqlx::query(
            "SELECT * FROM search_history WHERE user_id = ? ORDER BY timestamp DESC",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(history_entry_from_row(&row));
        }
        Ok(entries)
    }

    /// Get a history entry by id.
    pub async fn get_history_entry(&self, id: i64) -> Result<Option<HistoryEntry>> {
        let row = sqlx::query("SELECT * FROM search_history WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| history_entry_from_row(&row)))
    }

    /// Delete a history entry by id.
    pub async fn delete_history_entry(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM search_history WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("history entry {id}")));
        }
        Ok(())
    }

    /// Get history entry count.
    pub async fn count_history(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM search_history")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }

    // =========================================================================
    // Budgets
    // =========================================================================

    /// Insert a budget record, returning the assigned id.
    pub async fn insert_budget(&self, contents: &[u8]) -> Result<i64> {
        let result = sqlx::query("INSERT INTO budgets (contents) VALUES (?)")
            .bind(contents)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Get a budget record by id.
    pub async fn get_budget(&self, id: i64) -> Result<Option<BudgetRecord>> {
        let row = sqlx::query("SELECT id, contents FROM budgets WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| BudgetRecord {
            id: row.get("id"),
            contents: row.get("contents"),
        }))
    }

    /// Overwrite a budget record's contents in full.
    pub async fn save_budget(&self, id: i64, contents: &[u8]) -> Result<()> {
        let result = sqlx::query("UPDATE budgets SET contents = ? WHERE id = ?")
            .bind(contents)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("budget {id}")));
        }
        Ok(())
    }

    /// Delete a budget record by id.
    pub async fn delete_budget(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM budgets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("budget {id}")));
        }
        Ok(())
    }

    /// List every budget id.
    pub async fn list_budget_ids(&self) -> Result<Vec<i64>> {
        let rows = sqlx::query("SELECT id FROM budgets ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(|row| row.get("id")).collect())
    }
}

fn history_entry_from_row(row: &sqlx::sqlite::SqliteRow) -> HistoryEntry {
    HistoryEntry {
        id: row.get("id"),
        user_id: Uuid::parse_str(row.get::<&str, _>("user_id")).unwrap_or_default(),
        query: row.get("query"),
        timestamp: chrono::DateTime::from_timestamp_millis(row.get::<i64, _>("timestamp"))
            .unwrap_or_default()
            .with_timezone(&Utc),
        result: json_column(row, "result"),
        parameters: json_column(row, "parameters"),
        notes: row.get("notes"),
        tags: json_column(row, "tags"),
    }
}

fn json_column(row: &sqlx::sqlite::SqliteRow, name: &str) -> serde_json::Value {
    let raw: String = row.get(name);
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!("stored {name} column is not valid JSON ({e}), returning null");
        serde_json::Value::Null
    })
}
