//! Database schema for tally.

/// SQL schema for both tables. Applied idempotently on open.
pub const SCHEMA: &str = r#"
-- Per-user search history entries
CREATE TABLE IF NOT EXISTS search_history (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    query TEXT NOT NULL,
    timestamp INTEGER NOT NULL,
    result TEXT NOT NULL,
    parameters TEXT NOT NULL,
    notes TEXT NOT NULL,
    tags TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_search_history_user
    ON search_history (user_id, timestamp DESC);

-- Opaque binary budget payloads
CREATE TABLE IF NOT EXISTS budgets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    contents BLOB NOT NULL
);
"#;
