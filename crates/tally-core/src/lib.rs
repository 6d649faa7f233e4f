//! tally-core: Search history and budget record store
//!
//! This crate provides the core functionality for recording per-user search
//! history entries and storing opaque binary budget payloads, both backed by
//! a single SQLite database.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod schema;

pub use config::Config;
pub use db::Database;
pub use error::Error;
pub use error::Result;

/// Application name used for config directories and paths.
pub const APP_NAME: &str = "tally";

/// Returns the environment variable prefix for this application.
pub fn env_prefix() -> String {
    "TALLY".to_string()
}
