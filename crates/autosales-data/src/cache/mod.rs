//! Caching layer for the downloaded sales CSV.

pub mod sqlite;

pub use sqlite::{CacheStats, CachedSource, SqliteCache};
