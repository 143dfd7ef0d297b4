//! SQLite cache for downloaded CSV sources.
//!
//! Only the raw response body is stored, keyed by URL. The parsed table is
//! always rebuilt from it.

use crate::error::{DataError, Result};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

/// SQLite cache for downloaded sources.
#[derive(Debug)]
pub struct SqliteCache {
    conn: Connection,
}

/// A cached download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedSource {
    /// URL the body was fetched from
    pub url: String,
    /// Raw response body
    pub body: Vec<u8>,
    /// When the body was fetched
    pub fetched_at: DateTime<Utc>,
}

impl SqliteCache {
    /// Create a new SQLite cache.
    ///
    /// # Arguments
    /// * `path` - Path to the SQLite database file
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let cache = Self { conn };
        cache.initialize_schema()?;
        Ok(cache)
    }

    /// Create an in-memory cache (useful for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let cache = Self { conn };
        cache.initialize_schema()?;
        Ok(cache)
    }

    fn initialize_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS sources (
                url TEXT PRIMARY KEY NOT NULL,
                body BLOB NOT NULL,
                fetched_at TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    /// Get the cached body for a URL, if any.
    pub fn get(&self, url: &str) -> Result<Option<CachedSource>> {
        let row = self
            .conn
            .query_row(
                "SELECT url, body, fetched_at FROM sources WHERE url = ?1",
                params![url],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, Vec<u8>>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .optional()?;

        row.map(|(url, body, fetched_at)| {
            let fetched_at = DateTime::parse_from_rfc3339(&fetched_at)
                .map_err(|e| DataError::Parse(format!("Invalid fetched_at timestamp: {}", e)))?
                .with_timezone(&Utc);
            Ok(CachedSource {
                url,
                body,
                fetched_at,
            })
        })
        .transpose()
    }

    /// Store (or replace) the body for a URL.
    pub fn put(&self, url: &str, body: &[u8]) -> Result<()> {
        let fetched_at = Utc::now().to_rfc3339();

        self.conn.execute(
            "INSERT OR REPLACE INTO sources (url, body, fetched_at) VALUES (?1, ?2, ?3)",
            params![url, body, fetched_at],
        )?;

        Ok(())
    }

    /// Remove the entry for a URL. Returns whether an entry existed.
    pub fn remove(&self, url: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM sources WHERE url = ?1", params![url])?;
        Ok(removed > 0)
    }

    /// Remove every cached entry.
    pub fn clear(&self) -> Result<usize> {
        Ok(self.conn.execute("DELETE FROM sources", [])?)
    }

    /// Get cache statistics.
    pub fn stats(&self) -> Result<CacheStats> {
        let (entries, total_bytes): (i64, i64) = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(LENGTH(body)), 0) FROM sources",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        Ok(CacheStats {
            entries: entries as usize,
            total_bytes: total_bytes as u64,
        })
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cached sources
    pub entries: usize,
    /// Combined size of the cached bodies
    pub total_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.com/historical_automobile_sales.csv";

    #[test]
    fn test_cache_initialization() {
        let cache = SqliteCache::in_memory();
        assert!(cache.is_ok());
    }

    #[test]
    fn test_put_and_get() {
        let cache = SqliteCache::in_memory().unwrap();
        assert!(cache.get(URL).unwrap().is_none());

        cache.put(URL, b"Year,Month\n1980,Jan\n").unwrap();
        let cached = cache.get(URL).unwrap().unwrap();
        assert_eq!(cached.url, URL);
        assert_eq!(cached.body, b"Year,Month\n1980,Jan\n");
        assert!(cached.fetched_at <= Utc::now());
    }

    #[test]
    fn test_put_replaces_existing_body() {
        let cache = SqliteCache::in_memory().unwrap();
        cache.put(URL, b"old").unwrap();
        cache.put(URL, b"new body").unwrap();

        let cached = cache.get(URL).unwrap().unwrap();
        assert_eq!(cached.body, b"new body");
        assert_eq!(cache.stats().unwrap().entries, 1);
    }

    #[test]
    fn test_stats_and_clear() {
        let cache = SqliteCache::in_memory().unwrap();
        assert_eq!(
            cache.stats().unwrap(),
            CacheStats {
                entries: 0,
                total_bytes: 0
            }
        );

        cache.put(URL, b"12345").unwrap();
        cache.put("https://example.com/other.csv", b"abc").unwrap();
        let stats = cache.stats().unwrap();
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.total_bytes, 8);

        assert_eq!(cache.clear().unwrap(), 2);
        assert_eq!(cache.stats().unwrap().entries, 0);
    }

    #[test]
    fn test_remove() {
        let cache = SqliteCache::in_memory().unwrap();
        cache.put(URL, b"data").unwrap();
        assert!(cache.remove(URL).unwrap());
        assert!(!cache.remove(URL).unwrap());
    }
}
