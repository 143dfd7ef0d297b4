//! Data pipeline for loading the sales table.
//!
//! Remote sources go through the SQLite download cache: a cached body is
//! reused unless a refresh is forced, and fresh downloads are stored back.
//! Cache failures never stop the load.

use super::cache_manager;
use autosales::SalesTable;
use autosales::data::{DataError, DataSource, SourceClient, SqliteCache};
use indicatif::ProgressBar;
use tracing::{info, warn};

/// Configuration for table loading.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LoadConfig {
    /// Whether to use the cache.
    pub use_cache: bool,
    /// Whether to force refresh (ignore cached bodies).
    pub force_refresh: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            use_cache: true,
            force_refresh: false,
        }
    }
}

/// Load the sales table from a file or URL.
pub(crate) async fn load_table(
    source: &DataSource,
    config: LoadConfig,
    progress: Option<&ProgressBar>,
) -> Result<SalesTable, DataError> {
    let url = match source {
        DataSource::File(path) => {
            set_message(progress, format!("Reading {}...", path.display()));
            return SalesTable::from_path(path);
        }
        DataSource::Url(url) => url,
    };

    let cache = if config.use_cache {
        cache_manager::open_cache()
            .map_err(|e| warn!("Cache unavailable, downloading without it: {}", e))
            .ok()
    } else {
        None
    };

    load_remote(url, cache.as_ref(), config, progress).await
}

async fn load_remote(
    url: &str,
    cache: Option<&SqliteCache>,
    config: LoadConfig,
    progress: Option<&ProgressBar>,
) -> Result<SalesTable, DataError> {
    if let Some(cache) = cache
        && !config.force_refresh
        && let Some(table) = load_cached(cache, url)
    {
        return Ok(table);
    }

    set_message(progress, "Downloading sales data...");
    let body = SourceClient::new()?.fetch(url).await?;
    let table = SalesTable::from_csv_bytes(&body)?;

    if let Some(cache) = cache
        && let Err(e) = cache.put(url, &body)
    {
        warn!("Failed to cache {}: {}", url, e);
    }

    Ok(table)
}

/// Rebuild the table from a cached body, if one exists.
///
/// A failed lookup or an unparsable cached body counts as a miss.
pub(crate) fn load_cached(cache: &SqliteCache, url: &str) -> Option<SalesTable> {
    let cached = match cache.get(url) {
        Ok(cached) => cached,
        Err(e) => {
            warn!("Failed to read cache for {}: {}", url, e);
            None
        }
    };

    let cached = cached?;

    match SalesTable::from_csv_bytes(&cached.body) {
        Ok(table) => {
            info!(
                url,
                fetched_at = %cached.fetched_at,
                "using cached sales data"
            );
            Some(table)
        }
        Err(e) => {
            warn!("Ignoring unreadable cached body for {}: {}", url, e);
            None
        }
    }
}

fn set_message(progress: Option<&ProgressBar>, message: impl Into<String>) {
    if let Some(pb) = progress {
        pb.set_message(message.into());
    }
}

/// Print cache location and contents.
pub(crate) fn print_cache_info() {
    let path = cache_manager::default_cache_path();
    println!("  Cache location: {}", path.display());
    match cache_manager::open_cache().and_then(|cache| cache.stats()) {
        Ok(stats) => println!(
            "  Cached data: {} source(s), {} bytes",
            stats.entries, stats.total_bytes
        ),
        Err(e) => println!("  Cache unavailable: {}", e),
    }
}
