#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/autosales/autosales/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod error;
pub mod source;
pub mod table;

pub use cache::{CacheStats, CachedSource, SqliteCache};
pub use error::{DataError, Result};
pub use source::{DEFAULT_SOURCE_URL, DataSource, SourceClient};
pub use table::{SalesTable, columns, normalize_vehicle_type};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
