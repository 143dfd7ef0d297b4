#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/autosales/autosales/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod dashboard;

// Re-export main types from sub-crates
pub use autosales_charts as charts;
pub use autosales_data as data;
pub use autosales_stats as stats;

// Re-export the types most callers need
pub use autosales_data::SalesTable;
pub use autosales_stats::{Report, ReportKind, Statistic, run_report};
pub use dashboard::{DashboardConfig, DashboardServer};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
