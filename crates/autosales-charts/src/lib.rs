#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/autosales/autosales/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod figure;
pub mod grid;
pub mod layout;
pub mod summary;

pub use export::{ExportError, ExportFormat, Exporter};
pub use figure::{Axis, Figure, Layout, Trace};
pub use grid::{ChartGrid, ChartItem, ChartRow};
pub use layout::{chart_title, recession_grid, report_grid, statistic_figure, yearly_grid};
pub use summary::ReportSummary;
