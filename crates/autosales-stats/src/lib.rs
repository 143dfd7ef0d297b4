#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/autosales/autosales/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod error;
pub mod registry;
pub mod report;
pub mod statistic;

pub use aggregate::{AggFn, GroupOrder, GroupedAggregate, GroupedSeries};
pub use error::{Result, StatsError};
pub use registry::{
    ChartKind, StatisticInfo, available_statistics, get_statistic_info, statistics_for,
};
pub use report::{
    RecessionTables, Report, ReportKind, YEAR_RANGE, YearlyTables, run_report, year_options,
};
pub use statistic::Statistic;
