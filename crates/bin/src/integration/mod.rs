//! Integration module for the CLI.
//!
//! Ties the download cache to table loading so every subcommand reads the
//! sales data the same way.

pub(crate) mod cache_manager;
pub(crate) mod data_pipeline;
