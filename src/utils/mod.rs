//! Shared utilities
//!
//! Arrow column access, logging and console helpers, and number formatting.

pub mod arrow;
pub mod format;
pub mod logging;

pub use format::{format_count, format_count_pct, format_mean_sd, percentage};
