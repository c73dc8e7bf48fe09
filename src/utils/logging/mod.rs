//! Logging utilities for output and operation tracking
//!
//! This module provides utilities for logging and console output.

pub mod console;
pub mod log;

// Re-export commonly used functions for convenience
pub use console::{BANNER_WIDTH, SECTION_WIDTH, write_banner, write_rule, write_section};
pub use log::{log_operation_complete, log_operation_start, log_warning};
