//! Arrow data handling utilities
//!
//! This module contains utilities for reading typed values out of Arrow
//! record batches whose column types were inferred at load time.

pub mod array_utils;
pub mod extractors;

// Re-export commonly used functions for convenience
pub use array_utils::{downcast_array, get_column};
pub use extractors::{flag_values, float_values, parse_flag, string_values};
