//! Algorithms for the descriptive analysis
//!
//! This module contains the case classification rules and the statistics
//! primitives the analyzers are built from.

pub mod classification;
pub mod statistics;
