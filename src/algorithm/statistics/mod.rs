//! Statistics primitives
//!
//! - [`descriptive`]: mean, median, range and standard deviation
//! - [`frequency`]: category counts with percentages
//! - [`group`]: rates of a binary indicator per group

pub mod descriptive;
pub mod frequency;
pub mod group;

pub use descriptive::DescriptiveStats;
pub use frequency::{FrequencyEntry, FrequencyTable, MISSING_LABEL};
pub use group::{GroupRate, group_rates};
