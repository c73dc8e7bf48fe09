//! Derivation rules for the per-case grouping attributes

pub mod age;
pub mod cpc;
pub mod resuscitation;

pub use age::{AGE_BAND_THRESHOLD, AgeBand, age_band};
pub use cpc::{CPC_LABELS, favorable_cpc, parse_cpc};
pub use resuscitation::{
    ClassificationRule, ResuscitationClassifier, ResuscitationGroup, ResuscitationInput,
    RuleCondition,
};
