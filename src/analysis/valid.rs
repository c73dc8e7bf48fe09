//! Group-wise statistics of the valid cases
//!
//! Works on the table returned by [`derive_columns`](super::derive_columns):
//! grouping attributes are read back from the derived columns.

use arrow::record_batch::RecordBatch;

use crate::algorithm::classification::{AgeBand, ResuscitationGroup, parse_cpc};
use crate::algorithm::statistics::{DescriptiveStats, FrequencyTable, GroupRate, group_rates};
use crate::analysis::timing::{TimingSummary, summarize_timing};
use crate::analysis::{
    AGE_BAND_COLUMN, FAVORABLE_CPC_COLUMN, Outcome, RESUSCITATION_GROUP_COLUMN, VALID_TABLE,
};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::utils::arrow::{flag_values, float_values, string_values};

/// Rates of one outcome per group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeRates {
    /// The outcome
    pub outcome: Outcome,
    /// Positives over group size, per group present
    pub rates: Vec<GroupRate>,
}

/// Age-stratified view of the valid cases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeStratification {
    /// Cases per band, over cases with a band
    pub distribution: FrequencyTable,
    /// Cases left out for lack of a usable age
    pub missing_age: usize,
    /// Outcome rates per band
    pub outcomes: Vec<OutcomeRates>,
}

/// All statistics of the valid cases
#[derive(Debug, Clone, PartialEq)]
pub struct ValidCaseAnalysis {
    /// Number of valid cases
    pub total: usize,
    /// Cases per resuscitation group, all five groups listed
    pub groups: FrequencyTable,
    /// ROSC and 7-day survival rates per resuscitation group, where present
    pub outcomes_by_group: Vec<OutcomeRates>,
    /// Favorable-CPC rate per resuscitation group
    pub favorable_cpc_by_group: Vec<GroupRate>,
    /// Age stratification; `None` without an age column
    pub age_stratification: Option<AgeStratification>,
    /// Arrival time over non-missing values
    pub arrival_time: Option<TimingSummary>,
    /// CPR duration over strictly positive values
    pub cpr_duration: Option<TimingSummary>,
    /// Age statistics over non-missing ages
    pub age: Option<DescriptiveStats>,
    /// Cases per sex, missing included; `None` without a sex column
    pub sex: Option<FrequencyTable>,
    /// Positive count of every outcome whose column is present
    pub outcome_positives: Vec<(Outcome, usize)>,
    /// Cases per CPC category 1 to 5
    pub cpc_categories: [usize; 5],
}

impl ValidCaseAnalysis {
    /// Positive count of an outcome, `None` when its column was absent
    #[must_use]
    pub fn positives(&self, outcome: Outcome) -> Option<usize> {
        self.outcome_positives
            .iter()
            .find(|(o, _)| *o == outcome)
            .map(|(_, count)| *count)
    }
}

/// Compute every group-wise statistic of the extended valid-cases table
pub fn analyze_valid_cases(
    extended: &RecordBatch,
    config: &ReportConfig,
) -> Result<ValidCaseAnalysis> {
    let columns = &config.columns;
    let total = extended.num_rows();

    let groups =
        string_values(extended, RESUSCITATION_GROUP_COLUMN, true, VALID_TABLE)?.unwrap_or_default();
    let group_keys = || groups.iter().map(Option::as_deref);
    let group_order = ResuscitationGroup::labels();

    // Favorable CPC is always defined, ROSC and survival only when present
    let mut indicators: Vec<(Outcome, Vec<bool>)> = Vec::new();
    for (outcome, column) in [
        (Outcome::Rosc, columns.rosc.as_str()),
        (Outcome::Survival7d, columns.survival_7d.as_str()),
    ] {
        if let Some(values) = flag_values(extended, column, false, VALID_TABLE)? {
            indicators.push((outcome, values));
        }
    }
    let favorable =
        flag_values(extended, FAVORABLE_CPC_COLUMN, true, VALID_TABLE)?.unwrap_or_default();

    let outcomes_by_group = indicators
        .iter()
        .map(|(outcome, values)| OutcomeRates {
            outcome: *outcome,
            rates: group_rates(group_keys(), values.iter().copied(), &group_order),
        })
        .collect();
    let favorable_cpc_by_group =
        group_rates(group_keys(), favorable.iter().copied(), &group_order);

    indicators.push((Outcome::FavorableCpc, favorable));

    let age_stratification = string_values(extended, AGE_BAND_COLUMN, false, VALID_TABLE)?
        .map(|bands| stratify_by_age(&bands, &indicators));

    let arrival_time = float_values(extended, &columns.arrival_time, false, VALID_TABLE)?
        .and_then(|values| summarize_timing(&values, false));
    let cpr_duration = float_values(extended, &columns.cpr_duration, false, VALID_TABLE)?
        .and_then(|values| summarize_timing(&values, true));

    let age = float_values(extended, &columns.age, false, VALID_TABLE)?
        .and_then(|ages| DescriptiveStats::new(ages.into_iter().flatten()));
    let sex = string_values(extended, &columns.sex, false, VALID_TABLE)?
        .map(|values| FrequencyTable::by_count(values.iter().map(Option::as_deref)));

    let outcome_positives = indicators
        .iter()
        .map(|(outcome, values)| (*outcome, values.iter().filter(|v| **v).count()))
        .collect();

    let mut cpc_categories = [0; 5];
    for value in string_values(extended, &columns.cpc, true, VALID_TABLE)?.unwrap_or_default() {
        if let Some(category) = parse_cpc(value.as_deref()) {
            cpc_categories[usize::from(category) - 1] += 1;
        }
    }

    Ok(ValidCaseAnalysis {
        total,
        groups: FrequencyTable::in_order(group_keys(), &group_order),
        outcomes_by_group,
        favorable_cpc_by_group,
        age_stratification,
        arrival_time,
        cpr_duration,
        age,
        sex,
        outcome_positives,
        cpc_categories,
    })
}

fn stratify_by_age(
    bands: &[Option<String>],
    indicators: &[(Outcome, Vec<bool>)],
) -> AgeStratification {
    let band_keys = || bands.iter().map(Option::as_deref);
    let band_order = AgeBand::labels();

    AgeStratification {
        distribution: FrequencyTable::in_order(band_keys(), &band_order),
        missing_age: bands.iter().filter(|b| b.is_none()).count(),
        outcomes: indicators
            .iter()
            .map(|(outcome, values)| OutcomeRates {
                outcome: *outcome,
                rates: group_rates(band_keys(), values.iter().copied(), &band_order),
            })
            .collect(),
    }
}
