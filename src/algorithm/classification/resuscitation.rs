//! Resuscitation-method groups
//!
//! Each case is assigned to exactly one group by an ordered list of rules.
//! The first rule that matches wins; a case no rule matches is [`Other`].
//!
//! [`Other`]: ResuscitationGroup::Other

use std::fmt;
use std::str::FromStr;

use crate::config::Vocabulary;

/// Resuscitation method before ambulance arrival
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResuscitationGroup {
    /// CPR guided by the emergency dispatcher over the phone
    Transtelephonic,
    /// No CPR before ambulance arrival
    NoPriorCpr,
    /// CPR by a lay bystander
    LayBystander,
    /// CPR by healthcare staff, police or firefighters
    FirstResponder,
    /// Anything else, including missing codes
    Other,
}

impl ResuscitationGroup {
    /// All groups in canonical report order
    pub const ALL: [Self; 5] = [
        Self::Transtelephonic,
        Self::NoPriorCpr,
        Self::LayBystander,
        Self::FirstResponder,
        Self::Other,
    ];

    /// Report label of the group
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Transtelephonic => "Transtelephonic CPR",
            Self::NoPriorCpr => "No prior CPR",
            Self::LayBystander => "Lay-bystander CPR",
            Self::FirstResponder => "First-responder CPR",
            Self::Other => "Other",
        }
    }

    /// Labels of all groups in canonical order
    #[must_use]
    pub fn labels() -> [&'static str; 5] {
        Self::ALL.map(Self::label)
    }
}

impl fmt::Display for ResuscitationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResuscitationGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.label() == s)
            .ok_or_else(|| format!("Unknown resuscitation group: {s}"))
    }
}

/// The fields of a case the rules look at
#[derive(Debug, Clone, Copy, Default)]
pub struct ResuscitationInput<'a> {
    /// Transtelephonic CPR indicator
    pub transtelephonic: bool,
    /// Bystander CPR type code, trimmed
    pub bystander: Option<&'a str>,
}

/// Condition of a classification rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleCondition {
    /// The transtelephonic indicator is set
    Transtelephonic,
    /// The bystander code is one of the listed codes
    BystanderIn(Vec<String>),
}

impl RuleCondition {
    fn matches(&self, input: &ResuscitationInput<'_>) -> bool {
        match self {
            Self::Transtelephonic => input.transtelephonic,
            Self::BystanderIn(codes) => input
                .bystander
                .is_some_and(|code| codes.iter().any(|c| c == code)),
        }
    }
}

/// One step of the ordered evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRule {
    /// Condition to test
    pub condition: RuleCondition,
    /// Group assigned when the condition holds
    pub group: ResuscitationGroup,
}

/// Ordered first-match-wins classifier
#[derive(Debug, Clone)]
pub struct ResuscitationClassifier {
    rules: Vec<ClassificationRule>,
}

impl ResuscitationClassifier {
    /// Standard rule order: transtelephonic, no CPR, lay bystander, first responder
    #[must_use]
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self::with_rules(vec![
            ClassificationRule {
                condition: RuleCondition::Transtelephonic,
                group: ResuscitationGroup::Transtelephonic,
            },
            ClassificationRule {
                condition: RuleCondition::BystanderIn(vocabulary.no_cpr.clone()),
                group: ResuscitationGroup::NoPriorCpr,
            },
            ClassificationRule {
                condition: RuleCondition::BystanderIn(vocabulary.lay_bystander.clone()),
                group: ResuscitationGroup::LayBystander,
            },
            ClassificationRule {
                condition: RuleCondition::BystanderIn(vocabulary.first_responder.clone()),
                group: ResuscitationGroup::FirstResponder,
            },
        ])
    }

    /// Classifier with an explicit rule list
    #[must_use]
    pub fn with_rules(rules: Vec<ClassificationRule>) -> Self {
        Self { rules }
    }

    /// Rules in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Assign the group of the first matching rule, or `Other`
    #[must_use]
    pub fn classify(&self, input: &ResuscitationInput<'_>) -> ResuscitationGroup {
        self.rules
            .iter()
            .find(|rule| rule.condition.matches(input))
            .map_or(ResuscitationGroup::Other, |rule| rule.group)
    }
}
