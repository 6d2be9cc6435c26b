//! Ordered keyword rules mapping a question to the attribute it asks about.
//!
//! Rules are tested in table order against the lowercased question; the
//! first rule with a matching keyword whose scope admits the lookup kind
//! wins. A question matching nothing gets the summary.

use smelter_core::config::InterpreterConfig;
use smelter_core::types::LookupKind;

/// The batch attribute an answer reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Uts,
    Elongation,
    Conductivity,
    Grade,
    Material,
    Composition,
    Timestamp,
    /// UTS, elongation, conductivity, grade and material together.
    Summary,
}

impl Attribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Uts => "uts",
            Attribute::Elongation => "elongation",
            Attribute::Conductivity => "conductivity",
            Attribute::Grade => "grade",
            Attribute::Material => "material",
            Attribute::Composition => "composition",
            Attribute::Timestamp => "timestamp",
            Attribute::Summary => "summary",
        }
    }
}

/// Which lookup kinds a rule applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleScope {
    AnyKey,
    BatchIdOnly,
}

impl RuleScope {
    pub fn admits(&self, kind: LookupKind) -> bool {
        match self {
            RuleScope::AnyKey => true,
            RuleScope::BatchIdOnly => kind == LookupKind::BatchId,
        }
    }
}

/// A single keyword rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Lowercase substrings; any one of them triggers the rule.
    pub keywords: &'static [&'static str],
    pub attribute: Attribute,
    pub scope: RuleScope,
}

impl Rule {
    const fn new(
        keywords: &'static [&'static str],
        attribute: Attribute,
        scope: RuleScope,
    ) -> Self {
        Self {
            keywords,
            attribute,
            scope,
        }
    }

    /// True if `lowered` contains any keyword and the scope admits `kind`.
    pub fn matches(&self, lowered: &str, kind: LookupKind) -> bool {
        self.scope.admits(kind) && self.keywords.iter().any(|k| lowered.contains(*k))
    }
}

const STRENGTH_KEYWORDS: &[&str] = &["uts", "ultimate", "tensile", "strength"];

/// Ordered rule list. Order is the tie-break.
#[derive(Clone, Debug)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleTable {
    /// Grade, material and timestamp answer only for batch-id lookups.
    pub fn standard() -> Self {
        Self::build(RuleScope::BatchIdOnly)
    }

    /// Grade and material answer for timestamp lookups too.
    ///
    /// The timestamp rule stays batch-id only: a question phrased
    /// "at timestamp ..." would otherwise always select it.
    pub fn uniform() -> Self {
        Self::build(RuleScope::AnyKey)
    }

    pub fn from_config(config: &InterpreterConfig) -> Self {
        if config.uniform_timestamp_rules {
            Self::uniform()
        } else {
            Self::standard()
        }
    }

    fn build(classifier_scope: RuleScope) -> Self {
        use Attribute::*;
        use RuleScope::*;

        Self {
            rules: vec![
                Rule::new(STRENGTH_KEYWORDS, Uts, AnyKey),
                Rule::new(&["elongation"], Elongation, AnyKey),
                Rule::new(&["conductivity"], Conductivity, AnyKey),
                Rule::new(&["grade"], Grade, classifier_scope),
                Rule::new(&["material"], Material, classifier_scope),
                Rule::new(&["composition"], Composition, AnyKey),
                Rule::new(&["timestamp"], Timestamp, BatchIdOnly),
            ],
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Pick the attribute for an already-lowercased question.
    pub fn classify(&self, lowered: &str, kind: LookupKind) -> Attribute {
        self.rules
            .iter()
            .find(|rule| rule.matches(lowered, kind))
            .map(|rule| rule.attribute)
            .unwrap_or(Attribute::Summary)
    }
}
