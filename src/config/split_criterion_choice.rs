use crate::core::ImpurityError;
use crate::split_criteria::{GiniSplitCriterion, InfoGainSplitCriterion, SplitCriterion};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_min_branch_frac() -> f64 {
    crate::split_criteria::DEFAULT_MIN_BRANCH_FRAC
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NoParams {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InfoGainParams {
    #[serde(default = "default_min_branch_frac")]
    #[schemars(
        title = "Minimum branch fraction",
        description = "Minimum share of the weight that at least two branches must hold.",
        default = "default_min_branch_frac"
    )]
    pub min_branch_frac: f64,
}
impl Default for InfoGainParams {
    fn default() -> Self {
        Self {
            min_branch_frac: default_min_branch_frac(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(SplitCriterionKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum SplitCriterionChoice {
    #[strum_discriminants(strum(
        message = "Gini Split Criterion",
        detailed_message = "Use Gini gain to choose splits."
    ))]
    GiniSplit(NoParams),
    #[strum_discriminants(strum(
        message = "Information Gain Split Criterion",
        detailed_message = "Use entropy reduction to choose splits."
    ))]
    InfoGainSplit(InfoGainParams),
}
impl Default for SplitCriterionChoice {
    fn default() -> Self {
        Self::InfoGainSplit(InfoGainParams::default())
    }
}

impl SplitCriterionChoice {
    /// JSON Schema for the whole tagged enum.
    pub fn schema() -> Schema {
        schema_for!(SplitCriterionChoice)
    }

    pub fn from_json(document: &str) -> Result<Self, ImpurityError> {
        let choice: Self = serde_json::from_str(document)?;
        choice.validate()?;
        Ok(choice)
    }

    /// Build the typed enum from kind + params.
    pub fn from_parts(kind: SplitCriterionKind, params: Value) -> Result<Self, ImpurityError> {
        let key: &'static str = kind.into();
        let choice: Self = serde_json::from_value(json!({ "type": key, "params": params }))?;
        choice.validate()?;
        Ok(choice)
    }

    pub fn kind(&self) -> SplitCriterionKind {
        self.into()
    }

    fn validate(&self) -> Result<(), ImpurityError> {
        self.build().map(|_| ())
    }

    pub fn build(&self) -> Result<Box<dyn SplitCriterion>, ImpurityError> {
        Ok(match self {
            SplitCriterionChoice::GiniSplit(_) => Box::new(GiniSplitCriterion::new()),
            SplitCriterionChoice::InfoGainSplit(params) => Box::new(
                InfoGainSplitCriterion::with_min_branch_frac(params.min_branch_frac)?,
            ),
        })
    }
}

impl TryFrom<SplitCriterionChoice> for Box<dyn SplitCriterion> {
    type Error = ImpurityError;

    fn try_from(choice: SplitCriterionChoice) -> Result<Self, Self::Error> {
        choice.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClassDistribution;
    use std::str::FromStr;
    use strum::{EnumMessage, IntoEnumIterator};

    #[test]
    fn parses_gini_document() {
        let choice = SplitCriterionChoice::from_json(r#"{"type":"gini-split","params":{}}"#).unwrap();
        assert_eq!(choice, SplitCriterionChoice::GiniSplit(NoParams {}));
        assert_eq!(choice.kind(), SplitCriterionKind::GiniSplit);
    }

    #[test]
    fn info_gain_params_default_when_missing() {
        let choice =
            SplitCriterionChoice::from_json(r#"{"type":"info-gain-split","params":{}}"#).unwrap();
        assert_eq!(choice, SplitCriterionChoice::default());
    }

    #[test]
    fn rejects_out_of_range_min_branch_frac() {
        let err = SplitCriterionChoice::from_json(
            r#"{"type":"info-gain-split","params":{"min_branch_frac":0.9}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ImpurityError::InvalidParameter(_)));
    }

    #[test]
    fn rejects_unknown_type() {
        let err = SplitCriterionChoice::from_json(r#"{"type":"twoing","params":{}}"#).unwrap_err();
        assert!(matches!(err, ImpurityError::Json(_)));
    }

    #[test]
    fn from_parts_round_trips_every_kind() {
        for kind in SplitCriterionKind::iter() {
            let choice = SplitCriterionChoice::from_parts(kind, json!({})).unwrap();
            assert_eq!(choice.kind(), kind);
            assert!(kind.get_message().is_some());
        }
        assert_eq!(
            SplitCriterionKind::from_str("info-gain-split").unwrap(),
            SplitCriterionKind::InfoGainSplit
        );
    }

    #[test]
    fn built_criterion_scores_splits() {
        let criterion: Box<dyn SplitCriterion> = SplitCriterionChoice::from_parts(
            SplitCriterionKind::GiniSplit,
            json!({}),
        )
        .unwrap()
        .try_into()
        .unwrap();
        let pre = ClassDistribution::from_counts([5, 5]);
        let post = vec![ClassDistribution::from_counts([5, 0]), ClassDistribution::from_counts([0, 5])];
        assert_eq!(criterion.get_merit_of_split(&pre, &post), 0.5);
    }

    #[test]
    fn try_from_rejects_invalid_params() {
        let choice = SplitCriterionChoice::InfoGainSplit(InfoGainParams { min_branch_frac: -1.0 });
        let built: Result<Box<dyn SplitCriterion>, _> = choice.try_into();
        assert!(matches!(built, Err(ImpurityError::InvalidParameter(_))));
    }

    #[test]
    fn schema_mentions_both_variants() {
        let schema = serde_json::to_string(&SplitCriterionChoice::schema()).unwrap();
        assert!(schema.contains("gini-split"));
        assert!(schema.contains("info-gain-split"));
    }
}
