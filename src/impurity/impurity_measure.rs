use crate::core::ClassDistribution;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Impurity measure applied to a class distribution.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    EnumMessage,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Impurity {
    #[strum(message = "Entropy", detailed_message = "Shannon entropy in bits.")]
    Entropy,
    #[strum(
        message = "Gini index",
        detailed_message = "Probability that two random draws have different labels."
    )]
    Gini,
}

impl Impurity {
    pub fn compute(&self, dist: &ClassDistribution) -> f64 {
        match self {
            Impurity::Entropy => dist.entropy(),
            Impurity::Gini => dist.gini(),
        }
    }

    /// Largest value the measure can take over `num_classes` classes.
    pub fn max_value(&self, num_classes: usize) -> f64 {
        if num_classes <= 1 {
            return 0.0;
        }
        let k = num_classes as f64;
        match self {
            Impurity::Entropy => libm::log2(k),
            Impurity::Gini => 1.0 - 1.0 / k,
        }
    }
}
