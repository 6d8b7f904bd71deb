mod attribute_split_suggestion;
mod gini_split_criterion;
mod info_gain_split_criterion;
mod split_criterion;

pub use attribute_split_suggestion::AttributeSplitSuggestion;
pub use gini_split_criterion::GiniSplitCriterion;
pub use info_gain_split_criterion::{DEFAULT_MIN_BRANCH_FRAC, InfoGainSplitCriterion};
pub use split_criterion::{SplitCriterion, weighted_impurity};
