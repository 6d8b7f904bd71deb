use crate::core::{ClassDistribution, ImpurityError};
use crate::impurity::Impurity;
use crate::split_criteria::split_criterion::{SplitCriterion, branch_weights, weighted_impurity};
use crate::utils::math::proportions;
use log::trace;

pub const DEFAULT_MIN_BRANCH_FRAC: f64 = 0.01;

/// Information gain: the drop in entropy achieved by a split.
///
/// A split where fewer than two branches carry more than `min_branch_frac` of
/// the weight is scored `f64::NEG_INFINITY`.
#[derive(Debug, Clone, Copy)]
pub struct InfoGainSplitCriterion {
    min_branch_frac: f64,
}

impl InfoGainSplitCriterion {
    pub fn new() -> Self {
        Self {
            min_branch_frac: DEFAULT_MIN_BRANCH_FRAC,
        }
    }

    pub fn with_min_branch_frac(min_branch_frac: f64) -> Result<Self, ImpurityError> {
        if !(0.0..=0.5).contains(&min_branch_frac) {
            return Err(ImpurityError::InvalidParameter(format!(
                "min_branch_frac must be within [0, 0.5], got {min_branch_frac}"
            )));
        }
        Ok(Self { min_branch_frac })
    }

    pub fn min_branch_frac(&self) -> f64 {
        self.min_branch_frac
    }

    fn num_subsets_greater_than_frac(&self, post_split_dists: &[ClassDistribution]) -> usize {
        match proportions(&branch_weights(post_split_dists)) {
            Some(shares) => shares.iter().filter(|&&s| s > self.min_branch_frac).count(),
            None => 0,
        }
    }
}

impl Default for InfoGainSplitCriterion {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitCriterion for InfoGainSplitCriterion {
    fn get_range_of_merit(&self, pre_split_distribution: &ClassDistribution) -> f64 {
        let num_classes = pre_split_distribution.num_classes().max(2);
        libm::log2(num_classes as f64)
    }

    fn get_merit_of_split(
        &self,
        pre_split_distribution: &ClassDistribution,
        post_split_dists: &[ClassDistribution],
    ) -> f64 {
        if self.num_subsets_greater_than_frac(post_split_dists) < 2 {
            return f64::NEG_INFINITY;
        }
        let before = pre_split_distribution.entropy();
        let after = weighted_impurity(Impurity::Entropy, post_split_dists);
        trace!("entropy before={before:.6} after={after:.6}");
        before - after
    }
}
