use crate::core::ClassDistribution;
use crate::impurity::Impurity;
use crate::utils::math::weighted_mean;

/// Scores a candidate split of a node into branches.
pub trait SplitCriterion {
    /// Width of the interval the merit can fall in for this pre-split distribution.
    fn get_range_of_merit(&self, pre_split_distribution: &ClassDistribution) -> f64;

    /// Merit of splitting `pre_split_distribution` into `post_split_dists`.
    /// Higher is better; `f64::NEG_INFINITY` marks an unusable split.
    fn get_merit_of_split(
        &self,
        pre_split_distribution: &ClassDistribution,
        post_split_dists: &[ClassDistribution],
    ) -> f64;
}

/// Impurity of the branches weighted by their share of the post-split total.
pub fn weighted_impurity(measure: Impurity, post_split_dists: &[ClassDistribution]) -> f64 {
    let impurities: Vec<f64> = post_split_dists.iter().map(|d| measure.compute(d)).collect();
    weighted_mean(&impurities, &branch_weights(post_split_dists))
}

/// Branch totals scaled by the largest single count, so they stay finite.
pub(crate) fn branch_weights(post_split_dists: &[ClassDistribution]) -> Vec<f64> {
    let max = post_split_dists
        .iter()
        .flat_map(|d| d.counts().iter().copied())
        .fold(0.0, f64::max);
    if max <= 0.0 {
        return vec![0.0; post_split_dists.len()];
    }
    post_split_dists
        .iter()
        .map(|d| d.counts().iter().map(|c| c / max).sum())
        .collect()
}
