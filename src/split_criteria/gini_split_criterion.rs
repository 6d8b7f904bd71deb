use crate::core::ClassDistribution;
use crate::impurity::Impurity;
use crate::split_criteria::split_criterion::{SplitCriterion, weighted_impurity};
use log::trace;

/// Gini gain: the drop in Gini impurity achieved by a split.
#[derive(Debug, Default, Clone, Copy)]
pub struct GiniSplitCriterion {}

impl GiniSplitCriterion {
    pub fn new() -> Self {
        Self {}
    }
}

impl SplitCriterion for GiniSplitCriterion {
    fn get_range_of_merit(&self, _pre_split_distribution: &ClassDistribution) -> f64 {
        1.0
    }

    fn get_merit_of_split(
        &self,
        pre_split_distribution: &ClassDistribution,
        post_split_dists: &[ClassDistribution],
    ) -> f64 {
        let before = pre_split_distribution.gini();
        let after = weighted_impurity(Impurity::Gini, post_split_dists);
        trace!("gini before={before:.6} after={after:.6}");
        before - after
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dists(counts: &[[u64; 2]]) -> Vec<ClassDistribution> {
        counts.iter().map(|c| ClassDistribution::from_counts(*c)).collect()
    }

    #[test]
    fn perfect_split_recovers_all_impurity() {
        let pre = ClassDistribution::from_counts([5, 5]);
        let merit = GiniSplitCriterion::new().get_merit_of_split(&pre, &dists(&[[5, 0], [0, 5]]));
        assert_eq!(merit, 0.5);
    }

    #[test]
    fn uninformative_split_has_no_merit() {
        let pre = ClassDistribution::from_counts([6, 4]);
        let merit = GiniSplitCriterion::new().get_merit_of_split(&pre, &dists(&[[3, 2], [3, 2]]));
        assert!(merit.abs() < 1e-12, "merit={merit}");
    }

    #[test]
    fn range_is_one() {
        let pre = ClassDistribution::from_counts([1, 2, 3]);
        assert_eq!(GiniSplitCriterion::new().get_range_of_merit(&pre), 1.0);
    }
}
