use crate::core::ImpurityError;
use crate::core::class_distribution::validate;
use crate::utils::math::proportions;

/// Gini impurity `1 - sum(p_i^2)` of a class-count distribution.
///
/// An empty or all-zero distribution has impurity 0. Negative or non-finite
/// counts are rejected.
pub fn compute_gini(counts: &[f64]) -> Result<f64, ImpurityError> {
    validate(counts)?;
    Ok(gini_of(counts))
}

pub(crate) fn gini_of(counts: &[f64]) -> f64 {
    let Some(probabilities) = proportions(counts) else {
        return 0.0;
    };

    let mut gini = 1.0;
    for rel_freq in probabilities {
        gini -= rel_freq * rel_freq;
    }
    // rounding can leave a pure node a hair below zero
    gini.max(0.0)
}
