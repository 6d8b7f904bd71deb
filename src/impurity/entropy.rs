use crate::core::ImpurityError;
use crate::core::class_distribution::validate;
use crate::utils::math::{entropy_term, proportions};

/// Shannon entropy, in bits, of a class-count distribution.
///
/// An empty or all-zero distribution has entropy 0. Zero counts contribute
/// nothing. Negative or non-finite counts are rejected.
pub fn compute_entropy(counts: &[f64]) -> Result<f64, ImpurityError> {
    validate(counts)?;
    Ok(entropy_of(counts))
}

/// Entropy of counts already known to be valid.
pub(crate) fn entropy_of(counts: &[f64]) -> f64 {
    let Some(probabilities) = proportions(counts) else {
        return 0.0;
    };

    let mut entropy = 0.0;
    for p in probabilities {
        if p > 0.0 {
            entropy += entropy_term(p);
        }
    }
    entropy
}
