/// `-p * log2(p)`, with the `0 * log2(0) = 0` convention.
#[inline]
pub fn entropy_term(p: f64) -> f64 {
    if p > 0.0 { -p * libm::log2(p) } else { 0.0 }
}

/// Relative shares of non-negative `weights`, or `None` when they are all zero.
///
/// Weights are divided by the largest one before summing, so the total stays
/// finite for any finite input.
pub fn proportions(weights: &[f64]) -> Option<Vec<f64>> {
    let max = weights.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        return None;
    }
    let scaled: Vec<f64> = weights.iter().map(|w| w / max).collect();
    let total: f64 = scaled.iter().sum();
    Some(scaled.into_iter().map(|w| w / total).collect())
}

/// Weighted mean of `values`, or 0 when the weights sum to zero.
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> f64 {
    debug_assert_eq!(values.len(), weights.len(), "weights length mismatch");
    match proportions(weights) {
        Some(shares) => values.iter().zip(shares).map(|(v, s)| v * s).sum(),
        None => 0.0,
    }
}
