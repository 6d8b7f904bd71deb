use crate::core::error::ImpurityError;
use crate::impurity::{entropy_of, gini_of};
use crate::utils::math::proportions;
use serde::{Deserialize, Serialize};

/// Per-class weights observed at a dataset or tree node.
///
/// Entries are finite and non-negative. The distribution may be empty or
/// all-zero, which describes an empty node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ClassDistribution {
    counts: Vec<f64>,
}

impl ClassDistribution {
    pub fn new(counts: Vec<f64>) -> Result<Self, ImpurityError> {
        validate(&counts)?;
        Ok(Self { counts })
    }

    pub fn from_counts<I: IntoIterator<Item = u64>>(counts: I) -> Self {
        Self {
            counts: counts.into_iter().map(|c| c as f64).collect(),
        }
    }

    /// An all-zero distribution over `num_classes` classes.
    pub fn zeros(num_classes: usize) -> Self {
        Self {
            counts: vec![0.0; num_classes],
        }
    }

    /// Tallies `labels` against the fixed class list `classes`.
    pub fn from_labels<L, S>(labels: L, classes: &[S]) -> Result<Self, ImpurityError>
    where
        L: IntoIterator,
        L::Item: AsRef<str>,
        S: AsRef<str>,
    {
        let mut dist = Self::zeros(classes.len());
        for label in labels {
            let label = label.as_ref();
            let index = classes
                .iter()
                .position(|c| c.as_ref() == label)
                .ok_or_else(|| ImpurityError::UnknownValue {
                    attribute: "class".to_string(),
                    value: label.to_string(),
                })?;
            dist.counts[index] += 1.0;
        }
        Ok(dist)
    }

    pub fn add_count(&mut self, class_index: usize, weight: f64) -> Result<(), ImpurityError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(ImpurityError::InvalidDistribution {
                index: class_index,
                value: weight,
            });
        }
        let current = self.counts.get(class_index).copied().unwrap_or(0.0);
        let updated = current + weight;
        if !updated.is_finite() {
            return Err(ImpurityError::InvalidDistribution {
                index: class_index,
                value: updated,
            });
        }
        if class_index >= self.counts.len() {
            self.counts.resize(class_index + 1, 0.0);
        }
        self.counts[class_index] = updated;
        Ok(())
    }

    pub fn counts(&self) -> &[f64] {
        &self.counts
    }

    pub fn num_classes(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> f64 {
        self.counts.iter().sum()
    }

    /// True when no weight has been observed.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0.0)
    }

    /// True when all weight sits in a single class.
    pub fn is_pure(&self) -> bool {
        !self.is_empty() && self.counts.iter().filter(|&&c| c > 0.0).count() == 1
    }

    /// Relative frequencies; all zeros for an empty node.
    pub fn probabilities(&self) -> Vec<f64> {
        proportions(&self.counts).unwrap_or_else(|| vec![0.0; self.counts.len()])
    }

    pub fn entropy(&self) -> f64 {
        entropy_of(&self.counts)
    }

    pub fn gini(&self) -> f64 {
        gini_of(&self.counts)
    }
}

pub(crate) fn validate(counts: &[f64]) -> Result<(), ImpurityError> {
    match counts
        .iter()
        .enumerate()
        .find(|(_, c)| !c.is_finite() || **c < 0.0)
    {
        Some((index, &value)) => Err(ImpurityError::InvalidDistribution { index, value }),
        None => Ok(()),
    }
}

impl TryFrom<Vec<f64>> for ClassDistribution {
    type Error = ImpurityError;

    fn try_from(counts: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(counts)
    }
}

impl From<ClassDistribution> for Vec<f64> {
    fn from(dist: ClassDistribution) -> Self {
        dist.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_negative_counts() {
        let err = ClassDistribution::new(vec![3.0, -1.0]).unwrap_err();
        assert!(matches!(
            err,
            ImpurityError::InvalidDistribution { index: 1, value } if value == -1.0
        ));
    }

    #[test]
    fn new_rejects_non_finite_counts() {
        assert!(ClassDistribution::new(vec![f64::NAN]).is_err());
        assert!(ClassDistribution::new(vec![1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn empty_and_all_zero_are_empty_nodes() {
        let empty = ClassDistribution::new(vec![]).unwrap();
        assert!(empty.is_empty());
        assert!(!empty.is_pure());
        assert_eq!(empty.entropy(), 0.0);

        let zeros = ClassDistribution::zeros(3);
        assert!(zeros.is_empty());
        assert_eq!(zeros.probabilities(), vec![0.0, 0.0, 0.0]);
        assert_eq!(zeros.gini(), 0.0);
    }

    #[test]
    fn from_counts_and_probabilities() {
        let dist = ClassDistribution::from_counts([6, 4]);
        assert_eq!(dist.total(), 10.0);
        assert_eq!(dist.num_classes(), 2);
        let probs = dist.probabilities();
        assert!((probs[0] - 0.6).abs() < 1e-12 && (probs[1] - 0.4).abs() < 1e-12, "{probs:?}");
        assert!(!dist.is_pure());
    }

    #[test]
    fn pure_node_is_detected() {
        let dist = ClassDistribution::from_counts([0, 10, 0]);
        assert!(dist.is_pure());
        assert_eq!(dist.entropy(), 0.0);
        assert_eq!(dist.gini(), 0.0);
    }

    #[test]
    fn from_labels_tallies_against_class_list() {
        let dist = ClassDistribution::from_labels(["yes", "no", "yes", "yes"], &["yes", "no"]).unwrap();
        assert_eq!(dist.counts(), &[3.0, 1.0]);
    }

    #[test]
    fn from_labels_rejects_unknown_label() {
        let err = ClassDistribution::from_labels(["maybe"], &["yes", "no"]).unwrap_err();
        assert!(matches!(err, ImpurityError::UnknownValue { ref value, .. } if value == "maybe"));
    }

    #[test]
    fn add_count_grows_and_validates() {
        let mut dist = ClassDistribution::zeros(1);
        dist.add_count(2, 1.5).unwrap();
        assert_eq!(dist.counts(), &[0.0, 0.0, 1.5]);
        assert!(dist.add_count(0, -2.0).is_err());
        assert_eq!(dist.total(), 1.5);
    }

    #[test]
    fn huge_counts_are_not_an_empty_node() {
        let dist = ClassDistribution::new(vec![1e308, 1e308]).unwrap();
        assert!(!dist.is_empty());
        assert_eq!(dist.probabilities(), vec![0.5, 0.5]);
        assert_eq!(dist.entropy(), 1.0);
        assert_eq!(dist.gini(), 0.5);
    }

    #[test]
    fn add_count_rejects_overflowing_weight() {
        let mut dist = ClassDistribution::new(vec![f64::MAX, 1.0]).unwrap();
        let err = dist.add_count(0, f64::MAX).unwrap_err();
        assert!(matches!(err, ImpurityError::InvalidDistribution { index: 0, value } if value.is_infinite()));
        assert_eq!(dist.counts(), &[f64::MAX, 1.0]);
    }

    #[test]
    fn serde_goes_through_validation() {
        let dist: ClassDistribution = serde_json::from_str("[9.0, 5.0]").unwrap();
        assert_eq!(dist.counts(), &[9.0, 5.0]);
        assert_eq!(serde_json::to_string(&dist).unwrap(), "[9.0,5.0]");
        assert!(serde_json::from_str::<ClassDistribution>("[1.0, -3.0]").is_err());
    }
}
