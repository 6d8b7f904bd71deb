use crate::core::ClassDistribution;
use std::cmp::Ordering;

/// Candidate split of a node on one attribute, with the merit it scored.
#[derive(Debug, Clone)]
pub struct AttributeSplitSuggestion {
    attribute: Option<String>,
    split_point: Option<f64>,
    resulting_class_distribution: Vec<ClassDistribution>,
    merit: f64,
}

impl AttributeSplitSuggestion {
    pub fn new(
        attribute: Option<String>,
        resulting_class_distribution: Vec<ClassDistribution>,
        merit: f64,
    ) -> Self {
        Self {
            attribute,
            split_point: None,
            resulting_class_distribution,
            merit,
        }
    }

    /// Marks the suggestion as a binary `value <= split_point` test.
    pub fn with_split_point(mut self, split_point: f64) -> Self {
        self.split_point = Some(split_point);
        self
    }

    /// Name of the attribute split on; `None` for the "do not split" candidate.
    pub fn get_attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    /// Threshold of a numeric split; `None` for a multiway nominal split.
    pub fn get_split_point(&self) -> Option<f64> {
        self.split_point
    }

    pub fn get_resulting_class_distribution(&self) -> &[ClassDistribution] {
        &self.resulting_class_distribution
    }

    pub fn get_merit(&self) -> f64 {
        self.merit
    }

    pub fn number_of_splits(&self) -> usize {
        self.resulting_class_distribution.len()
    }

    pub fn resulting_class_distribution_from_split(&self, split_index: usize) -> Option<&ClassDistribution> {
        self.resulting_class_distribution.get(split_index)
    }
}

impl PartialEq for AttributeSplitSuggestion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AttributeSplitSuggestion {}

impl PartialOrd for AttributeSplitSuggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AttributeSplitSuggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.merit.total_cmp(&other.merit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(name: &str, merit: f64) -> AttributeSplitSuggestion {
        AttributeSplitSuggestion::new(
            Some(name.to_string()),
            vec![ClassDistribution::from_counts([1, 0]), ClassDistribution::from_counts([0, 1])],
            merit,
        )
    }

    #[test]
    fn orders_by_merit() {
        let mut all = vec![suggestion("a", 0.2), suggestion("b", f64::NEG_INFINITY), suggestion("c", 0.7)];
        all.sort();
        let names: Vec<_> = all.iter().filter_map(|s| s.get_attribute()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(all.iter().max().unwrap().get_merit(), 0.7);
    }

    #[test]
    fn exposes_branch_distributions() {
        let s = suggestion("a", 0.1);
        assert_eq!(s.number_of_splits(), 2);
        assert_eq!(s.resulting_class_distribution_from_split(1).unwrap().counts(), &[0.0, 1.0]);
        assert!(s.resulting_class_distribution_from_split(2).is_none());
        assert!(s.get_split_point().is_none());
        assert_eq!(s.with_split_point(2.5).get_split_point(), Some(2.5));
    }
}
