use crate::core::attributes::{Attribute, NominalAttribute, midpoints};
use crate::core::{ClassDistribution, ImpurityError};
use crate::split_criteria::{AttributeSplitSuggestion, SplitCriterion};
use log::debug;

/// Nominal values are stored as their index, numeric values as-is.
struct Row {
    values: Vec<f64>,
    label: usize,
}

/// Table of nominal and numeric observations with a nominal class column.
pub struct DataTable {
    attributes: Vec<Attribute>,
    class_attribute: NominalAttribute,
    rows: Vec<Row>,
}

impl DataTable {
    pub fn new(attributes: Vec<Attribute>, class_attribute: NominalAttribute) -> Self {
        Self {
            attributes,
            class_attribute,
            rows: Vec::new(),
        }
    }

    pub fn push_row<S: AsRef<str>>(&mut self, values: &[S], label: &str) -> Result<(), ImpurityError> {
        if values.len() != self.attributes.len() {
            return Err(ImpurityError::RowArity {
                expected: self.attributes.len(),
                got: values.len(),
            });
        }
        let values = self
            .attributes
            .iter()
            .zip(values)
            .map(|(att, v)| match att {
                Attribute::Nominal(att) => index_in(att, v.as_ref()).map(|i| i as f64),
                Attribute::Numeric(att) => att.parse_value(v.as_ref()),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let label = index_in(&self.class_attribute, label)?;
        self.rows.push(Row { values, label });
        Ok(())
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn class_attribute(&self) -> &NominalAttribute {
        &self.class_attribute
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn class_distribution(&self) -> ClassDistribution {
        let mut counts = vec![0u64; self.class_attribute.num_values()];
        for row in &self.rows {
            counts[row.label] += 1;
        }
        ClassDistribution::from_counts(counts)
    }

    /// Class distribution of each branch when splitting on a nominal
    /// attribute, one per attribute value in declaration order.
    pub fn split_on(&self, attribute: &str) -> Result<Vec<ClassDistribution>, ImpurityError> {
        let att_index = self.attribute_index(attribute)?;
        match &self.attributes[att_index] {
            Attribute::Nominal(att) => Ok(self.split_on_nominal(att_index, att)),
            Attribute::Numeric(_) => Err(ImpurityError::InvalidParameter(format!(
                "'{attribute}' is numeric; split it with a threshold"
            ))),
        }
    }

    /// Binary split of a numeric attribute: `value <= threshold` goes to the
    /// first branch, everything else to the second.
    pub fn split_at(&self, attribute: &str, threshold: f64) -> Result<Vec<ClassDistribution>, ImpurityError> {
        let att_index = self.numeric_index(attribute)?;
        Ok(self.split_on_threshold(att_index, threshold))
    }

    /// Candidate thresholds of a numeric attribute: midpoints between
    /// consecutive distinct observed values.
    pub fn split_points(&self, attribute: &str) -> Result<Vec<f64>, ImpurityError> {
        let att_index = self.numeric_index(attribute)?;
        Ok(self.split_points_at(att_index))
    }

    /// Highest-merit threshold of a numeric attribute, or `None` when the
    /// attribute takes fewer than two distinct values.
    pub fn best_threshold(
        &self,
        attribute: &str,
        criterion: &dyn SplitCriterion,
    ) -> Result<Option<AttributeSplitSuggestion>, ImpurityError> {
        let att_index = self.numeric_index(attribute)?;
        Ok(self.best_threshold_at(att_index, &self.class_distribution(), criterion))
    }

    /// Highest-merit split over all attributes, or `None` when no attribute
    /// can be split. The earliest attribute wins ties.
    pub fn best_split(&self, criterion: &dyn SplitCriterion) -> Option<AttributeSplitSuggestion> {
        let pre = self.class_distribution();
        let candidates = self.attributes.iter().enumerate().filter_map(|(i, att)| {
            let suggestion = match att {
                Attribute::Nominal(nominal) => {
                    let post = self.split_on_nominal(i, nominal);
                    let merit = criterion.get_merit_of_split(&pre, &post);
                    Some(AttributeSplitSuggestion::new(Some(att.name().to_string()), post, merit))
                }
                Attribute::Numeric(_) => self.best_threshold_at(i, &pre, criterion),
            }?;
            debug!(
                "merit of splitting on '{}': {:.6}",
                att.name(),
                suggestion.get_merit()
            );
            Some(suggestion)
        });
        first_best(candidates)
    }

    fn attribute_index(&self, attribute: &str) -> Result<usize, ImpurityError> {
        self.attributes
            .iter()
            .position(|a| a.name() == attribute)
            .ok_or_else(|| ImpurityError::UnknownAttribute(attribute.to_string()))
    }

    fn numeric_index(&self, attribute: &str) -> Result<usize, ImpurityError> {
        let att_index = self.attribute_index(attribute)?;
        if !self.attributes[att_index].is_numeric() {
            return Err(ImpurityError::InvalidParameter(format!(
                "'{attribute}' is nominal; thresholds need a numeric attribute"
            )));
        }
        Ok(att_index)
    }

    fn split_on_nominal(&self, att_index: usize, att: &NominalAttribute) -> Vec<ClassDistribution> {
        let num_classes = self.class_attribute.num_values();
        let mut counts = vec![vec![0u64; num_classes]; att.num_values()];
        for row in &self.rows {
            counts[row.values[att_index] as usize][row.label] += 1;
        }
        counts.into_iter().map(ClassDistribution::from_counts).collect()
    }

    fn split_on_threshold(&self, att_index: usize, threshold: f64) -> Vec<ClassDistribution> {
        let num_classes = self.class_attribute.num_values();
        let mut counts = vec![vec![0u64; num_classes]; 2];
        for row in &self.rows {
            let branch = if row.values[att_index] <= threshold { 0 } else { 1 };
            counts[branch][row.label] += 1;
        }
        counts.into_iter().map(ClassDistribution::from_counts).collect()
    }

    fn split_points_at(&self, att_index: usize) -> Vec<f64> {
        let values: Vec<f64> = self.rows.iter().map(|r| r.values[att_index]).collect();
        midpoints(&values)
    }

    fn best_threshold_at(
        &self,
        att_index: usize,
        pre: &ClassDistribution,
        criterion: &dyn SplitCriterion,
    ) -> Option<AttributeSplitSuggestion> {
        let name = self.attributes[att_index].name().to_string();
        let candidates = self.split_points_at(att_index).into_iter().map(|threshold| {
            let post = self.split_on_threshold(att_index, threshold);
            let merit = criterion.get_merit_of_split(pre, &post);
            AttributeSplitSuggestion::new(Some(name.clone()), post, merit).with_split_point(threshold)
        });
        first_best(candidates)
    }
}

fn first_best<I: Iterator<Item = AttributeSplitSuggestion>>(candidates: I) -> Option<AttributeSplitSuggestion> {
    candidates.reduce(|best, s| if s > best { s } else { best })
}

fn index_in(attribute: &NominalAttribute, value: &str) -> Result<usize, ImpurityError> {
    attribute
        .index_of_value(value)
        .ok_or_else(|| ImpurityError::UnknownValue {
            attribute: attribute.name().to_string(),
            value: value.to_string(),
        })
}
