use crate::core::{ClassDistribution, ImpurityError};
use crate::impurity::Impurity;
use serde::{Deserialize, Serialize};

/// Entropy and Gini of the two-class node `[p, 1 - p]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub probability: f64,
    pub entropy: f64,
    pub gini: f64,
}

impl CurvePoint {
    pub fn at(probability: f64) -> Result<Self, ImpurityError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ImpurityError::InvalidParameter(format!(
                "probability must be within [0, 1], got {probability}"
            )));
        }
        let dist = ClassDistribution::new(vec![probability, 1.0 - probability])?;
        Ok(Self {
            probability,
            entropy: dist.entropy(),
            gini: dist.gini(),
        })
    }

    pub fn value(&self, measure: Impurity) -> f64 {
        match measure {
            Impurity::Entropy => self.entropy,
            Impurity::Gini => self.gini,
        }
    }
}

/// Impurity sampled along a probability grid, ready for a plotting layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpurityCurve {
    entries: Vec<CurvePoint>,
}

impl ImpurityCurve {
    /// Samples `p = i / steps` for `i` in `0..=steps`.
    pub fn binary(steps: usize) -> Result<Self, ImpurityError> {
        if steps == 0 {
            return Err(ImpurityError::InvalidParameter(
                "steps must be at least 1".to_string(),
            ));
        }
        let entries = (0..=steps)
            .map(|i| CurvePoint::at(i as f64 / steps as f64))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    pub fn push(&mut self, point: CurvePoint) {
        self.entries.push(point)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn latest(&self) -> Option<CurvePoint> {
        self.entries.last().copied()
    }
    pub fn points(&self) -> &[CurvePoint] {
        &self.entries
    }

    /// Point where `measure` is largest; the first one on ties.
    pub fn peak(&self, measure: Impurity) -> Option<CurvePoint> {
        self.entries.iter().copied().reduce(|best, p| {
            if p.value(measure) > best.value(measure) { p } else { best }
        })
    }
}
