use crate::core::ImpurityError;

/// Attribute taking finite real values, split with a `value <= threshold` test.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericAttribute {
    pub name: String,
}

impl NumericAttribute {
    pub fn new<N: Into<String>>(name: N) -> NumericAttribute {
        NumericAttribute { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parse_value(&self, raw: &str) -> Result<f64, ImpurityError> {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(ImpurityError::InvalidNumber {
                attribute: self.name.clone(),
                value: raw.to_string(),
            }),
        }
    }
}

/// Midpoints between consecutive distinct values, ascending.
pub(crate) fn midpoints(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    sorted.windows(2).map(|w| w[0] + (w[1] - w[0]) / 2.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_finite_numbers() {
        let att = NumericAttribute::new("StudyHours");
        assert_eq!(att.parse_value(" 7.5 ").unwrap(), 7.5);
        assert!(matches!(
            att.parse_value("seven"),
            Err(ImpurityError::InvalidNumber { ref value, .. }) if value == "seven"
        ));
        assert!(att.parse_value("inf").is_err());
        assert!(att.parse_value("NaN").is_err());
    }

    #[test]
    fn midpoints_skip_duplicates() {
        assert_eq!(midpoints(&[90.0, 60.0, 85.0, 60.0, 70.0]), vec![65.0, 77.5, 87.5]);
        assert!(midpoints(&[3.0, 3.0]).is_empty());
        assert!(midpoints(&[]).is_empty());
    }
}
