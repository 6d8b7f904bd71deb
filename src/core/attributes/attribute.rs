use crate::core::attributes::{NominalAttribute, NumericAttribute};

/// Column of a [`DataTable`](crate::core::DataTable).
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Nominal(NominalAttribute),
    Numeric(NumericAttribute),
}

impl Attribute {
    pub fn name(&self) -> &str {
        match self {
            Attribute::Nominal(att) => att.name(),
            Attribute::Numeric(att) => att.name(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Attribute::Numeric(_))
    }
}

impl From<NominalAttribute> for Attribute {
    fn from(att: NominalAttribute) -> Self {
        Attribute::Nominal(att)
    }
}

impl From<NumericAttribute> for Attribute {
    fn from(att: NumericAttribute) -> Self {
        Attribute::Numeric(att)
    }
}
