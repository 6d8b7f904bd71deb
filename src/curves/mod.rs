mod impurity_curve;

pub use impurity_curve::{CurvePoint, ImpurityCurve};
