mod entropy;
mod gini;
mod impurity_measure;

pub use entropy::compute_entropy;
pub use gini::compute_gini;
pub use impurity_measure::Impurity;

pub(crate) use entropy::entropy_of;
pub(crate) use gini::gini_of;
