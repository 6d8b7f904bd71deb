pub mod attributes;
pub mod class_distribution;
pub mod data_table;
mod error;

pub use class_distribution::ClassDistribution;
pub use data_table::DataTable;
pub use error::ImpurityError;
