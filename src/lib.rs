//! Impurity measures for decision tree learners.
//!
//! [`compute_entropy`] and [`compute_gini`] score a class-count distribution;
//! the [`split_criteria`] module turns them into information gain and Gini gain
//! for ranking candidate splits.

pub mod config;
pub mod core;
pub mod curves;
pub mod impurity;
pub mod split_criteria;
pub mod utils;

pub use crate::core::{ClassDistribution, ImpurityError};
pub use impurity::{Impurity, compute_entropy, compute_gini};

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
