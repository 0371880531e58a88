//! Column type inference.

mod classifier;
pub mod dates;

pub use classifier::{ClassifierConfig, ColumnClassifier};
