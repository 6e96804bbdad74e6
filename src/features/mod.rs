//! Feature construction.

mod polynomial;

pub use polynomial::{polynomial_features, polynomial_features_from_column};
