//! Per-feature type annotations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical feature types.
///
/// Features are stored as `f32` regardless of type; the annotation tells
/// downstream preprocessing how to interpret a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FeatureType {
    /// Continuous numeric feature.
    #[default]
    Numerical,

    /// Categorical feature stored as float, interpreted as an integer
    /// category ID.
    Categorical,
}

impl FeatureType {
    /// Returns true if this is a categorical feature.
    #[inline]
    pub fn is_categorical(&self) -> bool {
        matches!(self, FeatureType::Categorical)
    }

    /// Returns true if this is a numerical feature.
    #[inline]
    pub fn is_numerical(&self) -> bool {
        matches!(self, FeatureType::Numerical)
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureType::Numerical => f.write_str("Numerical"),
            FeatureType::Categorical => f.write_str("Categorical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_tag_strings() {
        assert_eq!(FeatureType::Numerical.to_string(), "Numerical");
        assert_eq!(FeatureType::Categorical.to_string(), "Categorical");
    }

    #[test]
    fn default_is_numerical() {
        assert!(FeatureType::default().is_numerical());
    }
}
