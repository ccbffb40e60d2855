//! Dataset construction errors.

/// Validation errors raised while constructing an [`XyDataset`].
///
/// Every violated precondition aborts construction immediately; no partial
/// record is ever returned to the caller.
///
/// [`XyDataset`]: crate::data::XyDataset
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    #[error("y must not have more than two dimensions, but has {ndim}")]
    TargetRank { ndim: usize },

    #[error("X and y must have the same number of samples, but have {x_samples} and {y_samples}")]
    SampleCountMismatch { x_samples: usize, y_samples: usize },

    #[error(
        "X and feat_type must have the same number of features, but have {n_features} and {n_types}"
    )]
    FeatureTypeLenMismatch { n_features: usize, n_types: usize },
}
