//! Data input abstractions for the training pipeline.
//!
//! # Key Types
//!
//! - [`XyDataset`]: validated container for caller-supplied `X`/`y` arrays
//! - [`XyDatasetBuilder`]: fluent construction for the common call sites
//! - [`FeatureMatrix`]: dense (ndarray) or sparse (CSC) feature storage
//! - [`Targets`]: rank-1 label column or rank-2 multi-output matrix
//! - [`FeatureType`]: per-column annotation (numerical/categorical)
//!
//! # Missing Values
//!
//! Missing values are represented as `f32::NAN`. [`DatasetInfo::has_missing`]
//! records the result of the all-finite scan over `X`.

mod csc;
mod dataset;
mod encoding;
mod matrix;
mod schema;
mod targets;

pub use csc::CscMatrix;
pub use dataset::{DatasetInfo, XyDataset, XyDatasetBuilder};
pub use encoding::one_hot_targets;
pub use matrix::FeatureMatrix;
pub use schema::FeatureType;
pub use targets::Targets;
