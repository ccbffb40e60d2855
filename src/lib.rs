//! autolearn-data: dataset container layer for an AutoML pipeline.
//!
//! Wraps caller-supplied feature and target arrays into a validated
//! [`XyDataset`] record: shapes are checked against each other, metadata
//! (task, sparsity, missingness, target cardinality) is derived up front,
//! and classification labels can be one-hot encoded on request.
//!
//! # Key Types
//!
//! - [`XyDataset`] / [`XyDatasetBuilder`] - the dataset record and its builder
//! - [`FeatureMatrix`] / [`CscMatrix`] - dense and sparse feature storage
//! - [`Targets`] - label column or multi-output target matrix
//! - [`TaskKind`] / [`Metric`] - task and metric identifiers
//! - [`DatasetError`] - construction-time validation failures

pub mod data;
pub mod error;
pub mod task;
pub mod testing;

pub use data::{
    CscMatrix, DatasetInfo, FeatureMatrix, FeatureType, Targets, XyDataset, XyDatasetBuilder,
};
pub use error::DatasetError;
pub use task::{Metric, TaskKind};
