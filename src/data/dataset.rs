//! The dataset adapter.
//!
//! [`XyDataset`] is the entry point of the data layer: it takes raw `X`/`y`
//! arrays from the caller, validates their shapes against each other and
//! against the feature annotations, derives the dataset metadata the search
//! pipeline keys on, and optionally one-hot encodes classification labels.

use ndarray::ArrayD;
use serde::{Deserialize, Serialize};

use super::encoding::one_hot_targets;
use super::matrix::FeatureMatrix;
use super::schema::FeatureType;
use super::targets::Targets;
use crate::error::DatasetError;
use crate::task::{Metric, TaskKind};

/// Metadata derived at construction time.
///
/// Replaces the string-keyed `info` mapping a dynamically typed pipeline
/// would carry; every key is a named field here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Task kind supplied by the caller.
    pub task: TaskKind,
    /// Evaluation metric, stored without validation.
    pub metric: Metric,
    /// True iff `X` uses sparse storage.
    pub is_sparse: bool,
    /// Stores whether every value of `X` is finite.
    ///
    /// NOTE: despite the name, this flag is the result of the all-finite
    /// check, i.e. it is true when there are NO missing values. Consumers
    /// of the upstream pipeline rely on the literal value, so the naming
    /// is kept as-is.
    pub has_missing: bool,
    /// Number of target dimensions/classes: 1 for regression, 2 for binary
    /// classification, distinct label count for multiclass, last-dimension
    /// size of `y` for multilabel.
    pub target_num: usize,
}

/// A validated training dataset built from caller-supplied `X`/`y` arrays.
///
/// # Example
///
/// ```
/// use autolearn_data::data::XyDataset;
/// use autolearn_data::task::{Metric, TaskKind};
/// use ndarray::array;
///
/// let x = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
/// let y = array![0.0, 1.0, 0.0];
///
/// let ds = XyDataset::new(
///     x.into(),
///     y.into_dyn(),
///     TaskKind::BinaryClassification,
///     Metric::Accuracy,
///     None,
///     "demo",
///     false,
/// )
/// .unwrap();
///
/// assert_eq!(ds.info().target_num, 2);
/// assert_eq!(ds.feat_type().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct XyDataset {
    info: DatasetInfo,
    basename: String,
    x_train: FeatureMatrix,
    y_train: Targets,
    feat_type: Vec<FeatureType>,
}

impl XyDataset {
    /// Build a dataset from raw arrays.
    ///
    /// `y` is accepted at dynamic rank and must be rank 1 or 2. When
    /// `feat_type` is `None`, every column defaults to
    /// [`FeatureType::Numerical`]. When `encode_labels` is true and the
    /// task carries single-label class values, `y` is replaced in place by
    /// its one-hot indicator matrix.
    pub fn new(
        x: FeatureMatrix,
        y: ArrayD<f32>,
        task: TaskKind,
        metric: Metric,
        feat_type: Option<Vec<FeatureType>>,
        dataset_name: impl Into<String>,
        encode_labels: bool,
    ) -> Result<Self, DatasetError> {
        let y = Targets::from_dyn(y)?;

        if x.n_samples() != y.n_samples() {
            return Err(DatasetError::SampleCountMismatch {
                x_samples: x.n_samples(),
                y_samples: y.n_samples(),
            });
        }

        let target_num = match task {
            TaskKind::Regression => 1,
            TaskKind::BinaryClassification => 2,
            TaskKind::MulticlassClassification => y.n_distinct(),
            TaskKind::MultilabelClassification => y.last_dim(),
        };

        let feat_type =
            feat_type.unwrap_or_else(|| vec![FeatureType::Numerical; x.n_features()]);
        if feat_type.len() != x.n_features() {
            return Err(DatasetError::FeatureTypeLenMismatch {
                n_features: x.n_features(),
                n_types: feat_type.len(),
            });
        }

        let info = DatasetInfo {
            task,
            metric,
            is_sparse: x.is_sparse(),
            has_missing: x.all_finite(),
            target_num,
        };

        let mut dataset = Self {
            info,
            basename: dataset_name.into(),
            x_train: x,
            y_train: y,
            feat_type,
        };

        if encode_labels {
            dataset.encode_labels();
        }

        Ok(dataset)
    }

    /// One-hot encode single-label class targets in place.
    ///
    /// Regression and multilabel targets are left untouched, as are
    /// targets that are already matrices.
    fn encode_labels(&mut self) {
        if !self.info.task.is_single_label() {
            return;
        }
        if let Some((encoded, _classes)) = one_hot_targets(&self.y_train) {
            self.y_train = Targets::Matrix(encoded);
        }
    }

    /// Derived metadata.
    pub fn info(&self) -> &DatasetInfo {
        &self.info
    }

    /// Dataset name, stored as supplied.
    pub fn basename(&self) -> &str {
        &self.basename
    }

    /// The stored feature matrix.
    pub fn x_train(&self) -> &FeatureMatrix {
        &self.x_train
    }

    /// The stored target array.
    pub fn y_train(&self) -> &Targets {
        &self.y_train
    }

    /// Per-column feature annotations, length `n_features`.
    pub fn feat_type(&self) -> &[FeatureType] {
        &self.feat_type
    }

    /// Number of samples.
    pub fn n_samples(&self) -> usize {
        self.x_train.n_samples()
    }

    /// Number of features.
    pub fn n_features(&self) -> usize {
        self.x_train.n_features()
    }
}

/// Fluent builder for [`XyDataset`].
///
/// Carries the scalar parameters up front so call sites do not need to
/// thread a long positional argument list:
///
/// ```
/// use autolearn_data::data::XyDatasetBuilder;
/// use autolearn_data::task::{Metric, TaskKind};
/// use ndarray::array;
///
/// let ds = XyDatasetBuilder::new(TaskKind::Regression, Metric::R2, "housing")
///     .build(array![[1.0], [2.0]], array![0.5, 1.5].into_dyn())
///     .unwrap();
///
/// assert_eq!(ds.basename(), "housing");
/// ```
#[derive(Debug, Clone)]
pub struct XyDatasetBuilder {
    task: TaskKind,
    metric: Metric,
    dataset_name: String,
    feat_type: Option<Vec<FeatureType>>,
    encode_labels: bool,
}

impl XyDatasetBuilder {
    /// Start a builder for the given task, metric, and dataset name.
    pub fn new(task: TaskKind, metric: Metric, dataset_name: impl Into<String>) -> Self {
        Self {
            task,
            metric,
            dataset_name: dataset_name.into(),
            feat_type: None,
            encode_labels: false,
        }
    }

    /// Supply explicit per-column feature annotations.
    pub fn feat_type(mut self, feat_type: Vec<FeatureType>) -> Self {
        self.feat_type = Some(feat_type);
        self
    }

    /// Request label one-hot encoding after validation.
    pub fn encode_labels(mut self, encode: bool) -> Self {
        self.encode_labels = encode;
        self
    }

    /// Validate and build the dataset.
    pub fn build(
        self,
        x: impl Into<FeatureMatrix>,
        y: ArrayD<f32>,
    ) -> Result<XyDataset, DatasetError> {
        XyDataset::new(
            x.into(),
            y,
            self.task,
            self.metric,
            self.feat_type,
            self.dataset_name,
            self.encode_labels,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn info_serde_roundtrip() {
        let info = DatasetInfo {
            task: TaskKind::MulticlassClassification,
            metric: Metric::BalancedAccuracy,
            is_sparse: false,
            has_missing: true,
            target_num: 3,
        };
        let json = serde_json::to_string(&info).unwrap();
        let restored: DatasetInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, info);
    }

    #[test]
    fn builder_matches_direct_construction() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let y = array![0.0, 1.0];

        let built = XyDatasetBuilder::new(TaskKind::BinaryClassification, Metric::F1, "b")
            .encode_labels(false)
            .build(x.clone(), y.clone().into_dyn())
            .unwrap();
        let direct = XyDataset::new(
            x.into(),
            y.into_dyn(),
            TaskKind::BinaryClassification,
            Metric::F1,
            None,
            "b",
            false,
        )
        .unwrap();

        assert_eq!(built.info(), direct.info());
        assert_eq!(built.feat_type(), direct.feat_type());
    }
}
