//! Task and metric identifiers.
//!
//! These replace the integer constants a pipeline would otherwise pass
//! around as globals: an unknown task is unrepresentable, so the adapter
//! never needs a lookup-failure path.

use serde::{Deserialize, Serialize};

/// Type of supervised learning task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskKind {
    /// Regression (continuous target).
    #[default]
    Regression,
    /// Binary classification (2 classes).
    BinaryClassification,
    /// Multi-class classification (3+ mutually exclusive classes).
    MulticlassClassification,
    /// Multi-label classification (independent binary indicators per label).
    MultilabelClassification,
}

impl TaskKind {
    /// Returns true if this is a classification task.
    pub fn is_classification(&self) -> bool {
        !self.is_regression()
    }

    /// Returns true if this is a regression task.
    pub fn is_regression(&self) -> bool {
        matches!(self, Self::Regression)
    }

    /// Returns true if targets are single-label class values.
    ///
    /// Multi-label targets are already indicator matrices, so label
    /// encoding does not apply to them.
    pub fn is_single_label(&self) -> bool {
        matches!(
            self,
            Self::BinaryClassification | Self::MulticlassClassification
        )
    }
}

/// Evaluation metric identifier.
///
/// Stored on the dataset without validation; the metric is interpreted by
/// downstream model-evaluation code, not by the data layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    Accuracy,
    BalancedAccuracy,
    RocAuc,
    F1,
    Pac,
    LogLoss,
    R2,
    MeanAbsoluteError,
    RootMeanSquaredError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_kind_classification_split() {
        assert!(!TaskKind::Regression.is_classification());
        assert!(TaskKind::BinaryClassification.is_classification());
        assert!(TaskKind::MulticlassClassification.is_classification());
        assert!(TaskKind::MultilabelClassification.is_classification());
    }

    #[test]
    fn single_label_excludes_multilabel() {
        assert!(TaskKind::BinaryClassification.is_single_label());
        assert!(TaskKind::MulticlassClassification.is_single_label());
        assert!(!TaskKind::MultilabelClassification.is_single_label());
        assert!(!TaskKind::Regression.is_single_label());
    }

    #[test]
    fn task_kind_serde_roundtrip() {
        let json = serde_json::to_string(&TaskKind::MulticlassClassification).unwrap();
        let restored: TaskKind = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, TaskKind::MulticlassClassification);
    }
}
