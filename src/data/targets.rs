//! Target array storage.

use ndarray::{Array1, Array2, ArrayD, Ix1, Ix2};

use crate::error::DatasetError;

/// Target array: a single column of labels/values, or a multi-output
/// matrix of shape `[n_samples, n_outputs]`.
#[derive(Debug, Clone, PartialEq)]
pub enum Targets {
    Column(Array1<f32>),
    Matrix(Array2<f32>),
}

impl Targets {
    /// Convert a dynamic-rank array, rejecting anything but rank 1 or 2.
    pub fn from_dyn(y: ArrayD<f32>) -> Result<Self, DatasetError> {
        let ndim = y.ndim();
        match ndim {
            1 => y
                .into_dimensionality::<Ix1>()
                .map(Targets::Column)
                .map_err(|_| DatasetError::TargetRank { ndim }),
            2 => y
                .into_dimensionality::<Ix2>()
                .map(Targets::Matrix)
                .map_err(|_| DatasetError::TargetRank { ndim }),
            _ => Err(DatasetError::TargetRank { ndim }),
        }
    }

    /// Number of samples (first dimension).
    pub fn n_samples(&self) -> usize {
        match self {
            Targets::Column(a) => a.len(),
            Targets::Matrix(a) => a.nrows(),
        }
    }

    /// Number of output dimensions: 1 for a column, the last-dimension
    /// size for a matrix.
    pub fn n_outputs(&self) -> usize {
        match self {
            Targets::Column(_) => 1,
            Targets::Matrix(a) => a.ncols(),
        }
    }

    /// Size of the last dimension: the length for a column, the column
    /// count for a matrix.
    ///
    /// This is the multilabel cardinality rule. For a column it counts
    /// samples, not outputs; downstream code relies on the literal
    /// last-dimension value, so the distinction from [`n_outputs`] is
    /// deliberate.
    ///
    /// [`n_outputs`]: Targets::n_outputs
    pub fn last_dim(&self) -> usize {
        match self {
            Targets::Column(a) => a.len(),
            Targets::Matrix(a) => a.ncols(),
        }
    }

    /// Distinct values across all elements, in ascending order.
    ///
    /// Negative zero folds into zero; NaNs collapse into a single value
    /// and sort last.
    pub fn distinct_values(&self) -> Vec<f32> {
        let iter: Box<dyn Iterator<Item = &f32> + '_> = match self {
            Targets::Column(a) => Box::new(a.iter()),
            Targets::Matrix(a) => Box::new(a.iter()),
        };

        let mut values: Vec<f32> = iter.map(|&v| canonical(v)).collect();
        values.sort_by(f32::total_cmp);
        values.dedup_by(|a, b| a.to_bits() == b.to_bits());
        values
    }

    /// Count of distinct values. This is the multiclass label cardinality.
    pub fn n_distinct(&self) -> usize {
        self.distinct_values().len()
    }
}

/// Canonical bit pattern for value comparison: negative zero folds into
/// zero, every NaN folds into the positive quiet NaN (which `total_cmp`
/// sorts after all finite values).
pub(crate) fn canonical(v: f32) -> f32 {
    if v.is_nan() {
        f32::NAN
    } else if v == 0.0 {
        0.0
    } else {
        v
    }
}

impl From<Array1<f32>> for Targets {
    fn from(a: Array1<f32>) -> Self {
        Targets::Column(a)
    }
}

impl From<Array2<f32>> for Targets {
    fn from(a: Array2<f32>) -> Self {
        Targets::Matrix(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, ArrayD, IxDyn};

    #[test]
    fn from_dyn_accepts_rank_one_and_two() {
        let col = Targets::from_dyn(array![1.0, 2.0].into_dyn()).unwrap();
        assert_eq!(col.n_samples(), 2);
        assert_eq!(col.n_outputs(), 1);

        let mat = Targets::from_dyn(array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]].into_dyn()).unwrap();
        assert_eq!(mat.n_samples(), 3);
        assert_eq!(mat.n_outputs(), 2);
    }

    #[test]
    fn from_dyn_rejects_rank_three() {
        let y = ArrayD::<f32>::zeros(IxDyn(&[2, 2, 2]));
        assert_eq!(
            Targets::from_dyn(y),
            Err(DatasetError::TargetRank { ndim: 3 })
        );
    }

    #[test]
    fn distinct_values_sorted_and_deduped() {
        let t: Targets = array![2.0, 0.0, 1.0, 2.0, -0.0, 1.0].into();
        assert_eq!(t.distinct_values(), vec![0.0, 1.0, 2.0]);
        assert_eq!(t.n_distinct(), 3);
    }

    #[test]
    fn last_dim_is_length_for_columns() {
        let col: Targets = array![1.0, 0.0, 1.0].into();
        assert_eq!(col.last_dim(), 3);
        assert_eq!(col.n_outputs(), 1);

        let mat: Targets = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]].into();
        assert_eq!(mat.last_dim(), 2);
        assert_eq!(mat.n_outputs(), 2);
    }

    #[test]
    fn nans_of_either_sign_collapse_and_sort_last() {
        let neg_nan = f32::from_bits(f32::NAN.to_bits() | 0x8000_0000);
        let t: Targets = array![neg_nan, 1.0, f32::NAN, 0.5].into();

        let distinct = t.distinct_values();
        assert_eq!(distinct.len(), 3);
        assert_eq!(&distinct[..2], &[0.5, 1.0]);
        assert!(distinct[2].is_nan());
    }

    #[test]
    fn distinct_values_flattens_matrices() {
        let t: Targets = array![[0.0, 1.0], [1.0, 0.0]].into();
        assert_eq!(t.n_distinct(), 2);
    }
}
