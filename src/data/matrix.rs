//! Feature matrix storage.

use ndarray::Array2;

use super::csc::CscMatrix;

/// Feature matrix in either dense or sparse storage.
///
/// Dense storage is sample-major: shape `[n_samples, n_features]`, each
/// sample's features contiguous. Missing values are `f32::NAN` in both
/// representations.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureMatrix {
    Dense(Array2<f32>),
    Sparse(CscMatrix),
}

impl FeatureMatrix {
    /// Number of samples (rows).
    pub fn n_samples(&self) -> usize {
        match self {
            FeatureMatrix::Dense(a) => a.nrows(),
            FeatureMatrix::Sparse(m) => m.n_rows(),
        }
    }

    /// Number of features (columns).
    pub fn n_features(&self) -> usize {
        match self {
            FeatureMatrix::Dense(a) => a.ncols(),
            FeatureMatrix::Sparse(m) => m.n_cols(),
        }
    }

    /// Returns true for the sparse representation.
    pub fn is_sparse(&self) -> bool {
        matches!(self, FeatureMatrix::Sparse(_))
    }

    /// Returns true if every element is finite.
    ///
    /// For sparse storage only stored values are inspected; implicit zeros
    /// are finite by definition.
    pub fn all_finite(&self) -> bool {
        match self {
            FeatureMatrix::Dense(a) => a.iter().all(|v| v.is_finite()),
            FeatureMatrix::Sparse(m) => m.all_finite(),
        }
    }
}

impl From<Array2<f32>> for FeatureMatrix {
    fn from(a: Array2<f32>) -> Self {
        FeatureMatrix::Dense(a)
    }
}

impl From<CscMatrix> for FeatureMatrix {
    fn from(m: CscMatrix) -> Self {
        FeatureMatrix::Sparse(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn dense_shape_and_flags() {
        let m: FeatureMatrix = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]].into();
        assert_eq!(m.n_samples(), 2);
        assert_eq!(m.n_features(), 3);
        assert!(!m.is_sparse());
        assert!(m.all_finite());
    }

    #[test]
    fn sparse_shape_and_flags() {
        let dense = array![[0.0, 1.0], [2.0, 0.0], [0.0, 0.0]];
        let m: FeatureMatrix = CscMatrix::from_dense(dense.view()).into();
        assert_eq!(m.n_samples(), 3);
        assert_eq!(m.n_features(), 2);
        assert!(m.is_sparse());
        assert!(m.all_finite());
    }

    #[test]
    fn nan_and_infinity_detected() {
        let m: FeatureMatrix = array![[1.0, f32::NAN]].into();
        assert!(!m.all_finite());
        let m: FeatureMatrix = array![[1.0, f32::INFINITY]].into();
        assert!(!m.all_finite());
    }
}
