//! Compressed Sparse Column (CSC) storage for sparse feature matrices.
//!
//! CSC stores non-zero values column by column, which matches how the
//! pipeline consumes feature data: per-feature statistics and per-column
//! preprocessing iterate over one feature at a time.
//!
//! # Structure
//!
//! - `values`: non-zero values, stored column by column
//! - `row_indices`: row index for each value
//! - `col_ptrs`: starting index in `values`/`row_indices` for each column
//!
//! For column `j`, the values are `values[col_ptrs[j]..col_ptrs[j+1]]`
//! with corresponding rows `row_indices[col_ptrs[j]..col_ptrs[j+1]]`.

use ndarray::{Array2, ArrayView2};

/// Compressed Sparse Column matrix over `f32`.
///
/// # Example
///
/// ```
/// use autolearn_data::data::CscMatrix;
/// use ndarray::array;
///
/// let dense = array![
///     [1.0, 0.0, 2.0],
///     [0.0, 3.0, 0.0],
///     [4.0, 0.0, 5.0],
/// ];
/// let csc = CscMatrix::from_dense(dense.view());
///
/// // Column 0 holds values 1.0, 4.0 at rows 0, 2.
/// let col0: Vec<_> = csc.column(0).collect();
/// assert_eq!(col0, vec![(0, 1.0), (2, 4.0)]);
/// assert_eq!(csc.nnz(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CscMatrix {
    /// Non-zero values stored column by column.
    values: Box<[f32]>,
    /// Row index for each value.
    row_indices: Box<[u32]>,
    /// Column pointers: col_ptrs[j] is the start index for column j.
    /// Length is n_cols + 1, with col_ptrs[n_cols] = nnz.
    col_ptrs: Box<[u32]>,
    n_rows: usize,
    n_cols: usize,
}

impl CscMatrix {
    /// Create a CSC matrix from a dense sample-major array.
    ///
    /// Exact zeros are not stored. NaN values ARE stored (they are not
    /// equal to zero), so missingness survives the conversion.
    pub fn from_dense(dense: ArrayView2<'_, f32>) -> Self {
        let (n_rows, n_cols) = dense.dim();

        let mut values = Vec::new();
        let mut row_indices = Vec::new();
        let mut col_ptrs = Vec::with_capacity(n_cols + 1);

        col_ptrs.push(0u32);
        for col in 0..n_cols {
            for row in 0..n_rows {
                let v = dense[[row, col]];
                if v != 0.0 {
                    values.push(v);
                    row_indices.push(row as u32);
                }
            }
            col_ptrs.push(values.len() as u32);
        }

        Self {
            values: values.into_boxed_slice(),
            row_indices: row_indices.into_boxed_slice(),
            col_ptrs: col_ptrs.into_boxed_slice(),
            n_rows,
            n_cols,
        }
    }

    /// Number of rows (samples).
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns (features).
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Number of stored (non-zero) values.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Iterate over the stored `(row, value)` pairs of one column.
    ///
    /// # Panics
    ///
    /// Panics if `col >= n_cols`.
    pub fn column(&self, col: usize) -> impl Iterator<Item = (usize, f32)> + '_ {
        assert!(col < self.n_cols, "column {col} out of bounds");
        let start = self.col_ptrs[col] as usize;
        let end = self.col_ptrs[col + 1] as usize;
        self.row_indices[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&row, &v)| (row as usize, v))
    }

    /// Returns true if every stored value is finite.
    ///
    /// Implicit zeros are finite by definition, so only stored values
    /// are inspected.
    pub fn all_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }

    /// Expand into a dense sample-major array.
    pub fn to_dense(&self) -> Array2<f32> {
        let mut out = Array2::zeros((self.n_rows, self.n_cols));
        for col in 0..self.n_cols {
            for (row, v) in self.column(col) {
                out[[row, col]] = v;
            }
        }
        out
    }
}
