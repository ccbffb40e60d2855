//! Label one-hot encoding.
//!
//! Turns a column of single-label class values into an indicator matrix
//! with one column per distinct class, in ascending class-value order.

use ndarray::Array2;

use super::targets::{canonical, Targets};

/// One-hot encode a single-label target column.
///
/// Returns the `[n_samples, n_classes]` indicator matrix together with the
/// ordered class values, or `None` for a target that is already a matrix
/// (multi-output targets are left as supplied).
pub fn one_hot_targets(targets: &Targets) -> Option<(Array2<f32>, Vec<f32>)> {
    let Targets::Column(y) = targets else {
        return None;
    };

    let classes = targets.distinct_values();
    let mut encoded = Array2::zeros((y.len(), classes.len()));

    for (sample, &v) in y.iter().enumerate() {
        let v = canonical(v);
        if let Ok(class) = classes.binary_search_by(|c| c.total_cmp(&v)) {
            encoded[[sample, class]] = 1.0;
        }
    }

    Some((encoded, classes))
}
