use crate::error::{DataError, Result};
use ndarray::ArrayView2;

/// This module provides accuracy scoring of a train/test partition
pub mod evaluation;
/// This module provides a k-nearest-neighbors classifier used to sanity check a split
pub mod knn;

pub use evaluation::*;
pub use knn::*;

/// Performs validation checks on the input feature matrix
///
/// # Errors
///
/// - `DataError::InputValidationError` if the matrix is empty or contains NaN or infinite values
fn preliminary_check(x: ArrayView2<f64>) -> Result<()> {
    if x.nrows() == 0 {
        return Err(DataError::InputValidationError(
            "Input data is empty".to_string(),
        ));
    }

    if x.iter().any(|&val| !val.is_finite()) {
        return Err(DataError::InputValidationError(
            "Input data contains NaN or infinite values".to_string(),
        ));
    }

    Ok(())
}
