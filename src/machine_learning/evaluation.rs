use super::knn::KNN;
use crate::error::{DataError, Result};
use crate::utility::{LabelMap, Partition};
use log::info;
use ndarray::ArrayView1;

/// Fraction of positions where `y_pred` equals `y_true`
///
/// # Errors
///
/// - `DataError::InputValidationError` if the arrays are empty or differ in length
pub fn accuracy(y_true: ArrayView1<i64>, y_pred: ArrayView1<i64>) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(DataError::InputValidationError(format!(
            "y_true and y_pred must have the same length, got {} and {}",
            y_true.len(),
            y_pred.len()
        )));
    }
    if y_true.is_empty() {
        return Err(DataError::InputValidationError(
            "cannot compute accuracy of zero predictions".to_string(),
        ));
    }

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(a, b)| a == b)
        .count();
    Ok(correct as f64 / y_true.len() as f64)
}

/// Scores a train/test partition with a k-nearest-neighbors classifier
///
/// Every column other than `label_column` is used as a numeric feature. The label
/// column may hold either the original strings or codes from `label_map`.
///
/// # Returns
///
/// * `f64` - Test-set accuracy in [0, 1]
///
/// # Errors
///
/// - `DataError::SchemaMismatch` if the label column is absent or a feature column is not numeric
/// - `DataError::KeyNotFound` if a label is outside `label_map`
/// - `DataError::InputValidationError` if `k` is invalid or the test set is empty
pub fn evaluate_split(
    partition: &Partition,
    label_column: &str,
    label_map: &LabelMap,
    k: usize,
) -> Result<f64> {
    let features: Vec<&str> = partition
        .train
        .column_names()
        .iter()
        .map(String::as_str)
        .filter(|name| *name != label_column)
        .collect();

    let x_train = partition.train.feature_matrix(&features)?;
    let y_train = label_map.codes_of(&partition.train, label_column)?;
    let x_test = partition.test.feature_matrix(&features)?;
    let y_test = label_map.codes_of(&partition.test, label_column)?;

    let mut knn = KNN::new(k);
    let y_pred = knn.fit_predict(x_train.view(), y_train.view(), x_test.view())?;
    let score = accuracy(y_test.view(), y_pred.view())?;

    info!(
        "KNN (k = {}) accuracy on {} test rows: {:.2}%",
        k,
        y_test.len(),
        score * 100.0
    );
    Ok(score)
}
