use super::preliminary_check;
use crate::error::{DataError, Result};
use ahash::AHashMap;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use rayon::prelude::*;

/// K-Nearest Neighbors (KNN) Classifier over integer label codes
///
/// Classifies each sample by a majority vote among its `k` nearest training
/// samples under Euclidean distance. Ties between classes go to the smallest
/// label code; ties in distance are broken by the smaller label code as well.
///
/// # Fields
///
/// - `k` - Number of neighbors to consider for classification
/// - `x_train` - Training data features as a 2D array
/// - `y_train` - Training data label codes
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use datasplit::machine_learning::knn::KNN;
///
/// let x_train = array![[1.0, 2.0], [2.0, 3.0], [3.0, 4.0], [5.0, 6.0], [6.0, 7.0]];
/// let y_train = array![0, 0, 0, 1, 1];
///
/// let mut knn = KNN::new(3);
/// knn.fit(x_train.view(), y_train.view()).unwrap();
///
/// let predictions = knn.predict(array![[1.5, 2.5], [5.5, 6.5]].view()).unwrap();
/// assert_eq!(predictions, array![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct KNN {
    k: usize,
    x_train: Option<Array2<f64>>,
    y_train: Option<Array1<i64>>,
}

impl Default for KNN {
    /// Creates a new KNN classifier with k = 5
    fn default() -> Self {
        KNN::new(5)
    }
}

impl KNN {
    /// Creates a new, unfitted KNN classifier
    ///
    /// # Parameters
    ///
    /// - `k` - Number of neighbors to use for classification
    pub fn new(k: usize) -> Self {
        KNN {
            k,
            x_train: None,
            y_train: None,
        }
    }

    /// Returns the number of neighbors (k) used in the KNN algorithm
    pub fn get_k(&self) -> usize {
        self.k
    }

    /// Returns whether [`KNN::fit`] has been called successfully
    pub fn is_fitted(&self) -> bool {
        self.x_train.is_some() && self.y_train.is_some()
    }

    /// Fits the KNN classifier to the training data
    ///
    /// # Parameters
    ///
    /// - `x` - Training features as a 2D array (samples × features)
    /// - `y` - Training label codes as a 1D array
    ///
    /// # Errors
    ///
    /// - `DataError::InputValidationError` if `k` is 0 or larger than the number of samples,
    ///   the shapes disagree, or the features contain NaN or infinite values
    ///
    /// # Notes
    ///
    /// KNN is a lazy learning algorithm, and the calculation is done in the prediction phase.
    pub fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<i64>) -> Result<&mut Self> {
        preliminary_check(x)?;

        if self.k == 0 {
            return Err(DataError::InputValidationError(
                "k must be greater than 0".to_string(),
            ));
        }

        if x.nrows() < self.k {
            return Err(DataError::InputValidationError(format!(
                "The number of samples ({}) is less than k ({})",
                x.nrows(),
                self.k
            )));
        }

        if x.nrows() != y.len() {
            return Err(DataError::InputValidationError(format!(
                "x and y must have the same number of samples, x rows: {}, y length: {}",
                x.nrows(),
                y.len()
            )));
        }

        self.x_train = Some(x.to_owned());
        self.y_train = Some(y.to_owned());

        Ok(self)
    }

    /// Predicts a label code for every row of `x`, rows in parallel
    ///
    /// # Errors
    ///
    /// - `DataError::InputValidationError` if the model is not fitted, `x` is empty or
    ///   contains invalid values, or the feature count differs from the training data
    pub fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<i64>> {
        let (x_train, y_train) = match (&self.x_train, &self.y_train) {
            (Some(x_train), Some(y_train)) => (x_train, y_train),
            _ => {
                return Err(DataError::InputValidationError(
                    "KNN has not been fitted".to_string(),
                ));
            }
        };

        preliminary_check(x)?;

        if x.ncols() != x_train.ncols() {
            return Err(DataError::InputValidationError(format!(
                "Feature dimension mismatch: expected {}, got {}",
                x_train.ncols(),
                x.ncols()
            )));
        }

        let results: Vec<i64> = (0..x.nrows())
            .into_par_iter()
            .map(|i| self.predict_one(x.row(i), x_train.view(), y_train))
            .collect();

        Ok(Array1::from(results))
    }

    fn predict_one(
        &self,
        x: ArrayView1<f64>,
        x_train: ArrayView2<f64>,
        y_train: &Array1<i64>,
    ) -> i64 {
        let mut distances: Vec<(f64, i64)> = x_train
            .rows()
            .into_iter()
            .zip(y_train.iter())
            .map(|(row, &label)| (euclidean_distance(x, row), label))
            .collect();

        distances.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut class_counts: AHashMap<i64, usize> = AHashMap::with_capacity(self.k);
        for &(_, label) in distances.iter().take(self.k) {
            *class_counts.entry(label).or_insert(0) += 1;
        }

        // Highest count wins, smallest code on ties
        class_counts
            .into_iter()
            .max_by(|(label_a, count_a), (label_b, count_b)| {
                count_a.cmp(count_b).then(label_b.cmp(label_a))
            })
            .map(|(label, _)| label)
            .unwrap_or_default()
    }

    /// Fits the model with the training data and immediately predicts on the given test data
    pub fn fit_predict(
        &mut self,
        x_train: ArrayView2<f64>,
        y_train: ArrayView1<i64>,
        x_test: ArrayView2<f64>,
    ) -> Result<Array1<i64>> {
        self.fit(x_train, y_train)?;
        self.predict(x_test)
    }
}

fn euclidean_distance(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
