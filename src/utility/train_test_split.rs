use crate::dataset::Table;
use crate::error::{DataError, Result};
use log::{debug, warn};
use rand::{SeedableRng, rng, rngs::StdRng, seq::SliceRandom};

/// Default fraction of rows assigned to the test partition
pub const DEFAULT_TEST_SIZE: f64 = 0.2;

/// A train/test pair produced by splitting one table
///
/// Every row of the source table lands in exactly one of the two tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub train: Table,
    pub test: Table,
}

impl Partition {
    /// Total number of rows across both tables
    pub fn n_rows(&self) -> usize {
        self.train.n_rows() + self.test.n_rows()
    }
}

/// Computes the train and test row indices for a table of `n_samples` rows
///
/// The row order is permuted (unless `shuffle` is false), then the leading
/// `n_samples - n_test` positions become the train set and the trailing `n_test`
/// positions the test set, where `n_test = ceil(n_samples * test_size)`.
/// When that would leave the train set empty, one row moves back to it, so a
/// single-row table yields one train row and an empty test set.
///
/// # Parameters
///
/// - `n_samples` - Number of rows to split
/// - `test_size` - Fraction of rows for the test set, in (0, 1)
/// - `random_state` - Seed of the shuffle; `None` draws from the thread RNG
/// - `shuffle` - Whether to permute the rows before cutting
///
/// # Returns
///
/// - `Result<(Vec<usize>, Vec<usize>), DataError>` - `(train_indices, test_indices)`
///
/// # Errors
///
/// - `DataError::InputValidationError` if `test_size` is not strictly between 0 and 1
pub fn split_indices(
    n_samples: usize,
    test_size: f64,
    random_state: Option<u64>,
    shuffle: bool,
) -> Result<(Vec<usize>, Vec<usize>)> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(DataError::InputValidationError(format!(
            "test_size must be between 0 and 1 (exclusive), got {}",
            test_size
        )));
    }

    // The epsilon keeps products like 150 * 0.2 from rounding up past the exact count
    let mut n_test = ((n_samples as f64 * test_size) - 1e-9).ceil().max(0.0) as usize;
    if n_samples > 0 && n_test >= n_samples {
        n_test = n_samples - 1;
    }
    let n_train = n_samples - n_test;

    if n_samples > 0 && n_test == 0 {
        warn!(
            "Splitting {} row(s) with test_size {} leaves the test partition empty",
            n_samples, test_size
        );
    }

    let mut indices: Vec<usize> = (0..n_samples).collect();
    if shuffle {
        match random_state {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                indices.shuffle(&mut rng);
            }
            None => {
                let mut rng = rng();
                indices.shuffle(&mut rng);
            }
        }
    }

    debug!(
        "Split {} rows into {} train / {} test (shuffle: {}, seed: {:?})",
        n_samples, n_train, n_test, shuffle, random_state
    );

    let test_indices = indices.split_off(n_train);
    Ok((indices, test_indices))
}

/// Splits a table into training and test partitions
///
/// # Parameters
///
/// - `table` - The table to split
/// - `test_size` - Fraction of rows for the test set, default is 0.2
/// - `random_state` - Random seed, default is None
///
/// # Returns
///
/// - `Result<Partition, DataError>` - The train and test tables, rows in shuffled order
///
/// # Errors
///
/// - `DataError::InputValidationError` if `test_size` is not strictly between 0 and 1
///
/// # Example
/// ```rust
/// use datasplit::dataset::iris::load_iris;
/// use datasplit::utility::train_test_split;
///
/// let partition = train_test_split(load_iris(), Some(0.2), Some(0)).unwrap();
/// assert_eq!(partition.train.n_rows(), 120);
/// assert_eq!(partition.test.n_rows(), 30);
/// ```
pub fn train_test_split(
    table: &Table,
    test_size: Option<f64>,
    random_state: Option<u64>,
) -> Result<Partition> {
    let mut partitions = train_test_split_many(&[table], test_size, random_state, true)?;
    Ok(partitions.remove(0))
}

/// Splits several row-aligned tables with one shared permutation
///
/// Row `i` of every input table lands in the same partition, at the same position.
///
/// # Errors
///
/// - `DataError::InputValidationError` if `tables` is empty, the tables differ in
///   row count, or `test_size` is out of range
pub fn train_test_split_many(
    tables: &[&Table],
    test_size: Option<f64>,
    random_state: Option<u64>,
    shuffle: bool,
) -> Result<Vec<Partition>> {
    let first = tables.first().ok_or_else(|| {
        DataError::InputValidationError("no tables given to split".to_string())
    })?;

    let n_samples = first.n_rows();
    if let Some(other) = tables.iter().find(|t| t.n_rows() != n_samples) {
        return Err(DataError::InputValidationError(format!(
            "tables must have the same number of rows, got {} and {}",
            n_samples,
            other.n_rows()
        )));
    }

    let (train_indices, test_indices) = split_indices(
        n_samples,
        test_size.unwrap_or(DEFAULT_TEST_SIZE),
        random_state,
        shuffle,
    )?;

    Ok(tables
        .iter()
        .map(|t| Partition {
            train: t.select_rows(&train_indices),
            test: t.select_rows(&test_indices),
        })
        .collect())
}
