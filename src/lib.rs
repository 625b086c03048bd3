//! # datasplit
//!
//! Reproducible preparation of small tabular datasets such as Iris: load a CSV file,
//! drop the identifier column, optionally encode the categorical label as integer codes,
//! split the rows into train and test sets with a seeded shuffle and write each set
//! back to CSV.
//!
//! # Example
//! ```rust
//! use datasplit::prelude::*;
//!
//! let mut table = load_iris_owned();
//! table.drop_column("Id").unwrap();
//!
//! let encoded = LabelMap::iris().encode_table(&table, "Species").unwrap();
//! let parts = train_test_split_many(&[&table, &encoded], Some(0.2), Some(0), true).unwrap();
//!
//! assert_eq!(parts[0].train.n_rows(), 120);
//! assert_eq!(parts[1].test.n_rows(), 30);
//! ```

/// Module `error` defines [`DataError`], the error type returned by every fallible
/// operation of the crate
pub mod error;

/// Module `dataset` provides the in-memory table model, CSV reading and writing,
/// and the embedded Iris dataset.
///
/// # Core Types
/// - `Table` - named, equal-length, ndarray-backed columns
/// - `Column` - an integer, float or text column
/// - `Record` / `Value` - one row and one cell, used for inspection and writing
///
/// # Example
/// ```rust
/// use datasplit::dataset::{read_csv_from_reader, ColumnType};
///
/// let table = read_csv_from_reader("Id,Width,Species\n1,0.2,a\n2,1.5,b\n".as_bytes()).unwrap();
/// assert_eq!(table.column("Id").unwrap().dtype(), ColumnType::Integer);
/// assert_eq!(table.column("Width").unwrap().dtype(), ColumnType::Float);
/// assert_eq!(table.column("Species").unwrap().dtype(), ColumnType::Text);
/// ```
pub mod dataset;

/// Module `utility` contains the preprocessing steps: label encoding with a fixed
/// label map and seeded train/test splitting
pub mod utility;

/// Module `machine_learning` provides a k-nearest-neighbors classifier and accuracy
/// scoring, used to check that a produced split is usable for training
pub mod machine_learning;

/// Module `pipeline` runs the configured load, drop, encode, split and write sequence
pub mod pipeline;

/// A convenience module that re-exports the most commonly used types and functions
pub mod prelude;

pub use error::DataError;
