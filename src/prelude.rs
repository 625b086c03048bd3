pub use crate::dataset::iris::{
    ID_COLUMN, IRIS_FEATURES, IRIS_SPECIES, LABEL_COLUMN, load_iris, load_iris_owned,
};
pub use crate::dataset::{
    Column, ColumnType, Record, Table, Value, read_csv, read_csv_from_reader, write_csv,
    write_csv_to_writer,
};
pub use crate::error::{DataError, Result};
pub use crate::machine_learning::{KNN, accuracy, evaluate_split};
pub use crate::pipeline::{OutputPaths, SplitConfig, SplitReport, run};
pub use crate::utility::{
    DEFAULT_TEST_SIZE, LabelMap, Partition, split_indices, train_test_split,
    train_test_split_many,
};
