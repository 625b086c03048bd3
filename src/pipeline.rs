use crate::dataset::iris::{ID_COLUMN, LABEL_COLUMN};
use crate::dataset::{Table, read_csv, write_csv};
use crate::error::{DataError, Result};
use crate::machine_learning::evaluate_split;
use crate::utility::{DEFAULT_TEST_SIZE, LabelMap, Partition, train_test_split_many};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Destination files of one train/test pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputPaths {
    pub train: PathBuf,
    pub test: PathBuf,
}

impl OutputPaths {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(train: P, test: Q) -> Self {
        OutputPaths {
            train: train.into(),
            test: test.into(),
        }
    }
}

/// Settings of a split run
///
/// The defaults reproduce the plain Iris preparation step: read `Datasets/iris.csv`,
/// drop `Id`, split 80/20 with seed 0 and write `Datasets/train.csv` and
/// `Datasets/test.csv`. Fields missing from a JSON file take these defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    pub input: PathBuf,
    pub drop_column: String,
    pub label_column: String,
    /// Labels in code order; `None` uses the Iris species map
    pub labels: Option<Vec<String>>,
    pub test_size: f64,
    pub random_state: Option<u64>,
    pub shuffle: bool,
    pub output: OutputPaths,
    /// Second train/test pair with the label column replaced by its codes
    pub encoded_output: Option<OutputPaths>,
    /// When set, the written split is scored with a k-NN classifier using this many neighbors
    pub knn_neighbors: Option<usize>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        SplitConfig {
            input: PathBuf::from("Datasets/iris.csv"),
            drop_column: ID_COLUMN.to_string(),
            label_column: LABEL_COLUMN.to_string(),
            labels: None,
            test_size: DEFAULT_TEST_SIZE,
            random_state: Some(0),
            shuffle: true,
            output: OutputPaths::new("Datasets/train.csv", "Datasets/test.csv"),
            encoded_output: None,
            knn_neighbors: None,
        }
    }
}

impl SplitConfig {
    /// The default settings plus the label-encoded train/test pair
    pub fn with_encoded_labels() -> Self {
        SplitConfig {
            encoded_output: Some(OutputPaths::new(
                "Datasets/train_encoded.csv",
                "Datasets/test_encoded.csv",
            )),
            ..SplitConfig::default()
        }
    }

    /// Loads settings from a JSON file
    ///
    /// # Errors
    ///
    /// - `DataError::FileNotFound` if the file does not exist
    /// - `DataError::Json` if the file is not a valid configuration
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DataError::FileNotFound(path.to_path_buf()),
            _ => DataError::Io(e),
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// The label map named by `labels`, or the Iris map
    pub fn label_map(&self) -> Result<LabelMap> {
        match &self.labels {
            Some(labels) => LabelMap::new(labels),
            None => Ok(LabelMap::iris()),
        }
    }
}

/// Outcome of [`run`]
#[derive(Debug, Clone, PartialEq)]
pub struct SplitReport {
    pub train_rows: usize,
    pub test_rows: usize,
    /// Every file written, in write order
    pub written: Vec<PathBuf>,
    /// k-NN test accuracy when `knn_neighbors` was set
    pub accuracy: Option<f64>,
}

/// Runs the whole preparation: load, drop the identifier, optionally encode the
/// labels, split with one shared permutation and write every partition
///
/// # Errors
///
/// Any [`DataError`] from the individual steps; the run stops at the first one
/// and files already written are left in place.
pub fn run(config: &SplitConfig) -> Result<SplitReport> {
    let mut table = read_csv(&config.input)?;
    info!(
        "Loaded {} rows x {} columns from {}",
        table.n_rows(),
        table.n_cols(),
        config.input.display()
    );

    table.drop_column(&config.drop_column)?;
    info!("Dropped column '{}'", config.drop_column);
    table.require_column(&config.label_column)?;

    let encoded = match config.encoded_output {
        Some(_) => {
            let label_map = config.label_map()?;
            let encoded = label_map.encode_table(&table, &config.label_column)?;
            info!(
                "Encoded '{}' with {} labels",
                config.label_column,
                label_map.len()
            );
            Some(encoded)
        }
        None => None,
    };

    let mut tables: Vec<&Table> = vec![&table];
    if let Some(encoded) = &encoded {
        tables.push(encoded);
    }
    let partitions = train_test_split_many(
        &tables,
        Some(config.test_size),
        config.random_state,
        config.shuffle,
    )?;

    let mut written = Vec::new();
    let mut outputs = vec![&config.output];
    if let Some(paths) = &config.encoded_output {
        outputs.push(paths);
    }
    for (partition, paths) in partitions.iter().zip(outputs) {
        write_partition(partition, paths)?;
        written.push(paths.train.clone());
        written.push(paths.test.clone());
    }

    let plain = &partitions[0];
    let accuracy = match config.knn_neighbors {
        Some(k) => {
            let label_map = config.label_map()?;
            Some(evaluate_split(plain, &config.label_column, &label_map, k)?)
        }
        None => None,
    };

    Ok(SplitReport {
        train_rows: plain.train.n_rows(),
        test_rows: plain.test.n_rows(),
        written,
        accuracy,
    })
}

/// Writes both tables of a partition, creating parent directories as needed
pub fn write_partition(partition: &Partition, paths: &OutputPaths) -> Result<()> {
    for (table, path) in [(&partition.train, &paths.train), (&partition.test, &paths.test)] {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        write_csv(table, path)?;
        info!("Wrote {} rows to {}", table.n_rows(), path.display());
    }
    Ok(())
}
