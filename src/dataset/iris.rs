use super::csv_io::read_csv_from_reader;
use super::table::Table;
use std::sync::OnceLock;

/// Name of the identifier column dropped before splitting
pub const ID_COLUMN: &str = "Id";

/// Name of the categorical label column
pub const LABEL_COLUMN: &str = "Species";

/// The three species in label-code order
pub const IRIS_SPECIES: [&str; 3] = ["Iris-setosa", "Iris-versicolor", "Iris-virginica"];

/// The four measurement columns, in file order
pub const IRIS_FEATURES: [&str; 4] = [
    "SepalLengthCm",
    "SepalWidthCm",
    "PetalLengthCm",
    "PetalWidthCm",
];

const IRIS_RAW: &str = include_str!("../../Datasets/iris.csv");

// Use `OnceLock` for thread-safe delayed initialization
static IRIS_DATA: OnceLock<Table> = OnceLock::new();

/// Loads the Iris dataset
///
/// The Iris dataset contains measurements of 150 iris flowers, 50 from each of three species:
/// - Iris-setosa
/// - Iris-versicolor
/// - Iris-virginica
///
/// The table keeps the raw file layout: `Id` (integer), the four measurements in cm (float)
/// and `Species` (text). The embedded CSV is parsed on first use and cached.
///
/// # Example
///
/// ```
/// use datasplit::dataset::iris::load_iris;
///
/// let iris = load_iris();
/// assert_eq!(iris.n_rows(), 150);
/// assert_eq!(iris.n_cols(), 6);
/// ```
pub fn load_iris() -> &'static Table {
    IRIS_DATA.get_or_init(|| {
        read_csv_from_reader(IRIS_RAW.as_bytes())
            .unwrap_or_else(|e| panic!("embedded iris dataset is malformed: {}", e))
    })
}

/// Loads an owned copy of the Iris dataset, see [`load_iris`]
pub fn load_iris_owned() -> Table {
    load_iris().clone()
}
