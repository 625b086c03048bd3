use crate::dataset::iris::IRIS_SPECIES;
use crate::dataset::{Column, Table};
use crate::error::{DataError, Result};
use ahash::AHashMap;
use ndarray::Array1;

/// A fixed mapping from categorical labels to the integer codes `0..n`
///
/// Codes follow the order in which labels are given to [`LabelMap::new`].
/// Encoding a value outside the map is an error rather than a missing value.
///
/// # Example
///
/// ```rust
/// use datasplit::utility::LabelMap;
///
/// let map = LabelMap::iris();
/// assert_eq!(map.encode("Iris-versicolor").unwrap(), 1);
/// assert_eq!(map.decode(2).unwrap(), "Iris-virginica");
/// assert!(map.encode("Iris-unknown").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct LabelMap {
    label_to_code: AHashMap<String, i64>,
    code_to_label: Vec<String>,
}

impl LabelMap {
    /// Creates a label map, assigning codes by position
    ///
    /// # Errors
    ///
    /// - `DataError::InputValidationError` if `labels` is empty or contains duplicates
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        if labels.is_empty() {
            return Err(DataError::InputValidationError(
                "label map needs at least one label".to_string(),
            ));
        }

        let mut label_to_code = AHashMap::with_capacity(labels.len());
        let mut code_to_label = Vec::with_capacity(labels.len());
        for (code, label) in labels.iter().enumerate() {
            let label = label.as_ref().to_string();
            if label_to_code.insert(label.clone(), code as i64).is_some() {
                return Err(DataError::InputValidationError(format!(
                    "duplicate label '{}' in label map",
                    label
                )));
            }
            code_to_label.push(label);
        }

        Ok(LabelMap {
            label_to_code,
            code_to_label,
        })
    }

    /// The Iris species map: setosa = 0, versicolor = 1, virginica = 2
    pub fn iris() -> Self {
        LabelMap {
            label_to_code: IRIS_SPECIES
                .iter()
                .enumerate()
                .map(|(code, label)| (label.to_string(), code as i64))
                .collect(),
            code_to_label: IRIS_SPECIES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.code_to_label.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_to_label.is_empty()
    }

    /// Labels in code order
    pub fn labels(&self) -> &[String] {
        &self.code_to_label
    }

    /// Returns the code of `label`
    ///
    /// # Errors
    ///
    /// - `DataError::KeyNotFound` if `label` is not in the map
    pub fn encode(&self, label: &str) -> Result<i64> {
        self.label_to_code
            .get(label)
            .copied()
            .ok_or_else(|| DataError::KeyNotFound(label.to_string()))
    }

    /// Returns the label of `code`
    ///
    /// # Errors
    ///
    /// - `DataError::KeyNotFound` if `code` is outside `0..len()`
    pub fn decode(&self, code: i64) -> Result<&str> {
        usize::try_from(code)
            .ok()
            .and_then(|i| self.code_to_label.get(i))
            .map(String::as_str)
            .ok_or_else(|| DataError::KeyNotFound(code.to_string()))
    }

    fn encode_values(&self, values: &Array1<String>) -> Result<Array1<i64>> {
        values
            .iter()
            .map(|v| self.encode(v))
            .collect::<Result<Vec<i64>>>()
            .map(Array1::from_vec)
    }

    /// Maps a text column to an integer column
    ///
    /// # Errors
    ///
    /// - `DataError::SchemaMismatch` if the column is not a text column
    /// - `DataError::KeyNotFound` on the first value outside the map
    pub fn encode_column(&self, column: &Column) -> Result<Column> {
        match column {
            Column::Text(values) => Ok(Column::Integer(self.encode_values(values)?)),
            other => Err(DataError::SchemaMismatch(format!(
                "cannot encode a {} column, expected text",
                other.dtype()
            ))),
        }
    }

    /// Maps an integer column back to a text column
    ///
    /// # Errors
    ///
    /// - `DataError::SchemaMismatch` if the column is not an integer column
    /// - `DataError::KeyNotFound` on the first code outside the map
    pub fn decode_column(&self, column: &Column) -> Result<Column> {
        match column {
            Column::Integer(codes) => {
                let labels = codes
                    .iter()
                    .map(|&c| self.decode(c).map(str::to_string))
                    .collect::<Result<Vec<String>>>()?;
                Ok(Column::Text(Array1::from_vec(labels)))
            }
            other => Err(DataError::SchemaMismatch(format!(
                "cannot decode a {} column, expected integer",
                other.dtype()
            ))),
        }
    }

    /// Returns a copy of `table` whose `column` holds codes instead of labels
    ///
    /// The input table is left unchanged.
    ///
    /// # Errors
    ///
    /// - `DataError::SchemaMismatch` if the column is absent or not text
    /// - `DataError::KeyNotFound` if a value is outside the map
    pub fn encode_table(&self, table: &Table, column: &str) -> Result<Table> {
        let encoded = self.encode_column(table.require_column(column)?)?;
        let mut out = table.clone();
        out.replace_column(column, encoded)?;
        Ok(out)
    }

    /// Returns the integer codes of `column`, encoding text columns on the fly
    ///
    /// Integer columns are checked against the map but otherwise passed through.
    pub fn codes_of(&self, table: &Table, column: &str) -> Result<Array1<i64>> {
        match table.require_column(column)? {
            Column::Integer(codes) => {
                for &c in codes.iter() {
                    self.decode(c)?;
                }
                Ok(codes.clone())
            }
            Column::Text(values) => self.encode_values(values),
            Column::Float(_) => Err(DataError::SchemaMismatch(format!(
                "label column '{}' holds floats",
                column
            ))),
        }
    }
}
