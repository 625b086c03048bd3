use crate::error::{DataError, Result};
use ndarray::{Array1, Array2, Axis};
use std::fmt;

/// The element type stored in a [`Column`]
///
/// # Variants
///
/// - `Integer` - 64-bit signed integers
/// - `Float` - 64-bit floats, `NaN` marks a missing cell
/// - `Text` - arbitrary strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    Text,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "integer"),
            ColumnType::Float => write!(f, "float"),
            ColumnType::Text => write!(f, "text"),
        }
    }
}

/// A single cell of a [`Record`]
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl fmt::Display for Value {
    /// Formats the cell the way it is written to CSV.
    ///
    /// Integral floats keep a trailing `.0` so that a float column is never
    /// re-read as an integer column.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", format_float(*v)),
            Value::Text(v) => write!(f, "{}", v),
            Value::Missing => Ok(()),
        }
    }
}

pub(crate) fn format_float(v: f64) -> String {
    if v.is_nan() {
        String::new()
    } else if v.is_finite() && v.fract() == 0.0 {
        // Exponent form past 1e16, where `{:.1}` would print every digit
        if v.abs() < 1e16 {
            format!("{:.1}", v)
        } else {
            format!("{:e}", v)
        }
    } else {
        format!("{}", v)
    }
}

/// One row of a [`Table`], values in column order
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub values: Vec<Value>,
}

impl Record {
    /// Renders every cell as its CSV text
    pub fn to_strings(&self) -> Vec<String> {
        self.values.iter().map(|v| v.to_string()).collect()
    }
}

/// A typed, ndarray-backed column
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Integer(Array1<i64>),
    Float(Array1<f64>),
    Text(Array1<String>),
}

impl Column {
    /// Number of cells in the column
    pub fn len(&self) -> usize {
        match self {
            Column::Integer(a) => a.len(),
            Column::Float(a) => a.len(),
            Column::Text(a) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dtype(&self) -> ColumnType {
        match self {
            Column::Integer(_) => ColumnType::Integer,
            Column::Float(_) => ColumnType::Float,
            Column::Text(_) => ColumnType::Text,
        }
    }

    /// Returns the cell at `row`, or `None` when out of bounds
    pub fn value(&self, row: usize) -> Option<Value> {
        match self {
            Column::Integer(a) => a.get(row).map(|&v| Value::Integer(v)),
            Column::Float(a) => a.get(row).map(|&v| {
                if v.is_nan() {
                    Value::Missing
                } else {
                    Value::Float(v)
                }
            }),
            Column::Text(a) => a.get(row).map(|v| Value::Text(v.clone())),
        }
    }

    /// Builds a new column holding the cells at `indices`, in that order
    pub fn select(&self, indices: &[usize]) -> Column {
        match self {
            Column::Integer(a) => Column::Integer(a.select(Axis(0), indices)),
            Column::Float(a) => Column::Float(a.select(Axis(0), indices)),
            Column::Text(a) => Column::Text(a.select(Axis(0), indices)),
        }
    }

    /// Returns the column as floats, converting integers
    ///
    /// # Errors
    ///
    /// - `DataError::SchemaMismatch` for text columns
    pub fn to_f64(&self) -> Result<Array1<f64>> {
        match self {
            Column::Integer(a) => Ok(a.mapv(|v| v as f64)),
            Column::Float(a) => Ok(a.clone()),
            Column::Text(_) => Err(DataError::SchemaMismatch(
                "text column cannot be used as a numeric feature".to_string(),
            )),
        }
    }
}

/// An ordered collection of named, equal-length columns
///
/// # Invariants
///
/// - every column has exactly `n_rows` cells
/// - column names are unique
///
/// # Example
///
/// ```rust
/// use datasplit::dataset::{Column, Table};
/// use ndarray::array;
///
/// let mut table = Table::new(
///     vec!["Id".to_string(), "Width".to_string()],
///     vec![Column::Integer(array![1, 2]), Column::Float(array![0.5, 1.5])],
/// )
/// .unwrap();
///
/// table.drop_column("Id").unwrap();
/// assert_eq!(table.column_names(), &["Width".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Creates a table from parallel vectors of names and columns
    ///
    /// # Errors
    ///
    /// - `DataError::SchemaMismatch` if the vectors differ in length, a name repeats,
    ///   or the columns differ in length
    pub fn new(names: Vec<String>, columns: Vec<Column>) -> Result<Self> {
        if names.len() != columns.len() {
            return Err(DataError::SchemaMismatch(format!(
                "{} column names for {} columns",
                names.len(),
                columns.len()
            )));
        }

        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(DataError::SchemaMismatch(format!(
                    "duplicate column name '{}'",
                    name
                )));
            }
        }

        let n_rows = columns.first().map(Column::len).unwrap_or(0);
        if let Some((i, col)) = columns
            .iter()
            .enumerate()
            .find(|(_, c)| c.len() != n_rows)
        {
            return Err(DataError::SchemaMismatch(format!(
                "column '{}' has {} rows, expected {}",
                names[i],
                col.len(),
                n_rows
            )));
        }

        Ok(Table {
            names,
            columns,
            n_rows,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.column_index(name).map(|i| &self.columns[i])
    }

    /// Like [`Table::column`] but reports an absent column as `SchemaMismatch`
    pub fn require_column(&self, name: &str) -> Result<&Column> {
        self.column(name).ok_or_else(|| missing_column(name))
    }

    /// Removes a column in place and returns it
    ///
    /// # Errors
    ///
    /// - `DataError::SchemaMismatch` if no column is named `name`
    pub fn drop_column(&mut self, name: &str) -> Result<Column> {
        let idx = self.column_index(name).ok_or_else(|| missing_column(name))?;
        self.names.remove(idx);
        let column = self.columns.remove(idx);
        if self.columns.is_empty() {
            self.n_rows = 0;
        }
        Ok(column)
    }

    /// Replaces the contents of a column, keeping its name and position
    ///
    /// # Errors
    ///
    /// - `DataError::SchemaMismatch` if the column is absent or the replacement has a different length
    pub fn replace_column(&mut self, name: &str, column: Column) -> Result<()> {
        let idx = self.column_index(name).ok_or_else(|| missing_column(name))?;
        if column.len() != self.n_rows {
            return Err(DataError::SchemaMismatch(format!(
                "replacement for '{}' has {} rows, expected {}",
                name,
                column.len(),
                self.n_rows
            )));
        }
        self.columns[idx] = column;
        Ok(())
    }

    /// Returns the row at `row`, or `None` when out of bounds
    pub fn record(&self, row: usize) -> Option<Record> {
        if row >= self.n_rows {
            return None;
        }
        let values = self
            .columns
            .iter()
            .map(|c| c.value(row).unwrap_or(Value::Missing))
            .collect();
        Some(Record { values })
    }

    /// Iterates over all rows in order
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        (0..self.n_rows).filter_map(move |i| self.record(i))
    }

    /// Builds a new table with the rows at `indices`, in that order
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds, like `ndarray`'s `select`.
    pub fn select_rows(&self, indices: &[usize]) -> Table {
        Table {
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| c.select(indices)).collect(),
            n_rows: indices.len(),
        }
    }

    /// Stacks the named numeric columns into an `(n_rows, names.len())` matrix
    ///
    /// # Errors
    ///
    /// - `DataError::SchemaMismatch` if a column is absent or holds text
    pub fn feature_matrix(&self, names: &[&str]) -> Result<Array2<f64>> {
        let mut matrix = Array2::<f64>::zeros((self.n_rows, names.len()));
        for (j, name) in names.iter().enumerate() {
            let values = self.require_column(name)?.to_f64().map_err(|_| {
                DataError::SchemaMismatch(format!("column '{}' is not numeric", name))
            })?;
            matrix.column_mut(j).assign(&values);
        }
        Ok(matrix)
    }
}

fn missing_column(name: &str) -> DataError {
    DataError::SchemaMismatch(format!("column '{}' not found", name))
}
