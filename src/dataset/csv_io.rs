use super::table::{Column, ColumnType, Table};
use crate::error::{DataError, Result};
use log::debug;
use ndarray::Array1;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Reads a CSV file with a header row into a [`Table`]
///
/// Column types are inferred from the cells: a column whose non-empty cells all
/// parse as `i64` becomes an integer column, one whose non-empty cells all parse
/// as `f64` becomes a float column, anything else stays text. Numeric columns with
/// empty cells become float columns holding `NaN` for the missing values.
///
/// # Parameters
///
/// * `path` - Path of the CSV file
///
/// # Errors
///
/// - `DataError::FileNotFound` if the file does not exist
/// - `DataError::ParseError` if the header is missing or a row has the wrong number of fields
///
/// # Example
///
/// ```rust,no_run
/// use datasplit::dataset::read_csv;
///
/// let table = read_csv("Datasets/iris.csv").unwrap();
/// assert_eq!(table.n_rows(), 150);
/// ```
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataError::FileNotFound(path.to_path_buf()),
        _ => DataError::Io(e),
    })?;
    let table = read_csv_from_reader(file)?;
    debug!(
        "Read {} rows x {} columns from {}",
        table.n_rows(),
        table.n_cols(),
        path.display()
    );
    Ok(table)
}

/// Reads CSV text from any reader, see [`read_csv`]
pub fn read_csv_from_reader<R: Read>(reader: R) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let names: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if names.is_empty() || (names.len() == 1 && names[0].is_empty()) {
        return Err(DataError::ParseError("missing header row".to_string()));
    }

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); names.len()];
    for record in reader.records() {
        let record = record?;
        for (col, field) in cells.iter_mut().zip(record.iter()) {
            col.push(field.to_string());
        }
    }

    let columns = cells.into_iter().map(infer_column).collect::<Vec<_>>();
    for (name, col) in names.iter().zip(&columns) {
        debug!("Column '{}' inferred as {}", name, col.dtype());
    }

    Table::new(names, columns)
}

fn infer_column(cells: Vec<String>) -> Column {
    let non_empty = || cells.iter().map(|c| c.trim()).filter(|c| !c.is_empty());
    let has_missing = cells.iter().any(|c| c.trim().is_empty());

    let dtype = if non_empty().all(|c| c.parse::<i64>().is_ok()) && !has_missing {
        ColumnType::Integer
    } else if non_empty().all(|c| c.parse::<f64>().is_ok()) {
        ColumnType::Float
    } else {
        ColumnType::Text
    };

    match dtype {
        ColumnType::Integer => Column::Integer(Array1::from_iter(
            cells.iter().map(|c| c.trim().parse::<i64>().unwrap_or_default()),
        )),
        ColumnType::Float => Column::Float(Array1::from_iter(cells.iter().map(|c| {
            let c = c.trim();
            if c.is_empty() {
                f64::NAN
            } else {
                c.parse::<f64>().unwrap_or(f64::NAN)
            }
        }))),
        ColumnType::Text => Column::Text(Array1::from_vec(cells)),
    }
}

/// Writes a [`Table`] to a CSV file, creating or overwriting it
///
/// The header row holds the column names in table order; no index column is added.
///
/// # Errors
///
/// - `DataError::Io` if the file cannot be created or written
pub fn write_csv<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv_to_writer(table, file)?;
    debug!("Wrote {} rows to {}", table.n_rows(), path.display());
    Ok(())
}

/// Writes a [`Table`] as CSV to any writer, see [`write_csv`]
pub fn write_csv_to_writer<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(table.column_names())?;
    for record in table.records() {
        writer.write_record(record.to_strings())?;
    }
    writer.flush()?;
    Ok(())
}
