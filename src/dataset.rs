/// This module provides reading and writing of tables as CSV files
pub mod csv_io;
/// This module provides access to the iris dataset
pub mod iris;
/// This module provides the in-memory table model (columns, records, values)
pub mod table;

pub use csv_io::*;
pub use table::*;
