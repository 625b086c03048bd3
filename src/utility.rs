/// This module provides the fixed label map used to turn categorical labels into
/// small integer codes and back
pub mod label_encoding;

/// This module provides functionality for splitting tables into training and test sets
/// with a reproducible, seeded shuffle
pub mod train_test_split;

pub use label_encoding::*;
pub use train_test_split::*;
