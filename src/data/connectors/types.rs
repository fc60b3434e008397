use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Metadata about a loaded feature dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub file_path: String,
    pub num_rows: usize,
    pub feature_columns: Vec<String>,
    pub index_column: Option<String>,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub close_range: (f64, f64), // (min, max)
}

impl DatasetMetadata {
    /// Metadata for rows built in memory rather than read from a file.
    pub fn in_memory(num_rows: usize) -> Self {
        Self {
            file_path: String::new(),
            num_rows,
            feature_columns: Vec::new(),
            index_column: None,
            date_range: None,
            close_range: (0.0, 0.0),
        }
    }
}
