use super::traits::ConfigSection;
use crate::error::TrendGaError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Column excluded from the feature vector.
    pub index_column: String,
    /// Format used to read dates out of the index column for metadata.
    pub date_format: String,
    pub min_rows: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            index_column: "Date".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            min_rows: 2,
        }
    }
}

impl ConfigSection for DataConfig {
    fn section_name() -> &'static str {
        "data"
    }

    fn validate(&self) -> Result<(), TrendGaError> {
        if self.index_column.trim().is_empty() {
            return Err(TrendGaError::Configuration(
                "Index column name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
