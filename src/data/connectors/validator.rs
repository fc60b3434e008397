use crate::error::{Result, TrendGaError};
use crate::types::GENE_COUNT;
use polars::prelude::*;

pub struct DataValidator;

impl DataValidator {
    /// Names of the feature columns, in file order, once the index column is set aside.
    ///
    /// Fails unless exactly `GENE_COUNT` numeric columns remain.
    pub fn validate_features(df: &DataFrame, index_column: &str) -> Result<Vec<String>> {
        let mut features = Vec::new();

        for column in df.get_columns() {
            let name = column.name().as_str();
            if name == index_column {
                continue;
            }
            if !Self::is_numeric(column.dtype()) {
                return Err(TrendGaError::DataLoading(format!(
                    "Column '{}' must be numeric, found {:?}",
                    name,
                    column.dtype()
                )));
            }
            features.push(name.to_string());
        }

        if features.len() != GENE_COUNT {
            return Err(TrendGaError::DataLoading(format!(
                "Expected {} feature columns besides '{}', found {}: {:?}",
                GENE_COUNT,
                index_column,
                features.len(),
                features
            )));
        }

        Ok(features)
    }

    /// Check for minimum required rows
    pub fn validate_minimum_rows(df: &DataFrame, min_rows: usize) -> Result<()> {
        if df.height() < min_rows {
            return Err(TrendGaError::DataLoading(format!(
                "Insufficient data: {} rows, minimum {} required",
                df.height(),
                min_rows
            )));
        }
        Ok(())
    }

    /// Check for null values in critical columns
    pub fn check_nulls(df: &DataFrame, columns: &[String]) -> Result<Vec<(String, usize)>> {
        let mut null_report = Vec::new();

        for col_name in columns {
            let null_count = df.column(col_name)?.null_count();
            if null_count > 0 {
                null_report.push((col_name.clone(), null_count));
            }
        }

        Ok(null_report)
    }

    fn is_numeric(dtype: &DataType) -> bool {
        matches!(
            dtype,
            DataType::Float64
                | DataType::Float32
                | DataType::Int64
                | DataType::Int32
                | DataType::Int16
                | DataType::Int8
                | DataType::UInt64
                | DataType::UInt32
                | DataType::UInt16
                | DataType::UInt8
        )
    }
}
