use crate::config::DataConfig;
use crate::data::dataset::Dataset;
use crate::error::{Result, TrendGaError};
use crate::types::{FeatureRow, CLOSE_INDEX, GENE_COUNT};
use chrono::NaiveDate;
use polars::prelude::*;
use std::path::Path;
use super::{types::DatasetMetadata, validator::DataValidator};

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))
            .map_err(|e| {
                TrendGaError::DataLoading(format!(
                    "Failed to open {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?
            .finish()
            .map_err(|e| TrendGaError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    /// Load a CSV file and convert it into chronological feature rows.
    pub fn load_dataset<P: AsRef<Path>>(path: P, config: &DataConfig) -> Result<Dataset> {
        let df = Self::load(&path)?;
        let mut dataset = Self::dataset_from_frame(&df, config)?;
        dataset.metadata.file_path = path.as_ref().to_string_lossy().to_string();

        log::info!(
            "Loaded {} rows from {} (dates: {:?})",
            dataset.len(),
            dataset.metadata.file_path,
            dataset.metadata.date_range
        );
        Ok(dataset)
    }

    /// Convert an already loaded frame; the index column is excluded from the features.
    pub fn dataset_from_frame(df: &DataFrame, config: &DataConfig) -> Result<Dataset> {
        let feature_columns = DataValidator::validate_features(df, &config.index_column)?;
        DataValidator::validate_minimum_rows(df, config.min_rows)?;

        let null_report = DataValidator::check_nulls(df, &feature_columns)?;
        if !null_report.is_empty() {
            return Err(TrendGaError::DataLoading(format!(
                "Null values in feature columns: {:?}",
                null_report
            )));
        }

        let mut rows: Vec<FeatureRow> = vec![[0.0; GENE_COUNT]; df.height()];
        for (feature, name) in feature_columns.iter().enumerate() {
            let column = df.column(name)?.cast(&DataType::Float64)?;
            let values = column.f64()?;
            for (row, value) in rows.iter_mut().zip(values.into_iter()) {
                row[feature] = value.ok_or_else(|| {
                    TrendGaError::DataLoading(format!("Null value in column '{}'", name))
                })?;
            }
        }

        let close_range = rows
            .iter()
            .map(|row| row[CLOSE_INDEX])
            .fold(None, |acc: Option<(f64, f64)>, close| match acc {
                Some((min, max)) => Some((min.min(close), max.max(close))),
                None => Some((close, close)),
            })
            .unwrap_or((0.0, 0.0));

        let index_column = df
            .get_column_names()
            .iter()
            .any(|c| c.as_str() == config.index_column)
            .then(|| config.index_column.clone());

        let date_range = match &index_column {
            Some(name) => Self::detect_date_range(df, name, &config.date_format),
            None => None,
        };

        let metadata = DatasetMetadata {
            file_path: String::new(),
            num_rows: rows.len(),
            feature_columns,
            index_column,
            date_range,
            close_range,
        };

        Ok(Dataset::with_metadata(rows, metadata))
    }

    // Best effort; an unparseable index column only loses the metadata.
    fn detect_date_range(
        df: &DataFrame,
        index_column: &str,
        date_format: &str,
    ) -> Option<(NaiveDate, NaiveDate)> {
        let column = df.column(index_column).ok()?;
        let dates = column.str().ok()?;
        let height = df.height();
        if height == 0 {
            return None;
        }

        let first = NaiveDate::parse_from_str(dates.get(0)?, date_format).ok()?;
        let last = NaiveDate::parse_from_str(dates.get(height - 1)?, date_format).ok()?;
        Some((first, last))
    }
}
