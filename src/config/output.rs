use super::traits::ConfigSection;
use crate::error::TrendGaError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub record_statistics: bool,
    pub statistics_path: PathBuf,
    pub chart_path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            record_statistics: true,
            statistics_path: PathBuf::from("stat.txt"),
            chart_path: None,
        }
    }
}

impl ConfigSection for OutputConfig {
    fn section_name() -> &'static str {
        "output"
    }

    fn validate(&self) -> Result<(), TrendGaError> {
        if self.record_statistics && self.statistics_path.as_os_str().is_empty() {
            return Err(TrendGaError::Configuration(
                "Statistics path is required when recording statistics".to_string(),
            ));
        }
        Ok(())
    }
}
