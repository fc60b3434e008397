use crate::error::TrendGaError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), TrendGaError>;
}

/// Shared bounds check for probability-valued fields.
pub(crate) fn ensure_probability(
    section: &str,
    field: &str,
    value: f64,
) -> Result<(), TrendGaError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(TrendGaError::Configuration(format!(
            "{}.{} must be between 0 and 1, got {}",
            section, field, value
        )));
    }
    Ok(())
}
