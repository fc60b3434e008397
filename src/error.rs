use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrendGaError {
    #[error("Data loading error: {0}")]
    DataLoading(String),

    #[error("Population is empty: {0}")]
    EmptyPopulation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Statistics error: {0}")]
    Statistics(String),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, TrendGaError>;
