pub mod connectors;
pub mod dataset;

pub use connectors::{CsvConnector, DataValidator, DatasetMetadata};
pub use dataset::Dataset;
