pub mod traits;
pub mod evolution;
pub mod data;
pub mod output;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::{EvolutionConfig, MutationMode, SelectionStrategy};
pub use data::DataConfig;
pub use output::OutputConfig;
pub use traits::ConfigSection;
