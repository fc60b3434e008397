pub mod individual;
pub mod operators;
pub mod selection;
pub mod evolution_engine;
pub mod progress;

pub use individual::{create_population, Individual};
pub use operators::{add_children, crossover, cut_points, VariationSettings};
pub use selection::{select, select_elitist, select_fittest};
pub use evolution_engine::{
    average_fitness, get_optimal, EvolutionEngine, EvolutionOutcome, ProgressCallback,
};
pub use progress::{LoggingProgressCallback, SilentProgressCallback};
