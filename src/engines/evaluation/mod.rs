pub mod fitness;

pub use fitness::{stable_logistic, weighted_sum, FitnessEvaluator, FitnessReport};
