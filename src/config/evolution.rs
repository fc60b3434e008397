use super::traits::{ensure_probability, ConfigSection};
use crate::error::TrendGaError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub generations: usize,
    /// Genes are drawn uniformly from `[0, gene_upper_bound)`.
    pub gene_upper_bound: f64,
    /// Per-gene, per-child probability that a gene mutates instead of being copied.
    pub mutation_probability: f64,
    pub max_mutation_increment: i64,
    pub mutation_mode: MutationMode,
    /// Chance that a selection round picks a random survivor instead of the fittest.
    pub random_selection_probability: f64,
    pub selection_strategy: SelectionStrategy,
    /// Threshold subtracted from the weighted sum before the logistic.
    pub decision_bias: f64,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionStrategy {
    /// Mostly best-first picks with occasional random survivors.
    HybridRandomElitist,
    /// Keep the top half by fitness.
    PureElitist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationMode {
    /// Increment drawn from `[0, max]`; genes only ever grow.
    Grow,
    /// Increment drawn from `[-max, max]`.
    Symmetric,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 100,
            gene_upper_bound: 500_000.0,
            mutation_probability: 0.5,
            max_mutation_increment: 10,
            mutation_mode: MutationMode::Grow,
            random_selection_probability: 0.1,
            selection_strategy: SelectionStrategy::HybridRandomElitist,
            decision_bias: 125_000.0,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), TrendGaError> {
        if self.population_size < 2 {
            return Err(TrendGaError::Configuration(
                "Population size must be at least 2".to_string(),
            ));
        }
        if !(self.gene_upper_bound > 0.0 && self.gene_upper_bound.is_finite()) {
            return Err(TrendGaError::Configuration(format!(
                "Gene upper bound must be a positive finite number, got {}",
                self.gene_upper_bound
            )));
        }
        if self.max_mutation_increment < 0 {
            return Err(TrendGaError::Configuration(
                "Maximum mutation increment cannot be negative".to_string(),
            ));
        }
        if !self.decision_bias.is_finite() {
            return Err(TrendGaError::Configuration(
                "Decision bias must be finite".to_string(),
            ));
        }
        ensure_probability(
            Self::section_name(),
            "mutation_probability",
            self.mutation_probability,
        )?;
        ensure_probability(
            Self::section_name(),
            "random_selection_probability",
            self.random_selection_probability,
        )?;
        Ok(())
    }
}
