use crate::data::Dataset;
use crate::engines::generation::Individual;
use crate::types::{Direction, FeatureRow};

/// Outcome of scoring one individual over every labelled step of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FitnessReport {
    pub successes: u32,
    pub failures: u32,
}

impl FitnessReport {
    pub fn total(&self) -> u32 {
        self.successes + self.failures
    }
}

/// Scores weight vectors with a logistic threshold on the biased weighted sum.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator {
    bias: f64,
}

impl FitnessEvaluator {
    pub fn new(bias: f64) -> Self {
        Self { bias }
    }

    /// Count correct direction calls and store the count as the individual's fitness.
    pub fn evaluate(&self, individual: &mut Individual, dataset: &Dataset) -> FitnessReport {
        let mut report = FitnessReport::default();

        for (row, truth) in dataset.labelled_steps() {
            if self.classify(&individual.weights, row) == truth {
                report.successes += 1;
            } else {
                report.failures += 1;
            }
        }

        individual.fitness = report.successes;
        report
    }

    /// Re-evaluates every individual, survivors included.
    pub fn evaluate_population(
        &self,
        population: Vec<Individual>,
        dataset: &Dataset,
    ) -> Vec<Individual> {
        population
            .into_iter()
            .map(|mut individual| {
                self.evaluate(&mut individual, dataset);
                individual
            })
            .collect()
    }

    pub fn classify(&self, weights: &FeatureRow, row: &FeatureRow) -> Direction {
        if self.activation(weights, row) >= 0.5 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn activation(&self, weights: &FeatureRow, row: &FeatureRow) -> f64 {
        stable_logistic(weighted_sum(weights, row) - self.bias)
    }
}

pub fn weighted_sum(weights: &FeatureRow, row: &FeatureRow) -> f64 {
    weights.iter().zip(row.iter()).map(|(w, v)| w * v).sum()
}

/// Logistic function evaluated on the side that keeps `exp` from overflowing.
pub fn stable_logistic(gamma: f64) -> f64 {
    if gamma < 0.0 {
        1.0 - 1.0 / (1.0 + gamma.exp())
    } else {
        1.0 / (1.0 + (-gamma).exp())
    }
}
