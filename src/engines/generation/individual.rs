//! A candidate weight vector and its cached fitness.
//!
//! The weight vector is a fixed-size array, so every individual carries
//! exactly one gene per dataset feature for its whole lifetime.
//!
//! # Fitness
//!
//! `fitness` is the number of correct next-step direction calls on the dataset
//! it was last evaluated against. Freshly created individuals and offspring
//! start at `0` until the evaluator scores them.

use crate::types::{FeatureRow, GENE_COUNT};
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    pub weights: FeatureRow,
    pub fitness: u32,
}

impl Individual {
    pub fn new(weights: FeatureRow) -> Self {
        Self { weights, fitness: 0 }
    }

    /// All genes zero; the starting point for offspring.
    pub fn blank() -> Self {
        Self::new([0.0; GENE_COUNT])
    }

    /// Genes drawn independently from `[0, upper_bound)`.
    pub fn random<R: Rng>(upper_bound: f64, rng: &mut R) -> Self {
        Self::new(std::array::from_fn(|_| rng.gen_range(0.0..upper_bound)))
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weights: [")?;
        for (i, w) in self.weights.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.4}", w)?;
        }
        write!(f, "], Fitness: {}", self.fitness)
    }
}

/// Generate the initial population
pub fn create_population<R: Rng>(size: usize, upper_bound: f64, rng: &mut R) -> Vec<Individual> {
    (0..size)
        .map(|_| Individual::random(upper_bound, rng))
        .collect()
}
