use crate::config::{EvolutionConfig, MutationMode};
use crate::engines::generation::individual::Individual;
use crate::types::GENE_COUNT;
use rand::seq::SliceRandom;
use rand::Rng;

/// Parameters of the variation step.
#[derive(Debug, Clone, Copy)]
pub struct VariationSettings {
    pub mutation_probability: f64,
    pub max_increment: i64,
    pub mode: MutationMode,
}

impl VariationSettings {
    fn increment<R: Rng>(&self, rng: &mut R) -> f64 {
        let max = self.max_increment;
        match self.mode {
            MutationMode::Grow => rng.gen_range(0..=max) as f64,
            MutationMode::Symmetric => rng.gen_range(-max..=max) as f64,
        }
    }
}

impl Default for VariationSettings {
    fn default() -> Self {
        Self::from(&EvolutionConfig::default())
    }
}

impl From<&EvolutionConfig> for VariationSettings {
    fn from(config: &EvolutionConfig) -> Self {
        Self {
            mutation_probability: config.mutation_probability,
            max_increment: config.max_mutation_increment,
            mode: config.mutation_mode,
        }
    }
}

/// Two cut points: the first in the lower half of the genome, the second in the upper half.
///
/// For seven genes this is `[0, 3]` and `[4, 6]`.
pub fn cut_points<R: Rng>(gene_count: usize, rng: &mut R) -> (usize, usize) {
    let mid = gene_count / 2;
    let cut1 = rng.gen_range(0..=mid);
    let cut2 = rng.gen_range(mid + 1..=gene_count - 1);
    (cut1, cut2)
}

/// Two-point crossover with per-gene mutation.
///
/// Each gene of each child either mutates or is copied, never both. A mutated
/// gene starts from the child's blank value and does not look at either parent.
/// Copied genes follow the segments `[0, cut1)`, `[cut1, cut2)`, `[cut2, n)`:
/// child A takes `(a, b, a)` and child B the mirror `(b, a, b)`.
pub fn crossover<R: Rng>(
    parent_a: &Individual,
    parent_b: &Individual,
    settings: &VariationSettings,
    rng: &mut R,
) -> (Individual, Individual) {
    let (cut1, cut2) = cut_points(GENE_COUNT, rng);
    let mut child_a = Individual::blank();
    let mut child_b = Individual::blank();

    for i in 0..GENE_COUNT {
        let roll_a = rng.gen::<f64>();
        let roll_b = rng.gen::<f64>();

        child_a.weights[i] = if roll_a <= settings.mutation_probability {
            child_a.weights[i] + settings.increment(rng)
        } else {
            segment_gene(i, cut1, cut2, parent_a, parent_b)
        };

        child_b.weights[i] = if roll_b <= settings.mutation_probability {
            child_b.weights[i] + settings.increment(rng)
        } else {
            segment_gene(i, cut1, cut2, parent_b, parent_a)
        };
    }

    (child_a, child_b)
}

fn segment_gene(i: usize, cut1: usize, cut2: usize, outer: &Individual, inner: &Individual) -> f64 {
    if (cut1..cut2).contains(&i) {
        inner.weights[i]
    } else {
        outer.weights[i]
    }
}

/// Shuffle, pair the two halves index by index and append both children of every pair.
///
/// With an odd population the last individual of the shuffled order has no
/// partner: it is kept unchanged but produces no offspring this generation.
/// The result holds `n + 2 * (n / 2)` individuals. Populations too small to
/// pair are returned as they are.
pub fn add_children<R: Rng>(
    mut population: Vec<Individual>,
    settings: &VariationSettings,
    rng: &mut R,
) -> Vec<Individual> {
    if population.len() < 2 {
        return population;
    }

    population.shuffle(rng);
    let mid = population.len() / 2;

    let mut children = Vec::with_capacity(mid * 2);
    for i in 0..mid {
        let (child_a, child_b) = crossover(&population[i], &population[mid + i], settings, rng);
        children.push(child_a);
        children.push(child_b);
    }

    population.extend(children);
    population
}
