use crate::config::SelectionStrategy;
use crate::engines::generation::individual::Individual;
use rand::Rng;

/// Reduce a population to half its size.
///
/// Populations with fewer than two members are returned unchanged.
pub fn select<R: Rng>(
    population: Vec<Individual>,
    strategy: SelectionStrategy,
    random_probability: f64,
    rng: &mut R,
) -> Vec<Individual> {
    match strategy {
        SelectionStrategy::HybridRandomElitist => {
            select_fittest(population, random_probability, rng)
        }
        SelectionStrategy::PureElitist => select_elitist(population),
    }
}

/// Hybrid selection without replacement.
///
/// Runs `len / 2` rounds, the count fixed before the first pick. Each round
/// takes a uniformly random individual with probability `random_probability`,
/// otherwise the first individual of maximal fitness in pool order.
pub fn select_fittest<R: Rng>(
    mut pool: Vec<Individual>,
    random_probability: f64,
    rng: &mut R,
) -> Vec<Individual> {
    if pool.len() < 2 {
        return pool;
    }

    let rounds = pool.len() / 2;
    let mut fittest = Vec::with_capacity(rounds);

    for _ in 0..rounds {
        let idx = if rng.gen::<f64>() <= random_probability {
            rng.gen_range(0..pool.len())
        } else {
            index_of_best(&pool)
        };
        // `remove` keeps pool order, which decides ties in later rounds.
        fittest.push(pool.remove(idx));
    }

    fittest
}

/// Keep the top half by fitness; equal fitness keeps the earlier individual.
pub fn select_elitist(mut population: Vec<Individual>) -> Vec<Individual> {
    if population.len() < 2 {
        return population;
    }

    let keep = population.len() / 2;
    population.sort_by(|a, b| b.fitness.cmp(&a.fitness));
    population.truncate(keep);
    population
}

fn index_of_best(pool: &[Individual]) -> usize {
    let mut best = 0;
    for (i, individual) in pool.iter().enumerate().skip(1) {
        if individual.fitness > pool[best].fitness {
            best = i;
        }
    }
    best
}
