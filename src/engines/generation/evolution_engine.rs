use crate::config::{ConfigSection, EvolutionConfig};
use crate::data::Dataset;
use crate::engines::evaluation::FitnessEvaluator;
use crate::engines::generation::{
    individual::{create_population, Individual},
    operators::{add_children, VariationSettings},
    selection::select,
};
use crate::error::{Result, TrendGaError};
use crate::report::StatisticsSink;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub trait ProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}
    fn on_generation_complete(&mut self, generation: usize, average_fitness: f64, best_fitness: u32);
}

/// Final population plus the average fitness recorded at every checkpoint
/// (the initial population first, then one entry per generation).
#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    pub population: Vec<Individual>,
    pub average_fitness: Vec<f64>,
}

impl EvolutionOutcome {
    pub fn best(&self) -> Option<&Individual> {
        get_optimal(&self.population)
    }
}

pub struct EvolutionEngine {
    config: EvolutionConfig,
    evaluator: FitnessEvaluator,
    variation: VariationSettings,
    rng: StdRng,
}

impl EvolutionEngine {
    pub fn new(config: EvolutionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            evaluator: FitnessEvaluator::new(config.decision_bias),
            variation: VariationSettings::from(&config),
            config,
            rng,
        }
    }

    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    /// Run the evolution process
    ///
    /// Each generation grows the population with offspring, re-evaluates every
    /// member against `dataset` and selects half of them back out. The population
    /// changes hands by value between the phases.
    pub fn run<C: ProgressCallback>(
        &mut self,
        dataset: &Dataset,
        mut statistics: Option<&mut dyn StatisticsSink>,
        callback: &mut C,
    ) -> Result<EvolutionOutcome> {
        self.config.validate()?;

        let mut population = create_population(
            self.config.population_size,
            self.config.gene_upper_bound,
            &mut self.rng,
        );
        log::debug!(
            "Created initial population of {} over {} rows",
            population.len(),
            dataset.len()
        );

        // Not yet evaluated, so every fitness is still zero here.
        let mut history = Vec::with_capacity(self.config.generations + 1);
        let initial = average_fitness(&population)?;
        history.push(initial);
        if let Some(sink) = statistics.as_deref_mut() {
            sink.record(initial)?;
        }

        for generation in 1..=self.config.generations {
            callback.on_generation_start(generation);

            let grown = add_children(population, &self.variation, &mut self.rng);
            let evaluated = self.evaluator.evaluate_population(grown, dataset);
            population = select(
                evaluated,
                self.config.selection_strategy,
                self.config.random_selection_probability,
                &mut self.rng,
            );

            let average = average_fitness(&population)?;
            history.push(average);
            if let Some(sink) = statistics.as_deref_mut() {
                sink.record(average)?;
            }

            let best = get_optimal(&population).map(|i| i.fitness).unwrap_or(0);
            callback.on_generation_complete(generation, average, best);
        }

        Ok(EvolutionOutcome {
            population,
            average_fitness: history,
        })
    }
}

/// Mean fitness of a population; an empty population is an error rather than NaN.
pub fn average_fitness(population: &[Individual]) -> Result<f64> {
    if population.is_empty() {
        return Err(TrendGaError::EmptyPopulation(
            "cannot average the fitness of zero individuals".to_string(),
        ));
    }

    let sum: u64 = population.iter().map(|i| u64::from(i.fitness)).sum();
    Ok(sum as f64 / population.len() as f64)
}

/// The fittest individual; the earliest one wins a tie.
pub fn get_optimal(population: &[Individual]) -> Option<&Individual> {
    population
        .iter()
        .reduce(|best, candidate| if candidate.fitness > best.fitness { candidate } else { best })
}
