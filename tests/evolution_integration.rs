use trendga::config::{DataConfig, EvolutionConfig, SelectionStrategy};
use trendga::data::{CsvConnector, Dataset};
use trendga::engines::evaluation::FitnessEvaluator;
use trendga::engines::generation::{
    get_optimal, EvolutionEngine, Individual, ProgressCallback, SilentProgressCallback,
};
use trendga::report::{read_statistics, StatisticsSink, StatisticsWriter};
use trendga::types::{FeatureRow, CLOSE_INDEX, GENE_COUNT};

/// Records every callback so tests can check ordering.
#[derive(Default)]
struct RecordingProgressCallback {
    started: Vec<usize>,
    completed: Vec<(usize, f64, u32)>,
}

impl ProgressCallback for RecordingProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        self.started.push(generation);
    }

    fn on_generation_complete(&mut self, generation: usize, average_fitness: f64, best_fitness: u32) {
        self.completed.push((generation, average_fitness, best_fitness));
    }
}

fn sample_csv() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/sample_prices.csv")
}

/// Strictly rising closes with features large enough that any positive
/// weight calls every step "up".
fn rising_dataset(rows: usize) -> Dataset {
    let rows = (0..rows)
        .map(|t| {
            let mut row: FeatureRow = [1e9; GENE_COUNT];
            row[CLOSE_INDEX] = 1e9 + 1_000.0 * t as f64;
            row
        })
        .collect();
    Dataset::new(rows)
}

#[test]
fn test_sigmoid_scenario_matches_manual_calculation() {
    // Weighted sum is 70_000 * w against a bias of 125_000:
    // w = 0 and w = 1 fall below the threshold and call "down",
    // w = 2 and w = 3 clear it and call "up". The price rises.
    let mut row0 = [10_000.0; GENE_COUNT];
    row0[CLOSE_INDEX] = 10_000.0;
    let mut row1 = row0;
    row1[CLOSE_INDEX] = 10_100.0;
    let dataset = Dataset::new(vec![row0, row1]);

    let evaluator = FitnessEvaluator::new(125_000.0);
    let expected = [0, 0, 1, 1];

    for (w, &fitness) in expected.iter().enumerate() {
        let mut individual = Individual::new([w as f64; GENE_COUNT]);
        let report = evaluator.evaluate(&mut individual, &dataset);
        assert_eq!(individual.fitness, fitness, "weights of {}", w);
        assert_eq!(report.total(), 1);
    }
}

/// Rising closes where feature 0 carries a heavy negative load. Only a gene 0
/// close to zero lets the other weights clear the bias, and a random initial
/// gene almost never is, so a fresh population starts out calling "down".
/// A mutated gene 0 (at most 10) pulls the sum back above the threshold.
fn suppressed_dataset(rows: usize) -> Dataset {
    let rows = (0..rows)
        .map(|t| {
            let mut row: FeatureRow = [1.0; GENE_COUNT];
            row[0] = -1_000.0;
            row[CLOSE_INDEX] = 1.0 + 0.001 * t as f64;
            row
        })
        .collect();
    Dataset::new(rows)
}

#[test]
fn test_optimize_reaches_optimum_on_monotonic_data() {
    let dataset = suppressed_dataset(8);
    let config = EvolutionConfig {
        population_size: 10,
        generations: 5,
        seed: Some(42),
        selection_strategy: SelectionStrategy::PureElitist,
        ..Default::default()
    };

    let mut engine = EvolutionEngine::new(config);
    let mut stats: Vec<f64> = Vec::new();
    let mut progress = RecordingProgressCallback::default();
    let outcome = engine
        .run(&dataset, Some(&mut stats as &mut dyn StatisticsSink), &mut progress)
        .unwrap();

    assert_eq!(outcome.population.len(), 10);
    assert_eq!(outcome.average_fitness, stats);
    assert_eq!(stats.len(), 6);
    // Initial checkpoint is taken before any evaluation.
    assert_eq!(stats[0], 0.0);
    // The first generation is not optimal yet, so the run has to climb.
    assert!(stats[1] < 7.0, "{:?}", stats);
    assert!(stats.windows(2).all(|w| w[0] <= w[1]), "{:?}", stats);
    assert!(stats[1..].windows(2).any(|w| w[0] < w[1]), "{:?}", stats);
    assert_eq!(*stats.last().unwrap(), 7.0);

    assert_eq!(progress.started, vec![1, 2, 3, 4, 5]);
    assert_eq!(progress.completed.len(), 5);
    assert_eq!(progress.completed.last().unwrap().2, 7);

    for individual in &outcome.population {
        assert_eq!(individual.weights.len(), GENE_COUNT);
        assert!(individual.fitness <= 7);
    }
    assert_eq!(outcome.best().unwrap().fitness, 7);
}

#[test]
fn test_hybrid_selection_finds_optimum() {
    let dataset = suppressed_dataset(8);
    let config = EvolutionConfig {
        population_size: 10,
        generations: 5,
        seed: Some(42),
        ..Default::default()
    };

    let outcome = EvolutionEngine::new(config)
        .run(&dataset, None, &mut SilentProgressCallback)
        .unwrap();

    assert_eq!(outcome.population.len(), 10);
    assert!(outcome.average_fitness[1] < 7.0, "{:?}", outcome.average_fitness);
    assert_eq!(outcome.best().unwrap().fitness, 7);
}

#[test]
fn test_same_seed_same_run() {
    let dataset = CsvConnector::load_dataset(sample_csv(), &DataConfig::default()).unwrap();
    let config = EvolutionConfig {
        population_size: 12,
        generations: 4,
        seed: Some(7),
        ..Default::default()
    };

    let first = EvolutionEngine::new(config.clone())
        .run(&dataset, None, &mut SilentProgressCallback)
        .unwrap();
    let second = EvolutionEngine::new(config)
        .run(&dataset, None, &mut SilentProgressCallback)
        .unwrap();

    assert_eq!(first.population, second.population);
    assert_eq!(first.average_fitness, second.average_fitness);
}

#[test]
fn test_run_on_csv_writes_statistics_file() {
    let dataset = CsvConnector::load_dataset(sample_csv(), &DataConfig::default()).unwrap();
    assert_eq!(dataset.len(), 12);
    assert_eq!(dataset.metadata.feature_columns[CLOSE_INDEX], "Close");

    let config = EvolutionConfig {
        population_size: 20,
        generations: 3,
        seed: Some(11),
        selection_strategy: SelectionStrategy::PureElitist,
        ..Default::default()
    };

    let path = std::env::temp_dir().join(format!("trendga_run_stats_{}.txt", std::process::id()));
    let mut writer = StatisticsWriter::create(&path).unwrap();
    let outcome = EvolutionEngine::new(config)
        .run(&dataset, Some(&mut writer as &mut dyn StatisticsSink), &mut SilentProgressCallback)
        .unwrap();
    writer.finish().unwrap();

    let recorded = read_statistics(&path).unwrap();
    assert_eq!(recorded, outcome.average_fitness);
    assert_eq!(recorded.len(), 4);
    assert!(recorded.iter().all(|&avg| (0.0..=11.0).contains(&avg)));
    assert_eq!(outcome.population.len(), 20);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_odd_population_settles_one_lower() {
    // 5 grows to 5 + 4 = 9 and selection keeps 4; from then on the size is even.
    let dataset = rising_dataset(4);
    let config = EvolutionConfig {
        population_size: 5,
        generations: 3,
        seed: Some(3),
        ..Default::default()
    };

    let outcome = EvolutionEngine::new(config)
        .run(&dataset, None, &mut SilentProgressCallback)
        .unwrap();
    assert_eq!(outcome.population.len(), 4);
}

#[test]
fn test_best_individual_scores_on_held_out_data() {
    let dataset = CsvConnector::load_dataset(sample_csv(), &DataConfig::default()).unwrap();
    let config = EvolutionConfig {
        population_size: 10,
        generations: 2,
        seed: Some(5),
        ..Default::default()
    };

    let mut engine = EvolutionEngine::new(config);
    let outcome = engine.run(&dataset, None, &mut SilentProgressCallback).unwrap();
    let mut best = get_optimal(&outcome.population).unwrap().clone();

    let held_out = rising_dataset(6);
    let report = engine.evaluator().evaluate(&mut best, &held_out);
    assert_eq!(report.total(), 5);
    assert_eq!(best.fitness, report.successes);
}
