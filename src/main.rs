use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use trendga::config::{AppConfig, ConfigManager};
use trendga::data::CsvConnector;
use trendga::engines::generation::{EvolutionEngine, LoggingProgressCallback};
use trendga::report::{render_fitness_chart, StatisticsSink, StatisticsWriter};

#[derive(Parser)]
#[command(name = "trendga")]
#[command(about = "Evolve sigmoid weights that call the next day's price direction", long_about = None)]
struct Cli {
    /// Training dataset (CSV)
    #[arg(long)]
    train: PathBuf,
    /// Testing dataset (CSV)
    #[arg(long)]
    test: PathBuf,
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Initial population size
    #[arg(long)]
    population: Option<usize>,
    /// Number of generations
    #[arg(long)]
    generations: Option<usize>,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Where to write average fitness per generation
    #[arg(long)]
    stats: Option<PathBuf>,
    /// Skip writing the statistics file
    #[arg(long)]
    no_stats: bool,
    /// Render the average fitness history to this PNG
    #[arg(long)]
    chart: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    if config.output.chart_path.is_some() && !config.output.record_statistics {
        log::warn!("Chart requested without statistics; drawing it from the in-memory history");
    }

    let training = CsvConnector::load_dataset(&cli.train, &config.data)
        .with_context(|| format!("loading training data from {}", cli.train.display()))?;
    let testing = CsvConnector::load_dataset(&cli.test, &config.data)
        .with_context(|| format!("loading testing data from {}", cli.test.display()))?;

    let mut writer = if config.output.record_statistics {
        Some(StatisticsWriter::create(&config.output.statistics_path)?)
    } else {
        None
    };

    let mut engine = EvolutionEngine::new(config.evolution.clone());
    let mut progress = LoggingProgressCallback::new(config.evolution.generations);
    let outcome = engine.run(
        &training,
        writer.as_mut().map(|w| w as &mut dyn StatisticsSink),
        &mut progress,
    )?;

    if let Some(writer) = writer {
        let lines = writer.written();
        writer.finish()?;
        log::info!(
            "Wrote {} statistics lines to {}",
            lines,
            config.output.statistics_path.display()
        );
    }

    let mut optimal = outcome
        .best()
        .cloned()
        .context("evolution finished with an empty population")?;
    println!("Training set: {}", optimal);

    engine.evaluator().evaluate(&mut optimal, &testing);
    println!("Testing set: {}", optimal);

    if let Some(path) = &config.output.chart_path {
        render_fitness_chart(&outcome.average_fitness, path)?;
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<AppConfig> {
    let mut manager = ConfigManager::new();
    if let Some(path) = &cli.config {
        manager
            .load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?;
    }

    manager.update(|c| {
        if let Some(population) = cli.population {
            c.evolution.population_size = population;
        }
        if let Some(generations) = cli.generations {
            c.evolution.generations = generations;
        }
        if cli.seed.is_some() {
            c.evolution.seed = cli.seed;
        }
        if let Some(stats) = &cli.stats {
            c.output.statistics_path = stats.clone();
        }
        if cli.no_stats {
            c.output.record_statistics = false;
        }
        if let Some(chart) = &cli.chart {
            c.output.chart_path = Some(chart.clone());
        }
    })?;

    Ok(manager.get())
}
