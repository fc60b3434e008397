pub mod chart;
pub mod statistics;

pub use chart::render_fitness_chart;
pub use statistics::{read_statistics, StatisticsSink, StatisticsWriter};
