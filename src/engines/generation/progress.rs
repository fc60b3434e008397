use super::evolution_engine::ProgressCallback;

/// Logs one line per finished generation.
pub struct LoggingProgressCallback {
    total_generations: usize,
}

impl LoggingProgressCallback {
    pub fn new(total_generations: usize) -> Self {
        Self { total_generations }
    }
}

impl ProgressCallback for LoggingProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::debug!("Generation {}/{} starting", generation, self.total_generations);
    }

    fn on_generation_complete(&mut self, generation: usize, average_fitness: f64, best_fitness: u32) {
        log::info!(
            "Finished generation {}/{}. Average fitness: {:.4}, best: {}",
            generation,
            self.total_generations,
            average_fitness,
            best_fitness
        );
    }
}

pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_generation_complete(&mut self, _generation: usize, _average_fitness: f64, _best_fitness: u32) {}
}
