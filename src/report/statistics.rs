use crate::error::{Result, TrendGaError};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Destination for per-generation average fitness values.
pub trait StatisticsSink {
    fn record(&mut self, average_fitness: f64) -> Result<()>;
}

impl StatisticsSink for Vec<f64> {
    fn record(&mut self, average_fitness: f64) -> Result<()> {
        self.push(average_fitness);
        Ok(())
    }
}

/// Append-only, one value per line.
///
/// Buffered output is flushed by `finish`; dropping the writer early (for
/// example when a run fails) still flushes and closes the underlying file.
pub struct StatisticsWriter<W: Write> {
    writer: BufWriter<W>,
    written: usize,
}

impl StatisticsWriter<File> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref()).map_err(|e| {
            TrendGaError::Statistics(format!(
                "Failed to open {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(Self::new(file))
    }
}

impl<W: Write> StatisticsWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::new(inner),
            written: 0,
        }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn finish(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| TrendGaError::Io(e.into_error()))
    }
}

impl<W: Write> StatisticsSink for StatisticsWriter<W> {
    fn record(&mut self, average_fitness: f64) -> Result<()> {
        writeln!(self.writer, "{}", average_fitness)?;
        self.written += 1;
        Ok(())
    }
}

/// Read back a stream written by `StatisticsWriter`, skipping blank lines.
pub fn read_statistics<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let mut values = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed.parse::<f64>().map_err(|e| {
            TrendGaError::Statistics(format!("Line {}: '{}' is not a number: {}", line_no + 1, trimmed, e))
        })?;
        values.push(value);
    }

    Ok(values)
}
