use crate::error::{Result, TrendGaError};
use plotters::prelude::*;
use std::path::Path;

const DIMENSIONS: (u32, u32) = (1024, 768);

/// Line chart of average fitness, generation index on the x axis.
pub fn render_fitness_chart<P: AsRef<Path>>(history: &[f64], path: P) -> Result<()> {
    if history.is_empty() {
        return Err(TrendGaError::Chart("no statistics to plot".to_string()));
    }

    let root = BitMapBackend::new(path.as_ref(), DIMENSIONS).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let x_max = (history.len() - 1).max(1) as f64;
    let (mut y_min, mut y_max) = history
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if y_max - y_min < f64::EPSILON {
        y_min -= 1.0;
        y_max += 1.0;
    }
    let pad = (y_max - y_min) * 0.05;

    let mut chart = ChartBuilder::on(&root)
        .caption("Average fitness per generation", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, (y_min - pad)..(y_max + pad))
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .x_desc("Generation")
        .y_desc("Average fitness")
        .draw()
        .map_err(chart_error)?;

    chart
        .draw_series(LineSeries::new(
            history.iter().enumerate().map(|(generation, &avg)| (generation as f64, avg)),
            &BLUE,
        ))
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    log::info!("Wrote fitness chart to {}", path.as_ref().display());
    Ok(())
}

fn chart_error<E: std::fmt::Display>(e: E) -> TrendGaError {
    TrendGaError::Chart(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_png() {
        let path = std::env::temp_dir().join(format!("trendga_chart_{}.png", std::process::id()));
        render_fitness_chart(&[0.0, 40.0, 55.0, 61.5, 61.5], &path).unwrap();

        let size = std::fs::metadata(&path).unwrap().len();
        assert!(size > 0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_renders_flat_history_with_labelled_mesh() {
        let path = std::env::temp_dir().join(format!("trendga_chart_flat_{}.png", std::process::id()));
        render_fitness_chart(&[7.0], &path).unwrap();

        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_empty_history_is_rejected() {
        let path = std::env::temp_dir().join("trendga_chart_empty.png");
        assert!(render_fitness_chart(&[], &path).is_err());
    }
}
