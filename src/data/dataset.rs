use super::connectors::DatasetMetadata;
use crate::types::{Direction, FeatureRow, CLOSE_INDEX};

/// Chronologically ordered feature rows.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<FeatureRow>,
    pub metadata: DatasetMetadata,
}

impl Dataset {
    pub fn new(rows: Vec<FeatureRow>) -> Self {
        let metadata = DatasetMetadata::in_memory(rows.len());
        Self { rows, metadata }
    }

    pub fn with_metadata(rows: Vec<FeatureRow>, metadata: DatasetMetadata) -> Self {
        Self { rows, metadata }
    }

    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Each row paired with the realised direction of the following close.
    /// The last row has no successor and is skipped.
    pub fn labelled_steps(&self) -> impl Iterator<Item = (&FeatureRow, Direction)> + '_ {
        self.rows.windows(2).map(|pair| {
            let change = pair[1][CLOSE_INDEX] - pair[0][CLOSE_INDEX];
            (&pair[0], Direction::from_price_change(change))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labelled_steps() {
        let mut up = [0.0; 7];
        up[CLOSE_INDEX] = 10.0;
        let mut same = up;
        same[0] = 1.0;
        let mut down = [0.0; 7];
        down[CLOSE_INDEX] = 9.0;

        let dataset = Dataset::new(vec![up, same, down]);
        let labels: Vec<Direction> = dataset.labelled_steps().map(|(_, d)| d).collect();
        // Unchanged close counts as up.
        assert_eq!(labels, vec![Direction::Up, Direction::Down]);
    }

    #[test]
    fn test_short_datasets_have_no_steps() {
        assert_eq!(Dataset::new(vec![]).labelled_steps().count(), 0);
        assert_eq!(Dataset::new(vec![[1.0; 7]]).labelled_steps().count(), 0);
    }
}
