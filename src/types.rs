/// Width of the feature vector and of every weight vector.
pub const GENE_COUNT: usize = 7;

/// Feature index holding the closing price.
pub const CLOSE_INDEX: usize = 3;

/// One time step of market features, chronological position implied by its
/// index in the dataset.
pub type FeatureRow = [f64; GENE_COUNT];

/// Predicted or realised direction of the next close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// `Up` when the close did not fall between the two steps.
    pub fn from_price_change(change: f64) -> Self {
        if change >= 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}
