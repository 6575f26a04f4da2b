use crate::RankTier;

use serde::{Deserialize, Serialize};

/// One ranked result from the scoring endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub username: String,
    pub score: f64,
    /// Fraction of shots that hit, 0.0 to 1.0
    pub accuracy: f64,
    pub pops: u64,
    pub rank: u32,
}

impl ScoreEntry {
    pub fn tier(&self) -> RankTier {
        RankTier::for_rank(self.rank)
    }
}
