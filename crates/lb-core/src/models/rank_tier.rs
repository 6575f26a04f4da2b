use serde::Serialize;

/// Visual tier of a leaderboard rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankTier {
    Gold,
    Cyan,
    Bronze,
    Standard,
}

impl RankTier {
    pub fn for_rank(rank: u32) -> Self {
        match rank {
            1 => Self::Gold,
            2 => Self::Cyan,
            3 => Self::Bronze,
            _ => Self::Standard,
        }
    }

    /// Badge background colour
    pub fn color(&self) -> &'static str {
        match self {
            Self::Gold => "hsla(46,98%,52%,0.75)",
            Self::Cyan => "hsla(190,78%,50%,0.75)",
            Self::Bronze => "hsla(27,100%,45%,0.75)",
            Self::Standard => "hsla(194,16%,73%,0.75)",
        }
    }
}
