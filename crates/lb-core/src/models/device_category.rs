use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Input device family a leaderboard is ranked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeviceCategory {
    /// Touch screen players
    #[default]
    Mobile,
    /// Mouse and keyboard players
    Mnk,
}

impl DeviceCategory {
    /// Wire representation used in scoring endpoint paths and queries
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Mnk => "mnk",
        }
    }

    /// The other category, as flipped by the mode toggle
    pub fn toggled(self) -> Self {
        match self {
            Self::Mobile => Self::Mnk,
            Self::Mnk => Self::Mobile,
        }
    }
}

impl FromStr for DeviceCategory {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "mobile" => Ok(Self::Mobile),
            "mnk" => Ok(Self::Mnk),
            _ => Err(CoreError::InvalidDeviceCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
