use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// One of the three indexed fields of an identity record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityField {
    Username,
    AccessToken,
    RefreshToken,
}

impl IdentityField {
    pub const ALL: [IdentityField; 3] = [Self::Username, Self::AccessToken, Self::RefreshToken];

    /// Field name as exposed to callers and used for session marker keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::AccessToken => "accessToken",
            Self::RefreshToken => "refreshToken",
        }
    }

    /// Backing column in the credential table
    pub fn column(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::AccessToken => "access_token",
            Self::RefreshToken => "refresh_token",
        }
    }
}

impl FromStr for IdentityField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "username" => Ok(Self::Username),
            "accessToken" => Ok(Self::AccessToken),
            "refreshToken" => Ok(Self::RefreshToken),
            _ => Err(CoreError::InvalidIdentityField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for IdentityField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
