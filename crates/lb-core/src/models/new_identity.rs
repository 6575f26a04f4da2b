use crate::{CoreError, ErrorLocation, IdentityField, Result as CoreErrorResult};

use std::panic::Location;

use serde::{Deserialize, Serialize};

/// Identity fields as returned by a successful sign-in, before the store
/// assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIdentity {
    pub username: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl NewIdentity {
    pub fn new(
        username: impl Into<String>,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }

    pub fn field(&self, field: IdentityField) -> &str {
        match field {
            IdentityField::Username => &self.username,
            IdentityField::AccessToken => &self.access_token,
            IdentityField::RefreshToken => &self.refresh_token,
        }
    }

    /// Rejects partially populated identities.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        for field in IdentityField::ALL {
            if self.field(field).trim().is_empty() {
                return Err(CoreError::Validation {
                    message: format!("{} must not be empty", field),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(())
    }
}
