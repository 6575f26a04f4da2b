//! Identity record - the signed-in player as held by the credential store.

use crate::IdentityField;

use serde::{Deserialize, Serialize};

/// A stored identity. `id` is assigned by the store and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    pub id: i64,
    pub username: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl IdentityRecord {
    pub fn field(&self, field: IdentityField) -> &str {
        match field {
            IdentityField::Username => &self.username,
            IdentityField::AccessToken => &self.access_token,
            IdentityField::RefreshToken => &self.refresh_token,
        }
    }
}
