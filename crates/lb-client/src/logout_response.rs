use serde::{Deserialize, Serialize};

/// Body of a successful logout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResponse {
    /// Where the page should navigate once signed out
    pub redirect: String,
}
