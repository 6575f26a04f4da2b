//! Signing a player in and out.
//!
//! Logout is fail-safe: local credentials are only discarded after the
//! identity endpoint has confirmed the session is gone.

use crate::{Navigator, Notifier, Result as WidgetErrorResult, SessionEndpoint, SessionMarkers};

use lb_core::{IdentityField, NewIdentity};
use lb_db::CredentialRepository;

use std::sync::Arc;

use log::{error, info, warn};

/// Shown to the player when the identity endpoint refuses a logout
pub const LOGOUT_REJECTED_MESSAGE: &str = "Logout attempt rejected by server";

/// Which path a logout took
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// No access token was stored, nothing was sent
    AlreadyLoggedOut,
    /// The server ended the session and local state was discarded
    LoggedOut { redirect: String },
    /// The server call failed; local state is unchanged
    Rejected { reason: String },
}

pub struct SessionFacade {
    repository: Arc<CredentialRepository>,
    endpoint: Arc<dyn SessionEndpoint>,
    markers: Arc<dyn SessionMarkers>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl SessionFacade {
    pub fn new(
        repository: Arc<CredentialRepository>,
        endpoint: Arc<dyn SessionEndpoint>,
        markers: Arc<dyn SessionMarkers>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repository,
            endpoint,
            markers,
            navigator,
            notifier,
        }
    }

    /// Record a freshly signed-in identity and mirror it into the markers.
    pub async fn sign_in(&self, identity: &NewIdentity) -> WidgetErrorResult<i64> {
        let id = self.repository.store(identity).await?;

        for field in IdentityField::ALL {
            self.markers.set(field.as_str(), identity.field(field));
        }

        info!("Signed in as {}", identity.username);
        Ok(id)
    }

    pub async fn logout(&self) -> WidgetErrorResult<LogoutOutcome> {
        let access_token = match self.repository.access_token().await {
            Ok(Some(token)) => token,
            Ok(None) => {
                info!("Logout requested with no stored session");
                return Ok(LogoutOutcome::AlreadyLoggedOut);
            }
            Err(e) => {
                error!("Unable to read access token for logout: {}", e);
                return Err(e.into());
            }
        };

        let response = match self.endpoint.logout(&access_token).await {
            Ok(response) => response,
            Err(e) => {
                error!("Logout rejected: {}", e);
                self.notifier.notify(LOGOUT_REJECTED_MESSAGE);
                return Ok(LogoutOutcome::Rejected {
                    reason: e.to_string(),
                });
            }
        };

        self.navigator.navigate(&response.redirect);
        self.markers.purge_identity();

        match self.repository.clear().await {
            Ok(_) => {
                info!("Logged out, redirecting to {}", response.redirect);
                Ok(LogoutOutcome::LoggedOut {
                    redirect: response.redirect,
                })
            }
            Err(e) => {
                warn!("Server session ended but local credentials remain");
                Err(e.into())
            }
        }
    }
}
