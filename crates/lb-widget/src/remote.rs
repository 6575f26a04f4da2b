//! Seams over the remote services, so the widget can be driven by the real
//! HTTP clients or by anything else that answers the same calls.

use lb_client::{ClientResult, IdentityClient, LogoutResponse, ScoreClient};
use lb_core::{DeviceCategory, ScoreEntry};

use async_trait::async_trait;

#[async_trait]
pub trait ScoreSource: Send + Sync {
    async fn top_scores(
        &self,
        category: DeviceCategory,
        limit: u32,
    ) -> ClientResult<Vec<ScoreEntry>>;

    async fn user_score(
        &self,
        username: &str,
        category: DeviceCategory,
    ) -> ClientResult<ScoreEntry>;
}

#[async_trait]
pub trait SessionEndpoint: Send + Sync {
    /// Invalidate the server-side session for `access_token`
    async fn logout(&self, access_token: &str) -> ClientResult<LogoutResponse>;
}

#[async_trait]
impl ScoreSource for ScoreClient {
    async fn top_scores(
        &self,
        category: DeviceCategory,
        limit: u32,
    ) -> ClientResult<Vec<ScoreEntry>> {
        ScoreClient::top_scores(self, category, limit).await
    }

    async fn user_score(
        &self,
        username: &str,
        category: DeviceCategory,
    ) -> ClientResult<ScoreEntry> {
        ScoreClient::user_score(self, username, category).await
    }
}

#[async_trait]
impl SessionEndpoint for IdentityClient {
    async fn logout(&self, access_token: &str) -> ClientResult<LogoutResponse> {
        IdentityClient::logout(self, access_token).await
    }
}
