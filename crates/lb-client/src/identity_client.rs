use crate::http_client::HttpClient;
use crate::{ClientResult, LogoutResponse};

use reqwest::Method;

/// Client for the remote identity endpoint
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: HttpClient,
}

impl IdentityClient {
    /// # Arguments
    /// * `base_url` - Identity service URL (e.g., "https://auth.example.com")
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Invalidate the session behind `access_token` on the server.
    ///
    /// A redirect answer is a rejection, never followed.
    pub async fn logout(&self, access_token: &str) -> ClientResult<LogoutResponse> {
        let req = self
            .http
            .request(Method::DELETE, "/logout")
            .bearer_auth(access_token);
        self.http.execute(req).await
    }
}
