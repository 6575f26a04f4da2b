use crate::ClientResult;
use crate::http_client::HttpClient;

use lb_core::{DeviceCategory, ScoreEntry};

use reqwest::Method;

/// Client for the remote scoring endpoint
#[derive(Debug, Clone)]
pub struct ScoreClient {
    http: HttpClient,
}

impl ScoreClient {
    /// # Arguments
    /// * `base_url` - Scoring service URL (e.g., "https://scores.example.com")
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Best `limit` scores for a device category, in rank order
    pub async fn top_scores(
        &self,
        category: DeviceCategory,
        limit: u32,
    ) -> ClientResult<Vec<ScoreEntry>> {
        let path = format!("/highscores/{}?limit={}", category, limit);
        let req = self.http.request(Method::GET, &path);
        self.http.execute(req).await
    }

    /// A single player's best score for a device category
    pub async fn user_score(
        &self,
        username: &str,
        category: DeviceCategory,
    ) -> ClientResult<ScoreEntry> {
        let path = format!(
            "/highscores/user/{}?device_category={}",
            urlencoding::encode(username),
            category
        );
        let req = self.http.request(Method::GET, &path);
        self.http.execute(req).await
    }
}
