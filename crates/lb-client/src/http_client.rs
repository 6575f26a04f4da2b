use crate::{ClientError, ClientResult};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, header::LOCATION, redirect::Policy};
use serde::de::DeserializeOwned;
use serde_json::Value;

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Shared request plumbing. Redirects are never followed; a 3xx answer is
/// reported as `ClientError::Redirect`.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    base_url: String,
    client: ReqwestClient,
}

impl HttpClient {
    pub(crate) fn new(base_url: &str) -> ClientResult<Self> {
        let client = ReqwestClient::builder().redirect(Policy::none()).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        self.client.request(method, &url)
    }

    /// Execute request, map non-success answers and decode the JSON body
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();

        if status.is_redirection() {
            let target = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("<none>")
                .to_string();
            return Err(ClientError::Redirect {
                status: status.as_u16(),
                target,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(&body),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Pull a readable message out of an error body.
///
/// Accepts `{"error": {"message": ..}}`, `{"message": ..}`, or falls back
/// to the raw (truncated) body.
fn error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        let message = json
            .get("error")
            .and_then(|e| e.get("message"))
            .or_else(|| json.get("message"))
            .or_else(|| json.get("detail"))
            .and_then(|v| v.as_str());

        if let Some(message) = message {
            return message.to_string();
        }
    }

    if body.trim().is_empty() {
        return String::from("empty response body");
    }

    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
