//! Integration tests for the remote clients using wiremock mock servers

use lb_client::{ClientError, IdentityClient, ScoreClient};
use lb_core::DeviceCategory;

use googletest::prelude::*;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

fn score_json(username: &str, rank: u32) -> serde_json::Value {
    json!({
        "username": username,
        "score": 1500.25 - rank as f64,
        "accuracy": 0.9,
        "pops": 300 - rank,
        "rank": rank
    })
}

// =========================================================================
// Scoring endpoint
// =========================================================================

#[tokio::test]
async fn test_top_scores_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/highscores/mnk"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            score_json("alice", 1),
            score_json("bob", 2),
            score_json("carol", 3)
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ScoreClient::new(&mock_server.uri()).unwrap();
    let scores = client.top_scores(DeviceCategory::Mnk, 20).await.unwrap();

    assert_that!(scores.len(), eq(3));
    assert_that!(scores[0].username.as_str(), eq("alice"));
    assert_that!(scores[2].rank, eq(3));
}

#[tokio::test]
async fn test_top_scores_empty_table() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/highscores/mobile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = ScoreClient::new(&mock_server.uri()).unwrap();
    let scores = client.top_scores(DeviceCategory::Mobile, 20).await.unwrap();

    assert_that!(scores, is_empty());
}

#[tokio::test]
async fn test_user_score_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/highscores/user/alice"))
        .and(query_param("device_category", "mobile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(score_json("alice", 4)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ScoreClient::new(&mock_server.uri()).unwrap();
    let entry = client
        .user_score("alice", DeviceCategory::Mobile)
        .await
        .unwrap();

    assert_that!(entry.username.as_str(), eq("alice"));
    assert_that!(entry.rank, eq(4));
    assert_that!(entry.pops, eq(296));
}

#[tokio::test]
async fn test_user_score_encodes_username_path_segment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/highscores/user/bubble%20king"))
        .respond_with(ResponseTemplate::new(200).set_body_json(score_json("bubble king", 1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ScoreClient::new(&mock_server.uri()).unwrap();
    let entry = client
        .user_score("bubble king", DeviceCategory::Mnk)
        .await
        .unwrap();

    assert_that!(entry.username.as_str(), eq("bubble king"));
}

#[tokio::test]
async fn test_user_score_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/highscores/user/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "detail": "User not found"
        })))
        .mount(&mock_server)
        .await;

    let client = ScoreClient::new(&mock_server.uri()).unwrap();
    let result = client.user_score("ghost", DeviceCategory::Mobile).await;

    let err = result.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("User not found"));
}

#[tokio::test]
async fn test_top_scores_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/highscores/mobile"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = ScoreClient::new(&mock_server.uri()).unwrap();
    let result = client.top_scores(DeviceCategory::Mobile, 20).await;

    assert!(matches!(result, Err(ClientError::Json { .. })));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_ignored() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/highscores/mobile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ScoreClient::new(&format!("{}/", mock_server.uri())).unwrap();

    assert_that!(client.base_url(), eq(mock_server.uri().as_str()));
    client
        .top_scores(DeviceCategory::Mobile, 20)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unreachable_endpoint_is_http_error() {
    // Nothing listens on port 9 (discard) on a test machine
    let client = ScoreClient::new("http://127.0.0.1:9").unwrap();

    let result = client.top_scores(DeviceCategory::Mobile, 20).await;

    assert!(matches!(result, Err(ClientError::Http { .. })));
}

// =========================================================================
// Identity endpoint
// =========================================================================

#[tokio::test]
async fn test_logout_sends_bearer_token_and_returns_redirect() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/logout"))
        .and(header("Authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "redirect": "https://bubblegame.example.com/"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = IdentityClient::new(&mock_server.uri()).unwrap();
    let response = client.logout("t1").await.unwrap();

    assert_that!(
        response.redirect.as_str(),
        eq("https://bubblegame.example.com/")
    );
}

#[tokio::test]
async fn test_logout_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "code": "UNAUTHORIZED", "message": "Token expired" }
        })))
        .mount(&mock_server)
        .await;

    let client = IdentityClient::new(&mock_server.uri()).unwrap();
    let result = client.logout("stale").await;

    assert!(matches!(result, Err(ClientError::Api { status: 401, .. })));
}

#[tokio::test]
async fn test_logout_redirect_is_not_followed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/logout"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", "https://login.example.com/"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = IdentityClient::new(&mock_server.uri()).unwrap();
    let result = client.logout("t1").await;

    let err = result.unwrap_err();
    assert!(matches!(err, ClientError::Redirect { status: 302, .. }));
    assert!(err.to_string().contains("https://login.example.com/"));
}
