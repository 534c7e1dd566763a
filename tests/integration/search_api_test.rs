// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{candidate, live, video_server, vod, MockYouTube};
use axum::http::StatusCode;
use livescope::domain::search::engine::UpstreamError;
use serde_json::{json, Value};

#[tokio::test]
async fn test_search_returns_live_videos_newest_first() {
    let youtube = MockYouTube::new(
        vec![
            candidate("early", "Morning stream"),
            candidate("clip", "Highlights"),
            candidate("late", "Evening stream"),
        ],
        vec![
            live("early", "2024-05-01T08:00:00Z"),
            vod("clip"),
            live("late", "2024-05-01T20:00:00Z"),
        ],
    );
    let server = video_server(youtube.clone());

    let response = server.get("/search").add_query_param("query", "stream").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!([
            {
                "videoId": "late",
                "title": "Evening stream",
                "channelTitle": "Channel",
                "thumbnail": "https://i.ytimg.com/vi/late/hqdefault.jpg",
                "actualStartTime": "2024-05-01T20:00:00Z"
            },
            {
                "videoId": "early",
                "title": "Morning stream",
                "channelTitle": "Channel",
                "thumbnail": "https://i.ytimg.com/vi/early/hqdefault.jpg",
                "actualStartTime": "2024-05-01T08:00:00Z"
            }
        ])
    );
    assert_eq!(youtube.calls(), 2);
}

#[tokio::test]
async fn test_missing_query_is_bad_request() {
    let youtube = MockYouTube::new(vec![candidate("a", "A")], vec![]);
    let server = video_server(youtube.clone());

    let response = server.get("/search").expect_failure().await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Query parameter is required" })
    );
    assert_eq!(youtube.calls(), 0);
}

#[tokio::test]
async fn test_empty_query_is_bad_request() {
    let youtube = MockYouTube::new(vec![], vec![]);
    let server = video_server(youtube.clone());

    let response = server
        .get("/search")
        .add_query_param("query", "")
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(youtube.calls(), 0);
}

#[tokio::test]
async fn test_no_candidates_is_empty_array() {
    let youtube = MockYouTube::new(vec![], vec![]);
    let server = video_server(youtube.clone());

    let response = server.get("/search").add_query_param("query", "zzz").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
    assert_eq!(youtube.calls(), 1);
}

#[tokio::test]
async fn test_upstream_failure_is_server_error() {
    let youtube = MockYouTube::failing(UpstreamError::Status {
        status: 403,
        message: "API key not valid. Please pass a valid API key.".to_string(),
    });
    let server = video_server(youtube);

    let response = server
        .get("/search")
        .add_query_param("query", "anything")
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Upstream returned status 403: API key not valid. Please pass a valid API key." })
    );
}

#[tokio::test]
async fn test_missing_credential_is_server_error() {
    let youtube = MockYouTube::failing(UpstreamError::MissingCredential("YOUTUBE_API_KEY"));
    let server = video_server(youtube);

    let response = server
        .get("/search")
        .add_query_param("query", "anything")
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "YOUTUBE_API_KEY is not configured" })
    );
}

#[tokio::test]
async fn test_video_variant_has_no_titles_route() {
    let server = video_server(MockYouTube::new(vec![], vec![]));

    let response = server.get("/titles").expect_failure().await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_and_version() {
    let server = video_server(MockYouTube::new(vec![], vec![]));

    let health = server.get("/health").await;
    assert_eq!(health.text(), "OK");

    let version = server.get("/v1/version").await;
    assert_eq!(version.text(), env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_repeated_query_param_is_json_bad_request() {
    let youtube = MockYouTube::new(vec![candidate("a", "A")], vec![]);
    let server = video_server(youtube.clone());

    let response = server
        .get("/search?query=a&query=b")
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("duplicate field"), "unexpected message: {}", message);
    assert_eq!(youtube.calls(), 0);
}
