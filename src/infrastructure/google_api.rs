// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Shared plumbing for Google REST APIs (YouTube Data v3, Sheets v4)

use crate::domain::search::engine::UpstreamError;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

/// Google wraps failures as `{"error": {"code": 403, "message": "..."}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

pub(crate) fn build_client() -> Result<Client, UpstreamError> {
    Client::builder()
        .user_agent(concat!("livescope/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| UpstreamError::Network(format!("Failed to create HTTP client: {}", e)))
}

pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, UpstreamError> {
    let url = Url::parse(base_url)
        .map_err(|e| UpstreamError::InvalidEndpoint(format!("{}: {}", base_url, e)))?;
    if url.cannot_be_a_base() {
        return Err(UpstreamError::InvalidEndpoint(base_url.to_string()));
    }
    Ok(url)
}

/// Appends path segments to `base`, percent-encoding each one
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, UpstreamError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| UpstreamError::InvalidEndpoint(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub(crate) fn require<'a>(
    value: Option<&'a str>,
    name: &'static str,
) -> Result<&'a str, UpstreamError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(UpstreamError::MissingCredential(name))
}

pub(crate) async fn send(request: reqwest::RequestBuilder) -> Result<Response, UpstreamError> {
    request
        .send()
        .await
        .map_err(|e| UpstreamError::Network(format!("HTTP request failed: {}", e)))
}

/// Decodes a successful response, or turns a non-2xx into `UpstreamError::Status`
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, UpstreamError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|envelope| envelope.error.message)
            .unwrap_or(body);
        return Err(UpstreamError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| UpstreamError::Network(format!("Failed to read response body: {}", e)))?;
    serde_json::from_str(&body).map_err(|e| UpstreamError::Decode(e.to_string()))
}
