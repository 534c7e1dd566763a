// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::video::{CandidateItem, DetailRecord};
use async_trait::async_trait;
use thiserror::Error;

/// Failure of an outbound call to a third-party API
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UpstreamError {
    #[error("{0} is not configured")]
    MissingCredential(&'static str),
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Upstream returned status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to decode upstream response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait VideoSearchEngine: Send + Sync {
    /// Search for videos matching `query`, returning at most `max_results` hits
    async fn search_videos(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<CandidateItem>, UpstreamError>;
}

#[async_trait]
pub trait VideoDetailsSource: Send + Sync {
    /// Fetch live-broadcast details for all `video_ids` in a single call
    async fn live_details(&self, video_ids: &[String]) -> Result<Vec<DetailRecord>, UpstreamError>;
}
