// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::YouTubeSettings;
use crate::domain::models::video::{CandidateItem, DetailRecord, LiveStreamingDetails, Snippet};
use crate::domain::search::engine::{UpstreamError, VideoDetailsSource, VideoSearchEngine};
use crate::infrastructure::google_api;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

const API_KEY_NAME: &str = "YOUTUBE_API_KEY";

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    #[serde(default)]
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    id: String,
    live_streaming_details: Option<WireLiveStreamingDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLiveStreamingDetails {
    actual_start_time: Option<String>,
}

/// YouTube Data API v3 客户端
///
/// 同时实现搜索 (`search.list`) 与详情 (`videos.list`) 两个协作者接口
pub struct YouTubeClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl YouTubeClient {
    pub fn new(settings: &YouTubeSettings) -> Result<Self, UpstreamError> {
        Ok(Self {
            client: google_api::build_client()?,
            base_url: google_api::parse_base_url(&settings.base_url)?,
            api_key: settings.api_key.clone(),
        })
    }

    pub fn has_api_key(&self) -> bool {
        google_api::require(self.api_key.as_deref(), API_KEY_NAME).is_ok()
    }
}

#[async_trait]
impl VideoSearchEngine for YouTubeClient {
    async fn search_videos(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<CandidateItem>, UpstreamError> {
        let key = google_api::require(self.api_key.as_deref(), API_KEY_NAME)?;
        let url = google_api::endpoint(&self.base_url, &["search"])?;
        debug!(url = %url, query, max_results, "YouTube search.list");

        let max_results = max_results.to_string();
        let request = self.client.get(url).query(&[
            ("part", "snippet"),
            ("type", "video"),
            ("maxResults", max_results.as_str()),
            ("q", query),
            ("key", key),
        ]);

        let response: SearchListResponse =
            google_api::read_json(google_api::send(request).await?).await?;

        Ok(response
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id.video_id?;
                Some(CandidateItem {
                    video_id,
                    snippet: item.snippet,
                })
            })
            .collect())
    }
}

#[async_trait]
impl VideoDetailsSource for YouTubeClient {
    async fn live_details(&self, video_ids: &[String]) -> Result<Vec<DetailRecord>, UpstreamError> {
        let key = google_api::require(self.api_key.as_deref(), API_KEY_NAME)?;
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = google_api::endpoint(&self.base_url, &["videos"])?;
        debug!(url = %url, ids = video_ids.len(), "YouTube videos.list");

        let ids = video_ids.join(",");
        let request = self.client.get(url).query(&[
            ("part", "liveStreamingDetails"),
            ("id", ids.as_str()),
            ("key", key),
        ]);

        let response: VideoListResponse =
            google_api::read_json(google_api::send(request).await?).await?;

        Ok(response
            .items
            .into_iter()
            .map(|item| {
                let live_streaming_details = item.live_streaming_details.map(|details| {
                    LiveStreamingDetails {
                        actual_start_time: details
                            .actual_start_time
                            .as_deref()
                            .and_then(|raw| parse_timestamp(&item.id, raw)),
                    }
                });
                DetailRecord {
                    video_id: item.id,
                    live_streaming_details,
                }
            })
            .collect())
    }
}

fn parse_timestamp(video_id: &str, raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => Some(timestamp.with_timezone(&Utc)),
        Err(e) => {
            warn!(video_id, raw, error = %e, "Ignoring unparseable actualStartTime");
            None
        }
    }
}
