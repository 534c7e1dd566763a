// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "No Title";
pub const DEFAULT_CHANNEL: &str = "No Channel";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Thumbnail {
    pub url: String,
}

/// Thumbnail variants keyed by resolution
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

impl Thumbnails {
    /// 优先使用高清缩略图，缺失时退回中等分辨率
    pub fn resolve(&self) -> Option<&str> {
        self.high
            .as_ref()
            .or(self.medium.as_ref())
            .map(|thumbnail| thumbnail.url.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: Option<String>,
    pub channel_title: Option<String>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

/// A search hit before enrichment
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateItem {
    pub video_id: String,
    pub snippet: Snippet,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveStreamingDetails {
    pub actual_start_time: Option<DateTime<Utc>>,
}

/// Per-video enrichment returned by the batched details lookup
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRecord {
    pub video_id: String,
    pub live_streaming_details: Option<LiveStreamingDetails>,
}

impl DetailRecord {
    /// The broadcast start, if the video is or was live
    pub fn actual_start_time(&self) -> Option<DateTime<Utc>> {
        self.live_streaming_details
            .as_ref()
            .and_then(|details| details.actual_start_time)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
    pub thumbnail: Option<String>,
    pub actual_start_time: DateTime<Utc>,
}

impl ResultRecord {
    pub fn from_candidate(candidate: CandidateItem, actual_start_time: DateTime<Utc>) -> Self {
        let thumbnail = candidate.snippet.thumbnails.resolve().map(str::to_string);
        let Snippet {
            title,
            channel_title,
            ..
        } = candidate.snippet;

        Self {
            video_id: candidate.video_id,
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            channel_title: channel_title.unwrap_or_else(|| DEFAULT_CHANNEL.to_string()),
            thumbnail,
            actual_start_time,
        }
    }
}
