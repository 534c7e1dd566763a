// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use livescope::domain::models::location::SheetRow;
use livescope::domain::models::video::{
    CandidateItem, DetailRecord, LiveStreamingDetails, Snippet, Thumbnail, Thumbnails,
};
use livescope::domain::search::engine::{UpstreamError, VideoDetailsSource, VideoSearchEngine};
use livescope::domain::services::search_pipeline::SearchPipeline;
use livescope::domain::services::sheet_filter::SheetFilter;
use livescope::domain::sheets::source::SheetSource;
use livescope::presentation::routes::{routes, Deployment};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory stand-in for the YouTube search and details endpoints
pub struct MockYouTube {
    candidates: Result<Vec<CandidateItem>, UpstreamError>,
    details: Result<Vec<DetailRecord>, UpstreamError>,
    calls: AtomicUsize,
}

impl MockYouTube {
    pub fn new(candidates: Vec<CandidateItem>, details: Vec<DetailRecord>) -> Arc<Self> {
        Arc::new(Self {
            candidates: Ok(candidates),
            details: Ok(details),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(err: UpstreamError) -> Arc<Self> {
        Arc::new(Self {
            candidates: Err(err.clone()),
            details: Err(err),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VideoSearchEngine for MockYouTube {
    async fn search_videos(
        &self,
        _query: &str,
        _max_results: u32,
    ) -> Result<Vec<CandidateItem>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.candidates.clone()
    }
}

#[async_trait]
impl VideoDetailsSource for MockYouTube {
    async fn live_details(&self, _video_ids: &[String]) -> Result<Vec<DetailRecord>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.details.clone()
    }
}

pub struct MockSheet {
    rows: Result<Vec<SheetRow>, UpstreamError>,
}

impl MockSheet {
    pub fn new(rows: &[&[&str]]) -> Arc<Self> {
        Arc::new(Self {
            rows: Ok(rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect()),
        })
    }

    pub fn failing(err: UpstreamError) -> Arc<Self> {
        Arc::new(Self { rows: Err(err) })
    }
}

#[async_trait]
impl SheetSource for MockSheet {
    async fn fetch_rows(&self) -> Result<Vec<SheetRow>, UpstreamError> {
        self.rows.clone()
    }
}

pub fn video_server(youtube: Arc<MockYouTube>) -> TestServer {
    let pipeline = SearchPipeline::new(youtube.clone(), youtube);
    TestServer::new(routes(Deployment::Video(Arc::new(pipeline)))).unwrap()
}

pub fn sheet_server(sheet: Arc<MockSheet>) -> TestServer {
    TestServer::new(routes(Deployment::Sheet(Arc::new(SheetFilter::new(sheet))))).unwrap()
}

pub fn candidate(id: &str, title: &str) -> CandidateItem {
    CandidateItem {
        video_id: id.to_string(),
        snippet: Snippet {
            title: Some(title.to_string()),
            channel_title: Some("Channel".to_string()),
            thumbnails: Thumbnails {
                high: Some(Thumbnail {
                    url: format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", id),
                }),
                ..Default::default()
            },
        },
    }
}

pub fn live(id: &str, start: &str) -> DetailRecord {
    DetailRecord {
        video_id: id.to_string(),
        live_streaming_details: Some(LiveStreamingDetails {
            actual_start_time: Some(
                DateTime::parse_from_rfc3339(start)
                    .unwrap()
                    .with_timezone(&Utc),
            ),
        }),
    }
}

pub fn vod(id: &str) -> DetailRecord {
    DetailRecord {
        video_id: id.to_string(),
        live_streaming_details: None,
    }
}
