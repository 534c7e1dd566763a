// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::video::ResultRecord;
use crate::domain::search::engine::{VideoDetailsSource, VideoSearchEngine};
use crate::domain::services::error::{ServiceError, QUERY_REQUIRED};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// 单次搜索的默认候选上限
pub const DEFAULT_MAX_RESULTS: u32 = 25;

/// YouTube search.list accepts at most 50 results per page
const MAX_RESULTS_LIMIT: u32 = 50;

/// 直播视频搜索管道
///
/// 发现 → 批量补充详情 → 过滤直播 → 整形 → 按开播时间倒序。
/// 每次请求恰好发出两次外部调用（无候选时只有一次）。
pub struct SearchPipeline {
    search_engine: Arc<dyn VideoSearchEngine>,
    details_source: Arc<dyn VideoDetailsSource>,
    max_results: u32,
}

impl SearchPipeline {
    pub fn new(
        search_engine: Arc<dyn VideoSearchEngine>,
        details_source: Arc<dyn VideoDetailsSource>,
    ) -> Self {
        Self {
            search_engine,
            details_source,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Overrides the discovery cap, clamped to what the search API accepts
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results.clamp(1, MAX_RESULTS_LIMIT);
        self
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    /// 搜索直播（或曾直播）的视频
    ///
    /// # Errors
    ///
    /// * `ServiceError::Validation` - `query` 为空，不会发出任何外部调用
    /// * `ServiceError::Upstream` - 任一外部调用失败
    pub async fn search(&self, query: &str) -> Result<Vec<ResultRecord>, ServiceError> {
        if query.is_empty() {
            return Err(ServiceError::Validation(QUERY_REQUIRED.to_string()));
        }

        let candidates = self
            .search_engine
            .search_videos(query, self.max_results)
            .await?;
        debug!(query, candidates = candidates.len(), "discovery finished");

        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let video_ids: Vec<String> = candidates.iter().map(|c| c.video_id.clone()).collect();
        let details = self.details_source.live_details(&video_ids).await?;

        let started: HashMap<&str, DateTime<Utc>> = details
            .iter()
            .filter_map(|detail| {
                detail
                    .actual_start_time()
                    .map(|start| (detail.video_id.as_str(), start))
            })
            .collect();

        let mut results: Vec<ResultRecord> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let start = *started.get(candidate.video_id.as_str())?;
                Some(ResultRecord::from_candidate(candidate, start))
            })
            .collect();

        // sort_by is stable, so equal start times keep discovery order
        results.sort_by(|a, b| b.actual_start_time.cmp(&a.actual_start_time));
        debug!(query, live = results.len(), "live filter applied");

        Ok(results)
    }
}
