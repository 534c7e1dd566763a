// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::location::{records_from_rows, LocationRecord};
use crate::domain::services::error::{ServiceError, NO_SHEET_DATA};
use crate::domain::sheets::source::SheetSource;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

pub const PREFECTURE_FIELD: &str = "prefecture";
pub const TITLE_FIELD: &str = "title";

/// 表格地点过滤器
///
/// 每次调用都会重新读取整张表，不做缓存
pub struct SheetFilter {
    source: Arc<dyn SheetSource>,
}

impl SheetFilter {
    pub fn new(source: Arc<dyn SheetSource>) -> Self {
        Self { source }
    }

    /// 列出地点，可按都道府县或作品名过滤
    ///
    /// 都道府县过滤优先；非空时忽略作品名过滤。匹配为大小写不敏感的完全相等。
    pub async fn list_locations(
        &self,
        prefecture: Option<&str>,
        title: Option<&str>,
    ) -> Result<Vec<LocationRecord>, ServiceError> {
        let records = self.load().await?;

        let filter = match (non_empty(prefecture), non_empty(title)) {
            (Some(value), _) => Some((PREFECTURE_FIELD, value)),
            (None, Some(value)) => Some((TITLE_FIELD, value)),
            (None, None) => None,
        };

        let Some((field, value)) = filter else {
            return Ok(records);
        };

        let needle = value.to_lowercase();
        let matched: Vec<LocationRecord> = records
            .into_iter()
            .filter(|record| {
                record
                    .get(field)
                    .is_some_and(|cell| cell.to_lowercase() == needle)
            })
            .collect();
        debug!(field, value, matched = matched.len(), "sheet filter applied");

        Ok(matched)
    }

    /// Distinct non-empty titles in first-seen order
    pub async fn list_titles(&self) -> Result<Vec<String>, ServiceError> {
        let records = self.load().await?;

        let mut seen = HashSet::new();
        Ok(records
            .into_iter()
            .filter_map(|mut record| record.fields.remove(TITLE_FIELD))
            .filter(|title| !title.is_empty() && seen.insert(title.clone()))
            .collect())
    }

    async fn load(&self) -> Result<Vec<LocationRecord>, ServiceError> {
        let rows = self.source.fetch_rows().await?;
        debug!(rows = rows.len(), "sheet fetched");

        records_from_rows(rows).ok_or_else(|| ServiceError::NotFound(NO_SHEET_DATA.to_string()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
