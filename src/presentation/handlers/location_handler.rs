// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{rejection::QueryRejection, Extension, Json, Query};
use std::sync::Arc;

use crate::{
    application::dto::location_request::{LocationQueryDto, TitlesResponseDto},
    domain::{
        models::location::LocationRecord,
        services::{sheet_filter::SheetFilter, ServiceError},
    },
    presentation::errors::AppError,
};

/// 处理地点列表请求
///
/// 查询串无法解析时返回 400，表为空时返回 404，表格 API 失败时返回 500
pub async fn search_locations(
    Extension(filter): Extension<Arc<SheetFilter>>,
    params: Result<Query<LocationQueryDto>, QueryRejection>,
) -> Result<Json<Vec<LocationRecord>>, AppError> {
    let Query(params) = params.map_err(|e| ServiceError::Validation(e.body_text()))?;
    let records = filter
        .list_locations(params.prefecture.as_deref(), params.title.as_deref())
        .await?;
    Ok(Json(records))
}

/// 列出所有作品名，供前端自动补全
pub async fn list_titles(
    Extension(filter): Extension<Arc<SheetFilter>>,
) -> Result<Json<TitlesResponseDto>, AppError> {
    let titles = filter.list_titles().await?;
    Ok(Json(TitlesResponseDto { titles }))
}
