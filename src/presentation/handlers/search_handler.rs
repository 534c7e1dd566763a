// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{rejection::QueryRejection, Extension, Json, Query};
use std::sync::Arc;

use crate::{
    application::dto::search_request::SearchQueryDto,
    domain::{
        models::video::ResultRecord,
        services::{search_pipeline::SearchPipeline, ServiceError},
    },
    presentation::errors::AppError,
};

/// 处理直播视频搜索请求
///
/// # 参数
///
/// * `pipeline` - 搜索管道实例
/// * `params` - 查询参数
///
/// # 错误
///
/// - 查询为空或查询串无法解析时返回 400
/// - 外部 API 失败时返回 500
pub async fn search(
    Extension(pipeline): Extension<Arc<SearchPipeline>>,
    params: Result<Query<SearchQueryDto>, QueryRejection>,
) -> Result<Json<Vec<ResultRecord>>, AppError> {
    let Query(params) = params.map_err(|e| ServiceError::Validation(e.body_text()))?;
    let results = pipeline.search(&params.query).await?;
    Ok(Json(results))
}
