// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::{search_pipeline::SearchPipeline, sheet_filter::SheetFilter};
use crate::presentation::handlers::{location_handler, search_handler};
use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 部署的组件，两者择一挂载到 `/search`
pub enum Deployment {
    Video(Arc<SearchPipeline>),
    Sheet(Arc<SheetFilter>),
}

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(deployment: Deployment) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let service_routes = match deployment {
        Deployment::Video(pipeline) => Router::new()
            .route("/search", get(search_handler::search))
            .layer(Extension(pipeline)),
        Deployment::Sheet(filter) => Router::new()
            .route("/search", get(location_handler::search_locations))
            .route("/titles", get(location_handler::list_titles))
            .layer(Extension(filter)),
    };

    Router::new()
        .merge(public_routes)
        .merge(service_routes)
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
