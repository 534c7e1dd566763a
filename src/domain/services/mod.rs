// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 实现视频搜索管道与表格地点过滤
pub mod error;
pub mod search_pipeline;
pub mod sheet_filter;

pub use error::ServiceError;
