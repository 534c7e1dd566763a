// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索服务模块
///
/// 提供 YouTube Data API 的客户端实现
pub mod youtube;

pub use youtube::YouTubeClient;
