// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;

/// `GET /search?query=...` 查询参数
///
/// 缺失的 `query` 与空字符串等价
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQueryDto {
    #[serde(default)]
    pub query: String,
}
