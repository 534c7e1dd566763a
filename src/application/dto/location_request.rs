// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// `GET /search?prefecture=...&title=...` 查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationQueryDto {
    pub prefecture: Option<String>,
    pub title: Option<String>,
}

/// `GET /titles` 响应体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TitlesResponseDto {
    pub titles: Vec<String>,
}
