// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 定义视频搜索结果与地点记录的领域表示
pub mod location;
pub mod video;
