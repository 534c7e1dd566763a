// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::location::SheetRow;
use crate::domain::search::engine::UpstreamError;
use async_trait::async_trait;

#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Read the full configured range, header row first
    async fn fetch_rows(&self) -> Result<Vec<SheetRow>, UpstreamError>;
}
