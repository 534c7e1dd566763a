// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::UpstreamError;
use thiserror::Error;

pub const QUERY_REQUIRED: &str = "Query parameter is required";
pub const NO_SHEET_DATA: &str = "No data found in spreadsheet.";

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}
