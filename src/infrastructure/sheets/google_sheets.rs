// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SheetsSettings;
use crate::domain::models::location::SheetRow;
use crate::domain::search::engine::UpstreamError;
use crate::domain::sheets::source::SheetSource;
use crate::infrastructure::google_api;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

const API_KEY_NAME: &str = "GOOGLE_SHEETS_API_KEY";
const SPREADSHEET_ID_NAME: &str = "LIVESCOPE__SHEETS__SPREADSHEET_ID";

/// `spreadsheets.values.get` response; `values` is omitted for an empty range
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// Google Sheets API v4 客户端
pub struct GoogleSheetsClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    spreadsheet_id: Option<String>,
    range: String,
}

impl GoogleSheetsClient {
    pub fn new(settings: &SheetsSettings) -> Result<Self, UpstreamError> {
        Ok(Self {
            client: google_api::build_client()?,
            base_url: google_api::parse_base_url(&settings.base_url)?,
            api_key: settings.api_key.clone(),
            spreadsheet_id: settings.spreadsheet_id.clone(),
            range: settings.range.clone(),
        })
    }

    /// Returns the name of the first missing setting, if any
    pub fn missing_setting(&self) -> Option<&'static str> {
        if google_api::require(self.api_key.as_deref(), API_KEY_NAME).is_err() {
            Some(API_KEY_NAME)
        } else if google_api::require(self.spreadsheet_id.as_deref(), SPREADSHEET_ID_NAME).is_err()
        {
            Some(SPREADSHEET_ID_NAME)
        } else {
            None
        }
    }
}

#[async_trait]
impl SheetSource for GoogleSheetsClient {
    async fn fetch_rows(&self) -> Result<Vec<SheetRow>, UpstreamError> {
        let key = google_api::require(self.api_key.as_deref(), API_KEY_NAME)?;
        let spreadsheet_id =
            google_api::require(self.spreadsheet_id.as_deref(), SPREADSHEET_ID_NAME)?;
        let url = google_api::endpoint(
            &self.base_url,
            &["spreadsheets", spreadsheet_id, "values", self.range.as_str()],
        )?;
        debug!(url = %url, "Sheets values.get");

        let request = self.client.get(url).query(&[("key", key)]);
        let response: ValueRange =
            google_api::read_json(google_api::send(request).await?).await?;

        Ok(response
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect())
    }
}

fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
