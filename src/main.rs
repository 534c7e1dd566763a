// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use livescope::config::settings::{Settings, Variant};
use livescope::domain::services::search_pipeline::SearchPipeline;
use livescope::domain::services::sheet_filter::SheetFilter;
use livescope::infrastructure::search::YouTubeClient;
use livescope::infrastructure::sheets::GoogleSheetsClient;
use livescope::presentation::routes::{self, Deployment};
use livescope::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责加载配置、构建所选变体并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.logging);
    info!("Starting livescope...");
    info!(variant = ?settings.server.variant, "Configuration loaded");

    // 3. Build the selected component
    let deployment = match settings.server.variant {
        Variant::Video => {
            let client = Arc::new(YouTubeClient::new(&settings.youtube)?);
            if !client.has_api_key() {
                warn!("YOUTUBE_API_KEY is not set; /search will fail until it is configured");
            }
            let pipeline = SearchPipeline::new(client.clone(), client)
                .with_max_results(settings.youtube.max_results);
            Deployment::Video(Arc::new(pipeline))
        }
        Variant::Sheet => {
            let client = Arc::new(GoogleSheetsClient::new(&settings.sheets)?);
            if let Some(name) = client.missing_setting() {
                warn!("{} is not set; /search will fail until it is configured", name);
            }
            Deployment::Sheet(Arc::new(SheetFilter::new(client)))
        }
    };

    // 4. Start HTTP server
    let app = routes::routes(deployment);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
