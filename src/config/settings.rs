// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、YouTube、Google Sheets 和日志等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// YouTube Data API 配置
    pub youtube: YouTubeSettings,
    /// Google Sheets API 配置
    pub sheets: SheetsSettings,
    /// 日志配置
    pub logging: LoggingSettings,
}

/// 部署变体
///
/// 两个变体互为替代部署，各自在 `/search` 上挂载一个组件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 直播视频搜索
    Video,
    /// 表格地点列表
    Sheet,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// 部署变体
    pub variant: Variant,
}

/// YouTube Data API 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct YouTubeSettings {
    /// API 密钥，缺失时在首次请求时报错
    pub api_key: Option<String>,
    /// API 基础地址
    pub base_url: String,
    /// 单次搜索返回的最大候选数
    pub max_results: u32,
}

/// Google Sheets API 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SheetsSettings {
    /// API 密钥
    pub api_key: Option<String>,
    /// 表格 ID
    pub spreadsheet_id: Option<String>,
    /// 读取范围 (A1 记法)
    pub range: String,
    /// API 基础地址
    pub base_url: String,
}

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// 日志配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub format: LogFormat,
}

/// 旧版凭据环境变量
///
/// 设置时覆盖所有其他来源中的对应字段
#[derive(Debug, Clone, Default)]
pub struct CredentialOverrides {
    /// `YOUTUBE_API_KEY`
    pub youtube_api_key: Option<String>,
    /// `GOOGLE_SHEETS_API_KEY`
    pub sheets_api_key: Option<String>,
}

impl CredentialOverrides {
    pub fn from_env() -> Self {
        Self {
            youtube_api_key: std::env::var("YOUTUBE_API_KEY").ok(),
            sheets_api_key: std::env::var("GOOGLE_SHEETS_API_KEY").ok(),
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件和环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::load(
            &env,
            Environment::with_prefix("LIVESCOPE").separator("__"),
            CredentialOverrides::from_env(),
        )
    }

    /// Layers defaults, config files, `environment` and `overrides`, in that order
    pub fn load(
        app_environment: &str,
        environment: Environment,
        overrides: CredentialOverrides,
    ) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.variant", "video")?
            .set_default("youtube.base_url", "https://www.googleapis.com/youtube/v3")?
            .set_default("youtube.max_results", 25)?
            .set_default("sheets.range", "Sheet1")?
            .set_default("sheets.base_url", "https://sheets.googleapis.com/v4")?
            .set_default("logging.format", "pretty")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", app_environment)).required(false))
            .add_source(environment)
            .set_override_option("youtube.api_key", overrides.youtube_api_key)?
            .set_override_option("sheets.api_key", overrides.sheets_api_key)?;

        builder.build()?.try_deserialize()
    }
}
