// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 抓取目标地址所在的环境变量
pub const SOURCE_URL_ENV: &str = "REMOTE_SCRAPE";

/// 应用程序配置设置
///
/// 包含服务器、抓取器、快照存储、刷新任务和指标等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 抓取器配置
    pub scraper: ScraperSettings,
    /// 快照存储配置
    pub storage: StorageSettings,
    /// 刷新任务配置
    pub refresh: RefreshSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 抓取器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSettings {
    /// 抓取页面地址
    pub url: String,
    /// 等待出现的表格元素选择器
    pub wait_selector: String,
    /// 表格行所在容器的选择器
    pub container_selector: String,
    /// 等待表格出现的超时时间（秒）
    pub wait_timeout_secs: u64,
    /// 整次抓取的超时时间（秒）
    pub run_timeout_secs: u64,
    /// 单次抓取最多保留的行数
    pub max_rows: usize,
    /// 远程 Chrome 调试地址，设置后不再本地启动浏览器
    pub remote_debugging_url: Option<String>,
}

impl ScraperSettings {
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }

    pub fn run_timeout(&self) -> Duration {
        Duration::from_secs(self.run_timeout_secs)
    }
}

/// 快照存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 快照文件路径
    pub snapshot_path: String,
}

/// 刷新任务配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshSettings {
    /// 刷新间隔（秒）
    pub interval_secs: u64,
    /// 任务异常退出后的初始重启退避（秒）
    pub restart_initial_backoff_secs: u64,
    /// 重启退避上限（秒）
    pub restart_max_backoff_secs: u64,
}

impl RefreshSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出
    pub enabled: bool,
    /// 导出监听地址
    pub listen_addr: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件和环境变量加载配置，支持默认值。
    /// 抓取地址只能由 `REMOTE_SCRAPE` 或 `JOBRS__SCRAPER__URL` 提供
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败（例如缺少抓取地址）
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            // Default scraper settings
            .set_default("scraper.wait_selector", "markdown-accessiblity-table")?
            .set_default("scraper.container_selector", "article[itemprop='text']")?
            .set_default("scraper.wait_timeout_secs", 10)?
            .set_default("scraper.run_timeout_secs", 120)?
            .set_default("scraper.max_rows", 10)?
            // Default Storage settings
            .set_default("storage.snapshot_path", "job_data.json")?
            // Default refresh settings
            .set_default("refresh.interval_secs", 3600)?
            .set_default("refresh.restart_initial_backoff_secs", 5)?
            .set_default("refresh.restart_max_backoff_secs", 300)?
            // Default metrics settings
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("JOBRS").separator("__"))
            .set_override_option("scraper.url", std::env::var(SOURCE_URL_ENV).ok())?;

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
