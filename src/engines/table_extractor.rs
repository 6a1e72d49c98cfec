// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ScraperSettings;
use crate::domain::models::JobListing;
use crate::domain::services::job_source::JobSource;
use crate::engines::row_schema::{RowParse, RowSchema, SkipReason};
use crate::engines::traits::{EngineError, PageFetcher, RenderRequest};
use crate::infrastructure::metrics::{EXTRACT_DURATION_SECONDS, ROWS_SKIPPED_TOTAL};
use async_trait::async_trait;
use metrics::{counter, histogram};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use url::Url;

static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("static selector"));

/// 表格解析结果
#[derive(Debug, Default)]
pub struct TableParse {
    /// 有效的职位
    pub listings: Vec<JobListing>,
    /// 被跳过的行（行号从 1 开始，不含表头）
    pub skipped: Vec<(usize, SkipReason)>,
}

/// 解析渲染后的表格
///
/// 跳过容器内的第一行（表头），收集到 `max_rows` 条有效职位后停止
///
/// # 参数
///
/// * `html` - 渲染后的页面
/// * `page_url` - 页面地址，用于解析相对链接
/// * `container_selector` - 行容器选择器
/// * `max_rows` - 最多保留的职位数
/// * `schema` - 行布局
///
/// # 返回值
///
/// * `Ok(TableParse)` - 解析结果
/// * `Err(EngineError)` - 选择器无效或容器不存在
pub fn parse_table(
    html: &str,
    page_url: Option<&str>,
    container_selector: &str,
    max_rows: usize,
    schema: RowSchema,
) -> Result<TableParse, EngineError> {
    let container = Selector::parse(container_selector).map_err(|e| EngineError::InvalidSelector {
        selector: container_selector.to_string(),
        reason: e.to_string(),
    })?;
    let base = page_url.and_then(|u| Url::parse(u).ok());

    let document = Html::parse_document(html);
    let root = document
        .select(&container)
        .next()
        .ok_or_else(|| EngineError::ElementNotFound(container_selector.to_string()))?;

    let rows: Vec<_> = root.select(&ROW).collect();
    info!("Found {} rows in the table", rows.len());

    let mut parsed = TableParse::default();
    for (index, row) in rows.into_iter().enumerate().skip(1) {
        if parsed.listings.len() >= max_rows {
            break;
        }

        match schema.parse(row, base.as_ref()) {
            RowParse::Listing(listing) => {
                debug!("Extracted job: {} - {}", listing.company, listing.position);
                parsed.listings.push(listing);
            }
            RowParse::Skip(reason) => {
                warn!("Skipping row {}: {}", index, reason);
                let label = reason.label();
                counter!(ROWS_SKIPPED_TOTAL, "reason" => label).increment(1);
                parsed.skipped.push((index, reason));
            }
        }
    }

    Ok(parsed)
}

/// 表格职位抽取器
///
/// 驱动页面获取引擎渲染目标页面并解析表格。所有错误都在这里被吸收，
/// 调用方只会拿到（可能为空的）职位列表
pub struct TableExtractor {
    fetcher: Arc<dyn PageFetcher>,
    settings: ScraperSettings,
    schema: RowSchema,
}

impl TableExtractor {
    pub fn new(fetcher: Arc<dyn PageFetcher>, settings: ScraperSettings) -> Self {
        Self {
            fetcher,
            settings,
            schema: RowSchema::V1,
        }
    }

    /// 执行一次抓取，错误向上返回
    pub async fn try_extract(&self) -> Result<Vec<JobListing>, EngineError> {
        let request = RenderRequest {
            url: self.settings.url.clone(),
            wait_selector: self.settings.wait_selector.clone(),
            wait_timeout: self.settings.wait_timeout(),
        };

        let page = self.fetcher.fetch_rendered(&request).await?;
        let parsed = parse_table(
            &page.html,
            Some(&page.url),
            &self.settings.container_selector,
            self.settings.max_rows,
            self.schema,
        )?;

        if !parsed.skipped.is_empty() {
            warn!(
                "Skipped {} rows that did not match row schema v{}",
                parsed.skipped.len(),
                self.schema.version
            );
        }

        Ok(parsed.listings)
    }

    /// 在 `run_timeout` 内执行一次抓取
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<JobListing>)` - 抓取到的职位
    /// * `Err(EngineError::Timeout)` - 整次抓取超时
    /// * `Err(EngineError)` - 抓取过程中的其他错误
    pub async fn try_extract_within_deadline(&self) -> Result<Vec<JobListing>, EngineError> {
        let deadline = self.settings.run_timeout();
        match tokio::time::timeout(deadline, self.try_extract()).await {
            Ok(result) => result,
            Err(_) => Err(EngineError::Timeout(deadline)),
        }
    }
}

#[async_trait]
impl JobSource for TableExtractor {
    async fn extract(&self) -> Vec<JobListing> {
        info!("Starting extraction from {}", self.settings.url);
        let start = Instant::now();

        let listings = match self.try_extract_within_deadline().await {
            Ok(listings) => {
                info!("Successfully scraped {} jobs", listings.len());
                listings
            }
            Err(e @ EngineError::WaitTimeout { .. }) => {
                warn!("{}", e);
                Vec::new()
            }
            Err(e @ EngineError::Timeout(_)) => {
                error!("{}, giving up", e);
                Vec::new()
            }
            Err(e) => {
                error!("An error occurred during scraping: {}", e);
                Vec::new()
            }
        };

        let elapsed = start.elapsed().as_secs_f64();
        histogram!(EXTRACT_DURATION_SECONDS).record(elapsed);
        listings
    }

    fn name(&self) -> &'static str {
        self.fetcher.name()
    }
}

#[cfg(test)]
#[path = "table_extractor_test.rs"]
mod tests;
