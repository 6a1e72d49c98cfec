// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum_test::TestServer;
use jobrs::config::settings::ScraperSettings;
use jobrs::domain::models::JobListing;
use jobrs::engines::traits::{EngineError, PageFetcher, RenderRequest, RenderedPage};
use jobrs::infrastructure::cache::job_cache::JobCache;
use jobrs::presentation::routes;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const PAGE_URL: &str = "https://github.com/org/new-grad-positions";

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub cache: Arc<JobCache>,
}

pub fn create_test_app(listings: Vec<JobListing>) -> TestApp {
    let cache = Arc::new(JobCache::new(listings));
    let server = TestServer::new(routes::app(cache.clone())).unwrap();
    TestApp { server, cache }
}

pub fn listing(company: &str, position: &str, location: &str) -> JobListing {
    let slug = company.to_lowercase().replace(' ', "-");
    JobListing::new(
        company,
        position,
        location,
        Some(format!("https://jobs.example/{}", slug)),
        "Oct 01",
    )
}

pub fn scraper_settings() -> ScraperSettings {
    ScraperSettings {
        url: PAGE_URL.to_string(),
        wait_selector: "markdown-accessiblity-table".to_string(),
        container_selector: "article[itemprop='text']".to_string(),
        wait_timeout_secs: 10,
        run_timeout_secs: 120,
        max_rows: 10,
        remote_debugging_url: None,
    }
}

/// 构造一张与抓取目标布局一致的表格页面
pub fn table_page(rows: &[(&str, &str, Option<&str>)]) -> String {
    let body: String = rows
        .iter()
        .map(|(company, position, link)| {
            let link_cell = link
                .map(|href| format!(r#"<a href="{}">Apply</a>"#, href))
                .unwrap_or_else(|| "🔒".to_string());
            format!(
                "<tr><td><strong>{}</strong></td><td>{}</td><td>Remote</td><td>{}</td><td>Oct 01</td></tr>",
                company, position, link_cell
            )
        })
        .collect();

    format!(
        r#"<html><body><article itemprop="text"><markdown-accessiblity-table><table>
            <thead><tr><th>Company</th><th>Role</th><th>Location</th><th>Application</th><th>Date</th></tr></thead>
            <tbody>{}</tbody>
        </table></markdown-accessiblity-table></article></body></html>"#,
        body
    )
}

/// 按顺序返回预设结果的页面获取器；脚本用完后一直等待超时
pub struct ScriptedFetcher {
    pages: Vec<Option<String>>,
    calls: AtomicUsize,
}

impl ScriptedFetcher {
    /// `None` 表示该次调用等待表格超时
    pub fn new(pages: Vec<Option<String>>) -> Self {
        Self {
            pages,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for ScriptedFetcher {
    async fn fetch_rendered(&self, request: &RenderRequest) -> Result<RenderedPage, EngineError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        match self.pages.get(call).cloned().flatten() {
            Some(html) => Ok(RenderedPage {
                url: request.url.clone(),
                html,
            }),
            None => Err(EngineError::WaitTimeout {
                selector: request.wait_selector.clone(),
                timeout: request.wait_timeout,
            }),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
