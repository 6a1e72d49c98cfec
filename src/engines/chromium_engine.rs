// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{EngineError, PageFetcher, RenderRequest, RenderedPage};
use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// 单次抓取使用的浏览器会话
///
/// 本地启动的浏览器在 `close` 时退出；被提前丢弃时（例如外层超时）
/// chromiumoxide 会在 `Browser` 析构时结束子进程
struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    remote: bool,
}

impl BrowserSession {
    async fn open(remote_debugging_url: Option<&str>) -> Result<Self, EngineError> {
        let (browser, mut handler) = if let Some(url) = remote_debugging_url {
            info!("Connecting to remote Chrome instance at: {}", url);
            Browser::connect(url).await.map_err(|e| {
                EngineError::Browser(format!("Failed to connect to remote Chrome: {}", e))
            })?
        } else {
            let config = BrowserConfig::builder()
                .no_sandbox()
                .arg("--disable-gpu")
                .arg("--disable-dev-shm-usage")
                .request_timeout(Duration::from_secs(30))
                .build()
                .map_err(EngineError::Browser)?;

            Browser::launch(config)
                .await
                .map_err(|e| EngineError::Browser(e.to_string()))?
        };

        // Spawn a handler to process browser events
        let handler = tokio::spawn(async move {
            while let Some(h) = handler.next().await {
                if h.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            browser,
            handler,
            remote: remote_debugging_url.is_some(),
        })
    }

    async fn render(&self, request: &RenderRequest) -> Result<RenderedPage, EngineError> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?;

        let result = render_on_page(&page, request).await;

        if self.remote {
            // A shared remote browser outlives us; only the tab is ours.
            if let Err(e) = page.close().await {
                warn!("Failed to close page: {}", e);
            }
        }

        result
    }

    async fn close(mut self) {
        if !self.remote {
            if let Err(e) = self.browser.close().await {
                warn!("Failed to close browser: {}", e);
            }
            if let Err(e) = self.browser.wait().await {
                warn!("Failed to wait for browser exit: {}", e);
            }
        }
        self.handler.abort();
        info!("Browser session closed");
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler.abort();
    }
}

async fn render_on_page(
    page: &Page,
    request: &RenderRequest,
) -> Result<RenderedPage, EngineError> {
    page.goto(&request.url)
        .await
        .map_err(|e| EngineError::Navigation(e.to_string()))?;
    info!("Navigated to {}", request.url);

    wait_for_selector(page, &request.wait_selector, request.wait_timeout).await?;
    info!("Table loaded successfully");

    let html = page
        .content()
        .await
        .map_err(|e| EngineError::Other(e.to_string()))?;

    let url = page
        .url()
        .await
        .ok()
        .flatten()
        .unwrap_or_else(|| request.url.clone());

    Ok(RenderedPage { url, html })
}

async fn wait_for_selector(
    page: &Page,
    selector: &str,
    timeout: Duration,
) -> Result<(), EngineError> {
    let wait = async {
        loop {
            if page.find_element(selector).await.is_ok() {
                return;
            }
            debug!("Waiting for {}", selector);
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    };

    tokio::time::timeout(timeout, wait)
        .await
        .map_err(|_| EngineError::WaitTimeout {
            selector: selector.to_string(),
            timeout,
        })
}

/// Chromium 页面获取引擎
///
/// 基于chromiumoxide实现，每次调用都使用独立的无头浏览器会话
pub struct ChromiumFetcher {
    remote_debugging_url: Option<String>,
}

impl ChromiumFetcher {
    pub fn new(remote_debugging_url: Option<String>) -> Self {
        Self {
            remote_debugging_url,
        }
    }
}

#[async_trait]
impl PageFetcher for ChromiumFetcher {
    /// 打开会话、渲染页面并释放会话
    ///
    /// # 参数
    ///
    /// * `request` - 渲染请求
    ///
    /// # 返回值
    ///
    /// * `Ok(RenderedPage)` - 渲染后的页面
    /// * `Err(EngineError)` - 启动、导航或等待过程中出现的错误
    async fn fetch_rendered(&self, request: &RenderRequest) -> Result<RenderedPage, EngineError> {
        let session = BrowserSession::open(self.remote_debugging_url.as_deref()).await?;
        let result = session.render(request).await;
        session.close().await;
        result
    }

    fn name(&self) -> &'static str {
        "chromium"
    }
}
