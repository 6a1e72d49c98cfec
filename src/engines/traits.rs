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

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 浏览器启动或连接失败
    #[error("Browser error: {0}")]
    Browser(String),
    /// 页面导航失败
    #[error("Navigation failed: {0}")]
    Navigation(String),
    /// 等待元素超时
    #[error("Timeout waiting for '{selector}' after {timeout:?}")]
    WaitTimeout { selector: String, timeout: Duration },
    /// 元素不存在
    #[error("Element not found: {0}")]
    ElementNotFound(String),
    /// 选择器无效
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
    /// 整次抓取超时
    #[error("Extraction did not finish within {0:?}")]
    Timeout(Duration),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 渲染请求
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// 目标URL
    pub url: String,
    /// 等待出现的元素选择器
    pub wait_selector: String,
    /// 等待超时时间
    pub wait_timeout: Duration,
}

/// 渲染完成的页面
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// 最终页面地址（可能经过重定向）
    pub url: String,
    /// 渲染后的 HTML
    pub html: String,
}

/// 页面获取特质
///
/// 打开一个隔离的渲染会话，导航到目标地址，等待指定元素出现后返回 DOM。
/// 会话必须在每条退出路径上释放
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 获取渲染后的页面
    async fn fetch_rendered(&self, request: &RenderRequest) -> Result<RenderedPage, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
