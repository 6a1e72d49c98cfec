// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::JobListing;
use async_trait::async_trait;

/// 职位来源特质
///
/// 实现方必须吸收所有抓取错误：调用方只区分空结果和非空结果
#[async_trait]
pub trait JobSource: Send + Sync {
    /// 执行一次完整抓取
    async fn extract(&self) -> Vec<JobListing>;

    /// 来源名称
    fn name(&self) -> &'static str;
}
