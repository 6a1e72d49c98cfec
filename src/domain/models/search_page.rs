// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use super::job_listing::JobListing;

/// 搜索分页结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    /// 当前页的职位
    pub jobs: Vec<JobListing>,
    /// 总页数，没有匹配结果时为 0
    pub total_pages: usize,
    /// 当前页码（从 1 开始）
    pub current_page: u32,
    /// 过滤后的职位总数
    pub total_jobs: usize,
}
