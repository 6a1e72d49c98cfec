// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::search_request::SearchRequestDto;
use crate::domain::models::{JobListing, SearchPage};
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

#[derive(Error, Debug)]
pub enum SearchServiceError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// 职位搜索服务
///
/// 在创建时拿到的快照上执行过滤和分页，不持有任何锁
pub struct SearchService {
    snapshot: Arc<Vec<JobListing>>,
}

impl SearchService {
    pub fn new(snapshot: Arc<Vec<JobListing>>) -> Self {
        Self { snapshot }
    }

    /// 搜索职位
    ///
    /// # 参数
    ///
    /// * `dto` - 查询参数
    ///
    /// # 返回值
    ///
    /// * `Ok(SearchPage)` - 分页结果
    /// * `Err(SearchServiceError)` - 参数校验失败
    pub fn search(&self, dto: &SearchRequestDto) -> Result<SearchPage, SearchServiceError> {
        dto.validate()
            .map_err(|e| SearchServiceError::ValidationError(e.to_string()))?;

        Ok(filter_and_paginate(&self.snapshot, dto.query.as_deref(), dto.page, dto.limit))
    }
}

/// 过滤并分页
///
/// 非空查询词按不区分大小写的子串匹配公司、职位或地点（任一命中即可）。
/// 超出范围的页码返回空列表而不是错误。
///
/// # 参数
///
/// * `listings` - 当前快照
/// * `query` - 可选查询词
/// * `page` - 页码，从 1 开始
/// * `limit` - 每页条数，至少为 1
pub fn filter_and_paginate(
    listings: &[JobListing],
    query: Option<&str>,
    page: u32,
    limit: u32,
) -> SearchPage {
    let filtered: Vec<&JobListing> = match query.filter(|q| !q.is_empty()) {
        Some(q) => {
            let needle = q.to_lowercase();
            listings.iter().filter(|job| job.matches(&needle)).collect()
        }
        None => listings.iter().collect(),
    };

    let limit = limit.max(1) as usize;
    let total_jobs = filtered.len();
    let total_pages = total_jobs.div_ceil(limit);
    let start = (page.max(1) as usize - 1).saturating_mul(limit);

    let jobs = filtered
        .into_iter()
        .skip(start)
        .take(limit)
        .cloned()
        .collect();

    SearchPage {
        jobs,
        total_pages,
        current_page: page,
        total_jobs,
    }
}
