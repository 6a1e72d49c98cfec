// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json, Query};
use std::sync::Arc;
use tracing::debug;

use crate::{
    application::dto::search_request::SearchRequestDto,
    domain::{models::SearchPage, services::search_service::SearchService},
    infrastructure::cache::job_cache::JobCache,
    presentation::errors::AppError,
};

/// 处理职位搜索请求
///
/// # 参数
///
/// * `cache` - 职位快照缓存
/// * `params` - 查询参数
///
/// # 返回值
///
/// 返回当前快照上的分页结果
///
/// # 错误
///
/// `page` 或 `limit` 超出范围时返回 422
pub async fn search(
    Extension(cache): Extension<Arc<JobCache>>,
    Query(params): Query<SearchRequestDto>,
) -> Result<Json<SearchPage>, AppError> {
    debug!(
        "Search query={:?} page={} limit={}",
        params.query, params.page, params.limit
    );

    let service = SearchService::new(cache.snapshot());
    let page = service.search(&params)?;
    Ok(Json(page))
}
