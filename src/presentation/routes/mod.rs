// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::cache::job_cache::JobCache;
use crate::presentation::handlers::search_handler;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由，调用方负责注入 `Extension<Arc<JobCache>>`
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let job_routes = Router::new()
        .route("/search", get(search_handler::search))
        .route("/search/", get(search_handler::search));

    Router::new().merge(public_routes).merge(job_routes)
}

/// 创建完整应用
///
/// 注入缓存并挂载 CORS（允许任意来源、方法和请求头）与请求追踪中间件
pub fn app(cache: Arc<JobCache>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes()
        .layer(Extension(cache))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
