// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use jobrs::infrastructure::cache::job_cache::JobCache;
use jobrs::presentation::routes;
use std::sync::Arc;
use tower::util::ServiceExt;

/// 健康检查测试
///
/// 验证健康检查端点是否正常工作
#[tokio::test]
async fn health_check_works() {
    let app = routes::app(Arc::new(JobCache::default()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

/// 跨域测试
///
/// 任意来源都应被允许
#[tokio::test]
async fn search_allows_any_origin() {
    let app = routes::app(Arc::new(JobCache::default()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/search/")
                .header(header::ORIGIN, "https://frontend.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

/// 预检请求测试
#[tokio::test]
async fn preflight_request_is_accepted() {
    let app = routes::app(Arc::new(JobCache::default()));

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/search/")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}
