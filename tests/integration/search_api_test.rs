// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{create_test_app, listing};
use axum::http::StatusCode;
use jobrs::domain::models::{JobListing, SearchPage};
use serde_json::Value;

fn intern_snapshot() -> Vec<JobListing> {
    let mut listings: Vec<JobListing> = (0..12)
        .map(|i| listing(&format!("Company {}", i), "SWE Intern", "Remote"))
        .collect();
    let others = (0..5).map(|i| listing(&format!("Other {}", i), "Data Analyst", "NYC"));
    listings.extend(others);
    listings
}

#[tokio::test]
async fn test_search_intern_first_page() {
    let app = create_test_app(intern_snapshot());

    let response = app
        .server
        .get("/search/")
        .add_query_param("query", "Intern")
        .add_query_param("page", 1)
        .add_query_param("limit", 8)
        .await;

    response.assert_status_ok();
    let page: SearchPage = response.json();
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total_jobs, 12);
    assert_eq!(page.jobs.len(), 8);
    assert_eq!(page.jobs[0].company, "Company 0");
}

#[tokio::test]
async fn test_search_second_page_holds_remainder() {
    let app = create_test_app(intern_snapshot());

    let response = app
        .server
        .get("/search/")
        .add_query_param("query", "intern")
        .add_query_param("page", 2)
        .await;

    response.assert_status_ok();
    let page: SearchPage = response.json();
    assert_eq!(page.current_page, 2);
    assert_eq!(page.jobs.len(), 4);
    assert_eq!(page.jobs[0].company, "Company 8");
}

#[tokio::test]
async fn test_search_defaults_without_parameters() {
    let app = create_test_app(intern_snapshot());

    let response = app.server.get("/search/").await;

    response.assert_status_ok();
    let page: SearchPage = response.json();
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total_jobs, 17);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.jobs.len(), 8);
}

#[tokio::test]
async fn test_search_without_trailing_slash() {
    let app = create_test_app(intern_snapshot());

    let response = app
        .server
        .get("/search")
        .add_query_param("query", "nyc")
        .await;

    response.assert_status_ok();
    let page: SearchPage = response.json();
    assert_eq!(page.total_jobs, 5);
}

#[tokio::test]
async fn test_search_page_beyond_range_is_empty() {
    let app = create_test_app(intern_snapshot());

    let response = app
        .server
        .get("/search/")
        .add_query_param("query", "Intern")
        .add_query_param("page", 5)
        .await;

    response.assert_status_ok();
    let page: SearchPage = response.json();
    assert!(page.jobs.is_empty());
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.current_page, 5);
}

#[tokio::test]
async fn test_search_on_empty_cache() {
    let app = create_test_app(Vec::new());

    let response = app.server.get("/search/").await;

    response.assert_status_ok();
    let page: SearchPage = response.json();
    assert!(page.jobs.is_empty());
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.total_jobs, 0);
}

#[tokio::test]
async fn test_search_rejects_limit_above_maximum() {
    let app = create_test_app(intern_snapshot());

    let response = app.server.get("/search/").add_query_param("limit", 21).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_search_rejects_page_zero() {
    let app = create_test_app(intern_snapshot());

    let response = app.server.get("/search/").add_query_param("page", 0).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_search_serializes_listing_fields() {
    let job = JobListing::new("Acme", "Intern", "Remote", None, "Oct 02");
    let app = create_test_app(vec![job]);

    let response = app.server.get("/search/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let job = &body["jobs"][0];
    assert_eq!(job["company"], "Acme");
    assert_eq!(job["application_link"], "Link Not Available");
    assert_eq!(job["status"], "Position Filled");
    assert_eq!(job["date_posted"], "Oct 02");
}

#[tokio::test]
async fn test_search_sees_replaced_snapshot() {
    let app = create_test_app(vec![listing("Old Co", "Intern", "Remote")]);

    app.cache.replace(vec![listing("New Co", "Intern", "Remote")]);

    let page: SearchPage = app.server.get("/search/").await.json();
    assert_eq!(page.total_jobs, 1);
    assert_eq!(page.jobs[0].company, "New Co");
}
