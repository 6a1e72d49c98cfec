// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{
    create_test_app, scraper_settings, table_page, ScriptedFetcher, PAGE_URL,
};
use axum_test::TestServer;
use jobrs::domain::models::{JobStatus, SearchPage};
use jobrs::domain::repositories::snapshot_repository::SnapshotRepository;
use jobrs::engines::table_extractor::TableExtractor;
use jobrs::infrastructure::cache::job_cache::JobCache;
use jobrs::infrastructure::storage::JsonFileSnapshotStore;
use jobrs::presentation::routes;
use jobrs::workers::refresh_worker::{RefreshOutcome, RefreshWorker};
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

#[tokio::test]
async fn test_timed_out_refresh_keeps_previous_snapshot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("job_data.json");
    let store = Arc::new(JsonFileSnapshotStore::new(&path));

    let first = table_page(&[
        ("Acme", "SWE Intern", Some("https://acme.example/apply")),
        ("Globex", "New Grad Engineer", None),
    ]);
    let fetcher = Arc::new(ScriptedFetcher::new(vec![Some(first), None]));
    let source = Arc::new(TableExtractor::new(fetcher.clone(), scraper_settings()));
    let cache = Arc::new(JobCache::default());
    let worker = RefreshWorker::new(source, cache.clone(), store, Duration::from_secs(3600));

    let outcome = worker.run_cycle().await;
    assert_eq!(
        outcome,
        RefreshOutcome::Replaced {
            count: 2,
            persisted: true
        }
    );
    let written = std::fs::read(&path).unwrap();

    assert_eq!(worker.run_cycle().await, RefreshOutcome::Skipped);
    assert_eq!(fetcher.calls(), 2);
    assert_eq!(std::fs::read(&path).unwrap(), written);

    let server = TestServer::new(routes::app(cache)).unwrap();
    let page: SearchPage = server.get("/search/").await.json();
    assert_eq!(page.total_jobs, 2);
    assert_eq!(page.jobs[0].company, "Acme");
    assert_eq!(page.jobs[0].status, JobStatus::Open);
    assert_eq!(page.jobs[1].status, JobStatus::PositionFilled);
}

#[tokio::test]
async fn test_restart_restores_persisted_snapshot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("job_data.json");

    let page = table_page(&[
        ("Acme", "Intern", Some("/apply/acme")),
        ("Initech", "Intern", Some("https://initech.example/jobs")),
    ]);
    let fetcher = Arc::new(ScriptedFetcher::new(vec![Some(page)]));
    let source = Arc::new(TableExtractor::new(fetcher, scraper_settings()));
    let cache = Arc::new(JobCache::default());
    let worker = RefreshWorker::new(
        source,
        cache.clone(),
        Arc::new(JsonFileSnapshotStore::new(&path)),
        Duration::from_secs(3600),
    );
    worker.run_cycle().await;

    let restored = JobCache::bootstrap(&JsonFileSnapshotStore::new(&path)).await;
    assert_eq!(*restored.snapshot(), *cache.snapshot());
    assert_eq!(
        restored.snapshot()[0].application_link,
        "https://github.com/apply/acme"
    );
    assert!(PAGE_URL.starts_with("https://github.com/"));
}

#[tokio::test]
async fn test_corrupt_snapshot_boots_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("job_data.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let store = JsonFileSnapshotStore::new(&path);
    assert!(store.load().await.is_err());

    let cache = JobCache::bootstrap(&store).await;
    assert!(cache.is_empty());

    let app = create_test_app(cache.snapshot().to_vec());
    let page: SearchPage = app.server.get("/search/").await.json();
    assert_eq!(page.total_jobs, 0);
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn test_missing_snapshot_boots_empty() {
    let dir = tempdir().unwrap();
    let store = JsonFileSnapshotStore::new(dir.path().join("absent.json"));

    assert!(store.load().await.unwrap().is_none());
    assert!(JobCache::bootstrap(&store).await.is_empty());
}
