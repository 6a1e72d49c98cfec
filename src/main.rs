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

use jobrs::config::settings::Settings;
use jobrs::domain::repositories::snapshot_repository::SnapshotRepository;
use jobrs::domain::services::job_source::JobSource;
use jobrs::engines::chromium_engine::ChromiumFetcher;
use jobrs::engines::table_extractor::TableExtractor;
use jobrs::infrastructure::cache::job_cache::JobCache;
use jobrs::infrastructure::storage::JsonFileSnapshotStore;
use jobrs::presentation::routes;
use jobrs::utils::telemetry;
use jobrs::workers::manager::{RestartPolicy, WorkerManager};
use jobrs::workers::refresh_worker::RefreshWorker;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting jobrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    jobrs::infrastructure::metrics::init_metrics(&settings.metrics);

    // 3. Restore the last snapshot
    let store: Arc<dyn SnapshotRepository> =
        Arc::new(JsonFileSnapshotStore::from_settings(&settings.storage));
    let cache = Arc::new(JobCache::bootstrap(store.as_ref()).await);

    // 4. Initialize extractor
    let fetcher = Arc::new(ChromiumFetcher::new(
        settings.scraper.remote_debugging_url.clone(),
    ));
    let source: Arc<dyn JobSource> =
        Arc::new(TableExtractor::new(fetcher, settings.scraper.clone()));

    // 5. Start Workers
    let mut worker_manager = WorkerManager::new(RestartPolicy::from_settings(&settings.refresh));
    worker_manager.spawn(Arc::new(RefreshWorker::new(
        source,
        cache.clone(),
        store,
        settings.refresh.interval(),
    )));

    // 6. Start HTTP server
    let app = routes::app(cache);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    worker_manager.shutdown().await;

    if let Err(e) = served {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Unable to listen for shutdown signal: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Unable to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
