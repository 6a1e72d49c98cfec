// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::snapshot_repository::SnapshotRepository;
use crate::domain::services::job_source::JobSource;
use crate::infrastructure::cache::job_cache::JobCache;
use crate::infrastructure::metrics::{REFRESH_TOTAL, SNAPSHOT_LISTINGS};
use crate::utils::errors::WorkerError;
use crate::workers::worker::Worker;
use async_trait::async_trait;
use metrics::{counter, gauge};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info, warn};

/// 单次刷新结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// 快照已替换；`persisted` 表示是否成功写入磁盘
    Replaced { count: usize, persisted: bool },
    /// 抓取结果为空，内存和磁盘都保持不变
    Skipped,
}

/// 职位刷新工作器
///
/// 启动后立即刷新一次，之后每隔 `interval` 刷新一次
pub struct RefreshWorker {
    source: Arc<dyn JobSource>,
    cache: Arc<JobCache>,
    store: Arc<dyn SnapshotRepository>,
    interval: Duration,
}

impl RefreshWorker {
    pub fn new(
        source: Arc<dyn JobSource>,
        cache: Arc<JobCache>,
        store: Arc<dyn SnapshotRepository>,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            cache,
            store,
            interval,
        }
    }

    /// 执行一次刷新
    ///
    /// 非空结果先替换内存快照再写盘，写盘失败不会回滚内存
    ///
    /// # 返回值
    ///
    /// 本次刷新结果
    pub async fn run_cycle(&self) -> RefreshOutcome {
        let listings = self.source.extract().await;

        if listings.is_empty() {
            warn!(
                "Extraction from {} returned no jobs, keeping {} cached listings",
                self.source.name(),
                self.cache.len()
            );
            counter!(REFRESH_TOTAL, "outcome" => "skipped").increment(1);
            return RefreshOutcome::Skipped;
        }

        let count = listings.len();
        self.cache.replace(listings);
        gauge!(SNAPSHOT_LISTINGS).set(count as f64);

        let snapshot = self.cache.snapshot();
        let persisted = match self.store.save(&snapshot).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to persist job snapshot: {}", e);
                false
            }
        };

        info!(
            "Job data refreshed with {} listings (persisted: {})",
            count, persisted
        );
        counter!(REFRESH_TOTAL, "outcome" => "replaced").increment(1);
        RefreshOutcome::Replaced { count, persisted }
    }
}

#[async_trait]
impl Worker for RefreshWorker {
    async fn run(&self, mut shutdown: watch::Receiver<bool>) -> Result<(), WorkerError> {
        info!("Refresh worker started, interval {:?}", self.interval);

        loop {
            if *shutdown.borrow() {
                break;
            }

            tokio::select! {
                _ = self.run_cycle() => {}
                _ = shutdown.changed() => break,
            }

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = shutdown.changed() => break,
            }
        }

        info!("Refresh worker stopped");
        Ok(())
    }

    fn name(&self) -> &str {
        "refresh"
    }
}
