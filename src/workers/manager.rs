// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::RefreshSettings;
use crate::workers::worker::Worker;
use backoff::backoff::Backoff;
use backoff::ExponentialBackoffBuilder;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// 工作器重启策略
#[derive(Debug, Clone, Copy)]
pub struct RestartPolicy {
    /// 首次重启前的等待时间
    pub initial_backoff: Duration,
    /// 重启等待时间上限
    pub max_backoff: Duration,
}

impl RestartPolicy {
    pub fn from_settings(settings: &RefreshSettings) -> Self {
        Self {
            initial_backoff: Duration::from_secs(settings.restart_initial_backoff_secs),
            max_backoff: Duration::from_secs(settings.restart_max_backoff_secs),
        }
    }
}

/// 工作管理器
///
/// 持有关闭信号，异常退出（返回错误或panic）的工作器会按指数退避重启，
/// 关闭时等待所有工作器结束
pub struct WorkerManager {
    shutdown_tx: watch::Sender<bool>,
    policy: RestartPolicy,
    handles: Vec<JoinHandle<()>>,
}

impl WorkerManager {
    pub fn new(policy: RestartPolicy) -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self {
            shutdown_tx,
            policy,
            handles: Vec::new(),
        }
    }

    /// 启动一个受监督的工作器
    ///
    /// # 参数
    ///
    /// * `worker` - 要运行的工作器
    pub fn spawn<W>(&mut self, worker: Arc<W>)
    where
        W: Worker + 'static,
    {
        let shutdown_tx = self.shutdown_tx.clone();
        let policy = self.policy;

        let handle = tokio::spawn(async move {
            supervise(worker, shutdown_tx, policy).await;
        });
        self.handles.push(handle);
    }

    /// 已启动的工作器数量
    pub fn worker_count(&self) -> usize {
        self.handles.len()
    }

    /// 发送关闭信号并等待所有工作器结束
    pub async fn shutdown(&mut self) {
        info!("Shutting down workers...");
        self.shutdown_tx.send_replace(true);

        for handle in self.handles.drain(..) {
            if let Err(e) = handle.await {
                error!("Worker supervisor terminated abnormally: {}", e);
            }
        }

        info!("Workers shut down successfully");
    }
}

async fn supervise<W>(worker: Arc<W>, shutdown_tx: watch::Sender<bool>, policy: RestartPolicy)
where
    W: Worker + 'static,
{
    let mut backoff = ExponentialBackoffBuilder::new()
        .with_initial_interval(policy.initial_backoff)
        .with_max_interval(policy.max_backoff)
        .with_max_elapsed_time(None)
        .build();
    let mut shutdown_rx = shutdown_tx.subscribe();

    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        let started = Instant::now();
        let run = {
            let worker = worker.clone();
            let rx = shutdown_tx.subscribe();
            tokio::spawn(async move { worker.run(rx).await })
        };

        let failure = match run.await {
            Ok(Ok(())) => {
                info!("Worker {} exited", worker.name());
                break;
            }
            Ok(Err(e)) => e.to_string(),
            Err(e) if e.is_panic() => "panicked".to_string(),
            Err(e) => e.to_string(),
        };

        if *shutdown_rx.borrow() {
            break;
        }

        // A worker that stayed up longer than the largest backoff starts over.
        if started.elapsed() > policy.max_backoff {
            backoff.reset();
        }
        let delay = backoff.next_backoff().unwrap_or(policy.max_backoff);
        warn!(
            "Worker {} failed ({}), restarting in {:?}",
            worker.name(),
            failure,
            delay
        );

        tokio::select! {
            _ = tokio::time::sleep(delay) => {}
            _ = shutdown_rx.changed() => break,
        }
    }
}
