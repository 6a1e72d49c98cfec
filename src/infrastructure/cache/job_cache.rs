// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{error, info};

use crate::domain::models::JobListing;
use crate::domain::repositories::snapshot_repository::SnapshotRepository;

/// 职位快照缓存
///
/// 持有当前快照的引用，替换只是一次指针交换：
/// 读者要么拿到完整的旧快照，要么拿到完整的新快照
pub struct JobCache {
    current: RwLock<Arc<Vec<JobListing>>>,
}

impl JobCache {
    /// 创建新的缓存
    pub fn new(initial: Vec<JobListing>) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// 从快照仓库初始化缓存
    ///
    /// 读取失败或快照不存在时以空快照启动，不会向上返回错误
    ///
    /// # 参数
    ///
    /// * `store` - 快照仓库
    ///
    /// # 返回值
    ///
    /// 返回初始化完成的缓存
    pub async fn bootstrap(store: &dyn SnapshotRepository) -> Self {
        match store.load().await {
            Ok(Some(listings)) => {
                info!("Loaded {} job listings from snapshot", listings.len());
                Self::new(listings)
            }
            Ok(None) => {
                info!("No snapshot found, starting with an empty job list");
                Self::default()
            }
            Err(e) => {
                error!(
                    "Failed to load snapshot, starting with an empty job list: {}",
                    e
                );
                Self::default()
            }
        }
    }

    /// 获取当前快照
    pub fn snapshot(&self) -> Arc<Vec<JobListing>> {
        self.current.read().clone()
    }

    /// 整体替换快照
    pub fn replace(&self, listings: Vec<JobListing>) {
        let next = Arc::new(listings);
        *self.current.write() = next;
    }

    pub fn len(&self) -> usize {
        self.current.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for JobCache {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
