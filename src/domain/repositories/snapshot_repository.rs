// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::JobListing;
use async_trait::async_trait;
use thiserror::Error;

/// 快照存储错误类型
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 序列化错误
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// 快照仓库特质
///
/// 保存和读取完整的职位快照，每次保存都整体覆盖上一份
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// 读取快照，不存在时返回 `Ok(None)`
    async fn load(&self) -> Result<Option<Vec<JobListing>>, SnapshotError>;

    /// 整体覆盖保存快照
    async fn save(&self, listings: &[JobListing]) -> Result<(), SnapshotError>;
}
