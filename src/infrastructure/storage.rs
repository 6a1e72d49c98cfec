// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::config::settings::StorageSettings;
use crate::domain::models::JobListing;
use crate::domain::repositories::snapshot_repository::{SnapshotError, SnapshotRepository};

/// 本地 JSON 文件快照存储
///
/// 写入时先落到同目录的临时文件再重命名，读者不会看到写了一半的文件
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_settings(settings: &StorageSettings) -> Self {
        Self::new(&settings.snapshot_path)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SnapshotRepository for JsonFileSnapshotStore {
    async fn load(&self) -> Result<Option<Vec<JobListing>>, SnapshotError> {
        let data = match fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SnapshotError::Io(e)),
        };

        let listings = serde_json::from_slice(&data)?;
        Ok(Some(listings))
    }

    async fn save(&self, listings: &[JobListing]) -> Result<(), SnapshotError> {
        let data = serde_json::to_vec_pretty(listings)?;

        // 确保目录存在
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let temp_path = self.temp_path();
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(&data).await?;
        file.flush().await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}

/// 测试用的内存快照存储
#[cfg(test)]
pub struct InMemorySnapshotStore {
    data: tokio::sync::RwLock<Option<Vec<JobListing>>>,
    fail_writes: bool,
}

#[cfg(test)]
impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self {
            data: tokio::sync::RwLock::new(None),
            fail_writes: false,
        }
    }

    /// 创建带初始快照的存储
    pub fn with_snapshot(listings: Vec<JobListing>) -> Self {
        Self {
            data: tokio::sync::RwLock::new(Some(listings)),
            fail_writes: false,
        }
    }

    /// 创建所有写入都会失败的存储
    pub fn failing_writes() -> Self {
        Self {
            data: tokio::sync::RwLock::new(None),
            fail_writes: true,
        }
    }

    /// 当前保存的快照
    pub async fn stored(&self) -> Option<Vec<JobListing>> {
        self.data.read().await.clone()
    }
}

#[cfg(test)]
impl Default for InMemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[async_trait]
impl SnapshotRepository for InMemorySnapshotStore {
    async fn load(&self) -> Result<Option<Vec<JobListing>>, SnapshotError> {
        Ok(self.data.read().await.clone())
    }

    async fn save(&self, listings: &[JobListing]) -> Result<(), SnapshotError> {
        if self.fail_writes {
            return Err(SnapshotError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "snapshot store is read-only",
            )));
        }
        *self.data.write().await = Some(listings.to_vec());
        Ok(())
    }
}
