// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 未找到申请链接时使用的占位值
pub const LINK_NOT_AVAILABLE: &str = "Link Not Available";

/// 职位状态
///
/// 仅由是否抓取到申请链接推导得出
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    /// 职位开放
    #[serde(rename = "Open")]
    Open,
    /// 职位已招满
    #[serde(rename = "Position Filled")]
    PositionFilled,
}

/// 职位信息
///
/// 由一次抓取批量生成，在下一次成功刷新之前保持不变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    /// 公司名称
    pub company: String,
    /// 职位名称
    pub position: String,
    /// 工作地点
    pub location: String,
    /// 申请链接，缺失时为 [`LINK_NOT_AVAILABLE`]
    pub application_link: String,
    /// 发布日期（原始文本）
    pub date_posted: String,
    /// 职位状态
    pub status: JobStatus,
}

impl JobListing {
    /// 创建新的职位信息
    ///
    /// # 参数
    ///
    /// * `company` - 公司名称
    /// * `position` - 职位名称
    /// * `location` - 工作地点
    /// * `application_link` - 申请链接，`None` 表示未找到
    /// * `date_posted` - 发布日期
    ///
    /// # 返回值
    ///
    /// 返回状态已推导完成的职位信息
    pub fn new(
        company: impl Into<String>,
        position: impl Into<String>,
        location: impl Into<String>,
        application_link: Option<String>,
        date_posted: impl Into<String>,
    ) -> Self {
        let link = application_link.filter(|l| !l.is_empty() && l.as_str() != LINK_NOT_AVAILABLE);
        let (application_link, status) = match link {
            Some(link) => (link, JobStatus::Open),
            None => (LINK_NOT_AVAILABLE.to_string(), JobStatus::PositionFilled),
        };

        Self {
            company: company.into(),
            position: position.into(),
            location: location.into(),
            application_link,
            date_posted: date_posted.into(),
            status,
        }
    }

    /// 判断公司、职位或地点中是否包含已小写化的查询词
    pub fn matches(&self, lowered_query: &str) -> bool {
        self.company.to_lowercase().contains(lowered_query)
            || self.position.to_lowercase().contains(lowered_query)
            || self.location.to_lowercase().contains(lowered_query)
    }
}
