// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 定义系统的核心业务实体：
/// - 职位信息（job_listing）：一次抓取得到的单条职位记录
/// - 搜索分页（search_page）：查询接口返回的分页结果
pub mod job_listing;
pub mod search_page;

pub use job_listing::{JobListing, JobStatus, LINK_NOT_AVAILABLE};
pub use search_page::SearchPage;
