// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 职位来源（job_source）：一次完整抓取的抽象
/// - 搜索服务（search_service）：快照上的过滤与分页
pub mod job_source;
pub mod search_service;
