// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：职位信息和分页结果
/// - 仓库接口（repositories）：快照持久化抽象接口
/// - 服务（services）：职位来源抽象和搜索规则
///
/// 领域层不依赖任何浏览器或文件系统实现。
pub mod models;
pub mod repositories;
pub mod services;
