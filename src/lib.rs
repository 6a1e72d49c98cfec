// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含 HTTP 请求参数的数据传输对象
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含职位实体、快照仓库接口和搜索规则
pub mod domain;

/// 引擎模块
///
/// 实现浏览器渲染和表格抽取
pub mod engines;

/// 基础设施模块
///
/// 提供快照缓存、快照文件存储和指标导出
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和错误映射
pub mod presentation;

/// 工具模块
///
/// 提供通用的错误类型和遥测初始化
pub mod utils;

/// 工作器模块
///
/// 实现定时刷新和工作器监督
pub mod workers;
