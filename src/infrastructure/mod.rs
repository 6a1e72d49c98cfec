// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节：
/// - 缓存（cache）：进程内职位快照
/// - 指标（metrics）：Prometheus 指标导出
/// - 存储（storage）：JSON 快照文件
///
/// 基础设施层依赖领域层的抽象接口，领域层不感知具体实现。
pub mod cache;
pub mod metrics;
pub mod storage;
