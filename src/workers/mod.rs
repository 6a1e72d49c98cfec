// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 提供后台任务处理和工作器管理功能
/// 包括职位刷新、工作器生命周期管理和异常重启
pub mod manager;
pub mod refresh_worker;
pub mod worker;

pub use worker::Worker;
