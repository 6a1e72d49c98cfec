// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    8
}

/// `GET /search/` 查询参数
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct SearchRequestDto {
    /// 可选查询词，匹配公司、职位或地点
    pub query: Option<String>,
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: u32,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 20, message = "limit must be between 1 and 20"))]
    pub limit: u32,
}

impl Default for SearchRequestDto {
    fn default() -> Self {
        Self {
            query: None,
            page: default_page(),
            limit: default_limit(),
        }
    }
}
