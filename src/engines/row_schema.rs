// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::JobListing;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};
use std::fmt;
use url::Url;

static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("static selector"));
static EMPHASIS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("strong").expect("static selector"));
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").expect("static selector"));

/// 行跳过原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// 单元格数量与布局不符
    CellCount { expected: usize, found: usize },
    /// 必需的子元素缺失
    MissingField(&'static str),
}

impl SkipReason {
    /// 用于指标标签的短名称
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::CellCount { .. } => "cell_count",
            SkipReason::MissingField(_) => "missing_field",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::CellCount { expected, found } => {
                write!(f, "row has {} cells, expected {}", found, expected)
            }
            SkipReason::MissingField(field) => write!(f, "missing {}", field),
        }
    }
}

/// 单行解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowParse {
    Listing(JobListing),
    Skip(SkipReason),
}

/// 表格行布局
///
/// V1: 公司（`strong`）| 职位 | 地点 | 申请链接（`a[href]`）| 发布日期
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSchema {
    pub version: u32,
    pub expected_cells: usize,
}

impl RowSchema {
    pub const V1: RowSchema = RowSchema {
        version: 1,
        expected_cells: 5,
    };

    /// 解析一行
    ///
    /// # 参数
    ///
    /// * `row` - `tr` 元素
    /// * `base` - 用于解析相对链接的页面地址
    ///
    /// # 返回值
    ///
    /// 职位信息，或者说明跳过原因
    pub fn parse(&self, row: ElementRef<'_>, base: Option<&Url>) -> RowParse {
        let cells: Vec<ElementRef<'_>> = row.select(&CELL).collect();
        if cells.len() != self.expected_cells {
            return RowParse::Skip(SkipReason::CellCount {
                expected: self.expected_cells,
                found: cells.len(),
            });
        }

        let company = match cells[0].select(&EMPHASIS).next().map(element_text) {
            Some(company) if !company.is_empty() => company,
            _ => return RowParse::Skip(SkipReason::MissingField("company")),
        };

        let application_link = cells[3]
            .select(&LINK)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(|href| resolve_link(href, base));

        RowParse::Listing(JobListing::new(
            company,
            element_text(cells[1]),
            element_text(cells[2]),
            application_link,
            element_text(cells[4]),
        ))
    }
}

impl Default for RowSchema {
    fn default() -> Self {
        Self::V1
    }
}

/// 元素的可见文本，折叠空白
pub fn element_text(element: ElementRef<'_>) -> String {
    let text: String = element.text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn resolve_link(href: &str, base: Option<&Url>) -> String {
    let href = href.trim();
    match base.and_then(|b| b.join(href).ok()) {
        Some(url) => url.to_string(),
        None => href.to_string(),
    }
}
