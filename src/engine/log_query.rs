// ==========================================
// 热处理分析引擎 - 记录列表查询
// ==========================================
// 职责: 记录列表页的搜索 + 排序 + 合计
// 搜索: 作业号/材料/工艺/炉号 不区分大小写包含；日期按原始搜索词区分大小写包含
// 排序: 按字段文本比较，稳定排序
// ==========================================

use crate::domain::{HeatTreatmentLog, SortDirection};
use crate::engine::aggregators::total_weight;
use serde::{Deserialize, Serialize};

/// 默认排序字段
pub const DEFAULT_SORT_FIELD: &str = "date";

/// 列表查询条件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogQuery {
    #[serde(default)]
    pub search_term: String,
    #[serde(default = "default_sort_field")]
    pub sort_field: String,
    #[serde(default = "default_sort_direction")]
    pub sort_direction: SortDirection,
}

fn default_sort_field() -> String {
    DEFAULT_SORT_FIELD.to_string()
}

fn default_sort_direction() -> SortDirection {
    SortDirection::Desc
}

impl Default for LogQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_field: default_sort_field(),
            sort_direction: default_sort_direction(),
        }
    }
}

impl LogQuery {
    /// 点击表头切换排序：同字段翻转方向，新字段从升序开始
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field.to_string();
            self.sort_direction = SortDirection::Asc;
        }
    }
}

/// 列表查询结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogListing {
    pub logs: Vec<HeatTreatmentLog>,
    pub total_weight: f64,
}

/// 判断记录是否命中搜索词
pub fn matches_search(log: &HeatTreatmentLog, term: &str) -> bool {
    if term.trim().is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    [&log.job_no, &log.material, &log.process, &log.furnace]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
        || log.date.contains(term)
}

/// 执行列表查询
///
/// 排序字段未知时（调用方应先校验）保持原顺序
pub fn query_logs(logs: &[HeatTreatmentLog], query: &LogQuery) -> LogListing {
    let mut filtered: Vec<HeatTreatmentLog> = logs
        .iter()
        .filter(|log| matches_search(log, &query.search_term))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| {
        let ordering = a
            .field_text(&query.sort_field)
            .cmp(&b.field_text(&query.sort_field));
        match query.sort_direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    let total_weight = total_weight(&filtered);
    LogListing {
        logs: filtered,
        total_weight,
    }
}

/// 单条记录总重的展示文本（两位小数）
pub fn format_total_weight(log: &HeatTreatmentLog) -> String {
    format!("{:.2}", log.total_weight_kg())
}
