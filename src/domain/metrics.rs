// ==========================================
// 热处理分析引擎 - 指标输出表
// ==========================================
// 职责: 各聚合器输出的行结构，字段名即图表组件读取的键
// 约定: 数值在输出时已保留两位小数
// ==========================================

use serde::{Deserialize, Serialize};

/// 按工艺统计的重量 `{name, weight}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessWeight {
    pub name: String,
    pub weight: f64,
}

/// 按时间桶统计的重量 `{time, weight}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeWeight {
    pub time: String,
    pub weight: f64,
}

/// 按设备统计的小时数 `{name, hours}`（利用时长 / 停机时长共用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentHours {
    pub name: String,
    pub hours: f64,
}

/// 工艺频次分布 `{name, value}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessCount {
    pub name: String,
    pub value: u64,
}

/// 筛选项（设备 / 工艺的去重取值）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionOptions {
    pub equipment: Vec<String>,
    pub processes: Vec<String>,
}

/// 一次完整重算的结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    /// 总重 (kg)，两位小数
    pub total_weight: f64,
    pub weight_by_process: Vec<ProcessWeight>,
    pub weight_by_time: Vec<TimeWeight>,
    pub furnace_utilization: Vec<EquipmentHours>,
    pub breakdown_hours: Vec<EquipmentHours>,
    pub process_distribution: Vec<ProcessCount>,
    pub options: DimensionOptions,
    /// 过滤后的过程记录条数
    pub heat_treatment_count: usize,
    /// 过滤后的故障记录条数
    pub maintenance_count: usize,
}

impl AnalyticsReport {
    /// 总重的展示文本（固定两位小数，如 "45.00"）
    pub fn total_weight_display(&self) -> String {
        format!("{:.2}", self.total_weight)
    }
}
