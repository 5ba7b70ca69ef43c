// ==========================================
// 热处理分析引擎 - 维度枚举器
// ==========================================
// 职责: 从未过滤的全量记录中提取设备/工艺的去重取值，供筛选下拉使用
// 说明: 设备 = 过程记录 furnace ∪ 故障记录 machine（区分大小写，空值忽略）
// ==========================================

use crate::domain::{DimensionOptions, HeatTreatmentLog, MaintenanceLog};
use std::collections::HashSet;

/// 去重收集器（保留首次出现顺序）
#[derive(Default)]
struct DistinctValues {
    seen: HashSet<String>,
    values: Vec<String>,
}

impl DistinctValues {
    fn push(&mut self, value: &str) {
        if self.seen.insert(value.to_string()) {
            self.values.push(value.to_string());
        }
    }
}

/// 设备取值（先过程记录，后故障记录）
pub fn distinct_equipment(
    heat_treatment_logs: &[HeatTreatmentLog],
    maintenance_logs: &[MaintenanceLog],
) -> Vec<String> {
    let mut distinct = DistinctValues::default();

    let furnaces = heat_treatment_logs.iter().filter_map(HeatTreatmentLog::equipment);
    let machines = maintenance_logs.iter().filter_map(MaintenanceLog::equipment);
    for equipment in furnaces.chain(machines) {
        distinct.push(equipment.name);
    }

    distinct.values
}

/// 工艺取值（仅过程记录）
pub fn distinct_processes(heat_treatment_logs: &[HeatTreatmentLog]) -> Vec<String> {
    let mut distinct = DistinctValues::default();
    for process in heat_treatment_logs.iter().filter_map(HeatTreatmentLog::process_type) {
        distinct.push(process);
    }
    distinct.values
}

/// 组合两类筛选项
pub fn dimension_options(
    heat_treatment_logs: &[HeatTreatmentLog],
    maintenance_logs: &[MaintenanceLog],
) -> DimensionOptions {
    DimensionOptions {
        equipment: distinct_equipment(heat_treatment_logs, maintenance_logs),
        processes: distinct_processes(heat_treatment_logs),
    }
}
