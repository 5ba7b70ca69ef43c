// ==========================================
// 热处理分析引擎 - 指标聚合器
// ==========================================
// 职责: 六个互相独立的纯函数聚合器
//   1) 总重               2) 按工艺重量
//   3) 按时间桶重量       4) 按设备利用时长
//   5) 按设备停机时长     6) 工艺频次分布
// 红线: 不修改输入；数值只在输出时保留两位小数
// 顺序: 时间桶按键升序，其余按分组首次出现顺序
// ==========================================

use crate::domain::{
    EquipmentHours, Granularity, HeatTreatmentLog, MaintenanceLog, ProcessCount, ProcessWeight,
    TimeWeight,
};
use crate::engine::bucketing::bucket_key;
use crate::engine::duration::run_duration_hours;
use std::collections::HashMap;

// ==========================================
// 两位小数舍入
// ==========================================

/// 按十进制表示四舍五入到两位小数
///
/// 基于最短十进制表示进位，1.005 -> 1.01（而非二进制误差下的 1.00）
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let text = format!("{}", value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => return value,
    };
    if frac_part.len() <= 2 {
        return value;
    }

    let kept = format!("{}{}", int_part, &frac_part[..2]);
    let mut scaled: u128 = match kept.parse() {
        Ok(v) => v,
        Err(_) => return (value * 100.0).round() / 100.0,
    };
    if frac_part.as_bytes()[2] >= b'5' {
        scaled += 1;
    }

    let rounded = scaled as f64 / 100.0;
    if value.is_sign_negative() {
        -rounded
    } else {
        rounded
    }
}

// ==========================================
// 有序分组累加器（保留首次出现顺序）
// ==========================================

struct OrderedTotals<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V: std::ops::AddAssign> OrderedTotals<V> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn add(&mut self, key: &str, amount: V) {
        match self.index.get(key) {
            Some(&pos) => self.entries[pos].1 += amount,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), amount));
            }
        }
    }

    fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

// ==========================================
// 聚合器
// ==========================================

/// 总重 (kg)
///
/// 数量/单重无法解析的记录贡献 0，不跳过
pub fn total_weight(logs: &[HeatTreatmentLog]) -> f64 {
    round2(logs.iter().map(HeatTreatmentLog::total_weight_kg).sum())
}

/// 按工艺统计重量
///
/// 跳过: 工艺、数量或单重缺失
pub fn weight_by_process(logs: &[HeatTreatmentLog]) -> Vec<ProcessWeight> {
    let mut totals = OrderedTotals::<f64>::new();

    for log in logs {
        let Some(process) = log.process_type() else {
            continue;
        };
        if !log.has_weight_inputs() {
            continue;
        }
        totals.add(process, log.total_weight_kg());
    }

    totals
        .into_entries()
        .into_iter()
        .map(|(name, weight)| ProcessWeight {
            name,
            weight: round2(weight),
        })
        .collect()
}

/// 按时间桶统计重量，结果按桶键升序
///
/// 跳过: 日期、数量或单重缺失；按月/年分桶时日期无法解析同样跳过
pub fn weight_by_time(logs: &[HeatTreatmentLog], granularity: Granularity) -> Vec<TimeWeight> {
    let mut totals = OrderedTotals::<f64>::new();

    for log in logs {
        if log.date.is_empty() || !log.has_weight_inputs() {
            continue;
        }
        // 按日分桶直接使用原始日期文本
        if granularity == Granularity::Day {
            totals.add(&log.date, log.total_weight_kg());
            continue;
        }
        let Some(date) = log.run_date() else {
            tracing::debug!(id = %log.id, date = %log.date, "日期无法解析，跳过按月/年分桶");
            continue;
        };
        totals.add(&bucket_key(date, granularity), log.total_weight_kg());
    }

    let mut entries = totals.into_entries();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    entries
        .into_iter()
        .map(|(time, weight)| TimeWeight {
            time,
            weight: round2(weight),
        })
        .collect()
}

/// 按设备统计利用时长（小时），跨零点自动修正
///
/// 跳过: 设备、开始或结束时间缺失；时间无法解析同样跳过
pub fn furnace_utilization(logs: &[HeatTreatmentLog]) -> Vec<EquipmentHours> {
    let mut totals = OrderedTotals::<f64>::new();

    for log in logs {
        let Some(equipment) = log.equipment() else {
            continue;
        };
        let (Some(start), Some(end)) = (log.start_time(), log.end_time()) else {
            if !log.process_start_time.is_empty() && !log.end_time.is_empty() {
                tracing::debug!(id = %log.id, "开始/结束时间无法解析，跳过利用时长");
            }
            continue;
        };
        totals.add(equipment.name, run_duration_hours(start, end));
    }

    totals
        .into_entries()
        .into_iter()
        .map(|(name, hours)| EquipmentHours {
            name,
            hours: round2(hours),
        })
        .collect()
}

/// 按设备统计停机时长（小时）
///
/// 跳过: 设备或维修时长文本缺失
pub fn breakdown_hours(logs: &[MaintenanceLog]) -> Vec<EquipmentHours> {
    let mut totals = OrderedTotals::<f64>::new();

    for log in logs {
        let Some(equipment) = log.equipment() else {
            continue;
        };
        if log.repair_text().is_none() {
            continue;
        }
        totals.add(equipment.name, log.repair_hours());
    }

    totals
        .into_entries()
        .into_iter()
        .map(|(name, hours)| EquipmentHours {
            name,
            hours: round2(hours),
        })
        .collect()
}

/// 工艺频次分布
///
/// 跳过: 工艺缺失
pub fn process_distribution(logs: &[HeatTreatmentLog]) -> Vec<ProcessCount> {
    let mut totals = OrderedTotals::<u64>::new();

    for log in logs {
        if let Some(process) = log.process_type() {
            totals.add(process, 1);
        }
    }

    totals
        .into_entries()
        .into_iter()
        .map(|(name, value)| ProcessCount { name, value })
        .collect()
}
