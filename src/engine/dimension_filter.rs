// ==========================================
// 热处理分析引擎 - 维度过滤器
// ==========================================
// 规则: 选择器为 all 时原样返回；否则字段值精确相等才保留
//       不做大小写/空白归一化，选择项由维度枚举器提供
// ==========================================

use crate::domain::{DimensionField, Selector};
use crate::engine::record::AnalyticsRecord;

/// 按维度过滤记录
pub fn filter_by_dimension<T>(records: &[T], field: DimensionField, selector: &Selector) -> Vec<T>
where
    T: AnalyticsRecord + Clone,
{
    if selector.is_all() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|r| selector.matches(r.dimension_value(field)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HeatTreatmentLog, MaintenanceLog};

    fn log(furnace: &str, process: &str) -> HeatTreatmentLog {
        HeatTreatmentLog {
            furnace: furnace.to_string(),
            process: process.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_all_returns_everything_including_empty_values() {
        let logs = vec![log("", ""), log("HF1", "Tempering")];
        let out = filter_by_dimension(&logs, DimensionField::Equipment, &Selector::All);
        assert_eq!(out, logs);
    }

    #[test]
    fn test_exact_case_sensitive_match() {
        let logs = vec![log("HF1", "Tempering"), log("hf1", "Tempering"), log("HF1 ", "Ageing")];
        let out = filter_by_dimension(&logs, DimensionField::Equipment, &Selector::parse("HF1"));
        assert_eq!(out, vec![log("HF1", "Tempering")]);
    }

    #[test]
    fn test_process_filter() {
        let logs = vec![log("HF1", "Tempering"), log("HF2", "Ageing")];
        let out = filter_by_dimension(&logs, DimensionField::Process, &Selector::parse("Ageing"));
        assert_eq!(out, vec![log("HF2", "Ageing")]);
    }

    #[test]
    fn test_machine_field_used_for_maintenance_equipment() {
        let logs = vec![
            MaintenanceLog {
                machine: "HF1".to_string(),
                ..Default::default()
            },
            MaintenanceLog {
                machine: "TF2".to_string(),
                ..Default::default()
            },
        ];
        let out = filter_by_dimension(&logs, DimensionField::Equipment, &Selector::parse("TF2"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].machine, "TF2");

        // 故障记录没有工艺维度
        let none = filter_by_dimension(&logs, DimensionField::Process, &Selector::parse("TF2"));
        assert!(none.is_empty());
    }
}
