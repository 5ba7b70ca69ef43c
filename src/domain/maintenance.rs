// ==========================================
// 热处理分析引擎 - 设备故障维修记录
// ==========================================
// 存储: 键值存储 maintenanceLogs（JSON 数组，字段名 camelCase）
// 说明: 维修时长只有自由文本（如 "2 hours, 30 minutes"）
// ==========================================

use crate::domain::equipment::EquipmentRef;
use crate::domain::lenient::{lenient_string, non_empty};
use crate::domain::types::{DimensionField, EquipmentRole};
use crate::engine::duration::parse_duration_hours;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 设备故障记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceLog {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub machine: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub breakdown_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub breakdown_time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rectification_time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub repair_time: String, // 自由文本时长
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
}

impl MaintenanceLog {
    pub fn incident_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// 设备（角色固定为 machine）
    pub fn equipment(&self) -> Option<EquipmentRef<'_>> {
        non_empty(&self.machine).map(|name| EquipmentRef::new(name, EquipmentRole::Machine))
    }

    /// 维修时长文本；空串视为缺失
    pub fn repair_text(&self) -> Option<&str> {
        non_empty(&self.repair_time)
    }

    /// 维修时长（小时），文本缺失时为 0
    pub fn repair_hours(&self) -> f64 {
        self.repair_text().map(parse_duration_hours).unwrap_or(0.0)
    }

    /// 故障记录没有工艺维度，按工艺取值恒为 None
    pub fn dimension_value(&self, field: DimensionField) -> Option<&str> {
        match field {
            DimensionField::Equipment => Some(self.machine.as_str()),
            DimensionField::Process => None,
        }
    }
}
