// ==========================================
// 热处理分析引擎 - 热处理过程记录
// ==========================================
// 存储: 键值存储 heatTreatmentLogs（JSON 数组，字段名 camelCase）
// 红线: 数量/单重以文本存储，总重每次现算，不落库
// ==========================================

use crate::domain::equipment::EquipmentRef;
use crate::domain::lenient::{
    lenient_string, lenient_string_list, non_empty, parse_clock_time, parse_leading_decimal,
    parse_leading_int,
};
use crate::domain::types::{DimensionField, EquipmentRole};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// 热处理过程记录（一次完整的炉次）
///
/// 字段顺序即存储与导出顺序，勿随意调整
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatTreatmentLog {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String, // YYYY-MM-DD
    #[serde(default, deserialize_with = "lenient_string")]
    pub shift: String,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub employees: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub furnace: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_no: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub material: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub quantity: String, // 件数（文本）
    #[serde(default, deserialize_with = "lenient_string")]
    pub weight_per_forging: String, // 单件重量 kg（文本）
    #[serde(default, deserialize_with = "lenient_string")]
    pub heat_no: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub serial_no: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ht_batch_no: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub process: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub process_start_time: String, // HH:MM
    #[serde(default, deserialize_with = "lenient_string")]
    pub temperature: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub attaining_time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub soaking_time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_time: String, // HH:MM
    #[serde(default, deserialize_with = "lenient_string")]
    pub cooling_mode: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
}

impl HeatTreatmentLog {
    // ==========================================
    // 类型化访问器
    // ==========================================

    /// 件数；缺失或无法解析时为 None
    pub fn piece_count(&self) -> Option<u64> {
        parse_leading_int(&self.quantity)
    }

    /// 单件重量 (kg)；缺失或无法解析时为 None
    pub fn unit_weight_kg(&self) -> Option<f64> {
        parse_leading_decimal(&self.weight_per_forging)
    }

    /// 总重 = 件数 × 单重，任一无法解析按 0 计
    pub fn total_weight_kg(&self) -> f64 {
        let count = self.piece_count().unwrap_or(0) as f64;
        let unit = self.unit_weight_kg().unwrap_or(0.0);
        count * unit
    }

    /// 件数与单重文本是否都已填写（不判断能否解析）
    pub fn has_weight_inputs(&self) -> bool {
        !self.quantity.is_empty() && !self.weight_per_forging.is_empty()
    }

    pub fn run_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        parse_clock_time(&self.process_start_time)
    }

    pub fn end_time(&self) -> Option<NaiveTime> {
        parse_clock_time(&self.end_time)
    }

    pub fn process_type(&self) -> Option<&str> {
        non_empty(&self.process)
    }

    /// 设备（角色固定为 furnace）
    pub fn equipment(&self) -> Option<EquipmentRef<'_>> {
        non_empty(&self.furnace).map(|name| EquipmentRef::new(name, EquipmentRole::Furnace))
    }

    /// 按维度取字段值（供维度过滤器使用）
    pub fn dimension_value(&self, field: DimensionField) -> Option<&str> {
        match field {
            DimensionField::Equipment => Some(self.furnace.as_str()),
            DimensionField::Process => Some(self.process.as_str()),
        }
    }

    /// 按字段名（camelCase）取文本值，供列表排序使用
    pub fn field_text(&self, field: &str) -> Option<String> {
        let value = match field {
            "id" => self.id.clone(),
            "date" => self.date.clone(),
            "shift" => self.shift.clone(),
            "employees" => self.employees.join(","),
            "furnace" => self.furnace.clone(),
            "jobNo" => self.job_no.clone(),
            "material" => self.material.clone(),
            "quantity" => self.quantity.clone(),
            "weightPerForging" => self.weight_per_forging.clone(),
            "heatNo" => self.heat_no.clone(),
            "serialNo" => self.serial_no.clone(),
            "htBatchNo" => self.ht_batch_no.clone(),
            "process" => self.process.clone(),
            "processStartTime" => self.process_start_time.clone(),
            "temperature" => self.temperature.clone(),
            "attainingTime" => self.attaining_time.clone(),
            "soakingTime" => self.soaking_time.clone(),
            "endTime" => self.end_time.clone(),
            "coolingMode" => self.cooling_mode.clone(),
            "notes" => self.notes.clone(),
            "createdAt" => self.created_at.clone(),
            _ => return None,
        };
        Some(value)
    }
}
