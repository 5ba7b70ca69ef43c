// ==========================================
// 热处理分析引擎 - 记录抽象
// ==========================================
// 职责: 为过滤器提供统一的日期/维度读取接口
// ==========================================

use crate::domain::{DimensionField, HeatTreatmentLog, MaintenanceLog};
use chrono::NaiveDate;

/// 可被时间窗口与维度过滤的记录
pub trait AnalyticsRecord {
    /// 记录日期；无法解析时为 None
    fn record_date(&self) -> Option<NaiveDate>;

    /// 维度取值；记录不具备该维度时为 None
    fn dimension_value(&self, field: DimensionField) -> Option<&str>;
}

impl AnalyticsRecord for HeatTreatmentLog {
    fn record_date(&self) -> Option<NaiveDate> {
        self.run_date()
    }

    fn dimension_value(&self, field: DimensionField) -> Option<&str> {
        HeatTreatmentLog::dimension_value(self, field)
    }
}

impl AnalyticsRecord for MaintenanceLog {
    fn record_date(&self) -> Option<NaiveDate> {
        self.incident_date()
    }

    fn dimension_value(&self, field: DimensionField) -> Option<&str> {
        MaintenanceLog::dimension_value(self, field)
    }
}
