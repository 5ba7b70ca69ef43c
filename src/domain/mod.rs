// ==========================================
// 热处理分析引擎 - 领域模型层
// ==========================================
// 职责: 定义记录实体、筛选类型、指标输出结构
// 红线: 不含数据访问逻辑,不含聚合逻辑
// ==========================================

pub mod equipment;
pub mod heat_treatment;
pub mod lenient;
pub mod maintenance;
pub mod metrics;
pub mod types;

// 重导出核心类型
pub use equipment::EquipmentRef;
pub use heat_treatment::HeatTreatmentLog;
pub use maintenance::MaintenanceLog;
pub use metrics::{
    AnalyticsReport, DimensionOptions, EquipmentHours, ProcessCount, ProcessWeight, TimeWeight,
};
pub use types::{
    DimensionField, EquipmentRole, Granularity, Selector, SortDirection, TimeRange, SELECTOR_ALL,
};
