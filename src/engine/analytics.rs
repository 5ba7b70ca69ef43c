// ==========================================
// 热处理分析引擎 - 分析流水线
// ==========================================
// 流程: 全量快照 → 时间窗口 → 设备过滤 → 工艺过滤（仅过程记录）
//       → 六个聚合器各自独立计算
//       维度枚举器读取未过滤的全量记录
// 红线: 无状态、同步、每次全量重算；过滤结果在聚合前即定型
// ==========================================

use crate::domain::{
    AnalyticsReport, DimensionField, Granularity, HeatTreatmentLog, MaintenanceLog, Selector,
    TimeRange,
};
use crate::engine::aggregators;
use crate::engine::dimension_filter::filter_by_dimension;
use crate::engine::dimensions::dimension_options;
use crate::engine::time_window::filter_by_time_range;
use chrono::NaiveDate;
use tracing::{debug, info, instrument};

/// 一次调用所用的全量记录快照
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogSnapshot {
    pub heat_treatment_logs: Vec<HeatTreatmentLog>,
    pub maintenance_logs: Vec<MaintenanceLog>,
}

/// 筛选条件
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsFilter {
    pub time_range: TimeRange,
    pub equipment: Selector,
    pub process: Selector,
    pub granularity: Granularity,
}

impl Default for AnalyticsFilter {
    fn default() -> Self {
        Self {
            time_range: TimeRange::All,
            equipment: Selector::All,
            process: Selector::All,
            granularity: Granularity::Day,
        }
    }
}

/// 过滤后的记录（聚合器只读）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredLogs {
    pub heat_treatment_logs: Vec<HeatTreatmentLog>,
    pub maintenance_logs: Vec<MaintenanceLog>,
}

// ==========================================
// AnalyticsEngine - 分析引擎
// ==========================================
// 无状态引擎，所有方法都是纯函数
#[derive(Debug, Default)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self
    }

    /// 应用级联过滤
    ///
    /// 故障记录不参与工艺过滤
    pub fn apply_filters(
        &self,
        snapshot: &LogSnapshot,
        filter: &AnalyticsFilter,
        today: NaiveDate,
    ) -> FilteredLogs {
        let runs = filter_by_time_range(&snapshot.heat_treatment_logs, filter.time_range, today);
        let breakdowns = filter_by_time_range(&snapshot.maintenance_logs, filter.time_range, today);

        let runs = filter_by_dimension(&runs, DimensionField::Equipment, &filter.equipment);
        let breakdowns =
            filter_by_dimension(&breakdowns, DimensionField::Equipment, &filter.equipment);

        let runs = filter_by_dimension(&runs, DimensionField::Process, &filter.process);

        debug!(
            heat_treatment_count = runs.len(),
            maintenance_count = breakdowns.len(),
            "过滤完成"
        );

        FilteredLogs {
            heat_treatment_logs: runs,
            maintenance_logs: breakdowns,
        }
    }

    /// 计算完整分析报告
    ///
    /// # 参数
    /// - `snapshot`: 全量记录
    /// - `filter`: 筛选条件
    /// - `today`: 时间窗口锚点
    #[instrument(skip(self, snapshot), fields(
        heat_treatment_total = snapshot.heat_treatment_logs.len(),
        maintenance_total = snapshot.maintenance_logs.len(),
        time_range = %filter.time_range,
        equipment = %filter.equipment,
        process = %filter.process,
        granularity = %filter.granularity
    ))]
    pub fn compute(
        &self,
        snapshot: &LogSnapshot,
        filter: &AnalyticsFilter,
        today: NaiveDate,
    ) -> AnalyticsReport {
        let filtered = self.apply_filters(snapshot, filter, today);
        let runs = &filtered.heat_treatment_logs;
        let breakdowns = &filtered.maintenance_logs;

        let report = AnalyticsReport {
            total_weight: aggregators::total_weight(runs),
            weight_by_process: aggregators::weight_by_process(runs),
            weight_by_time: aggregators::weight_by_time(runs, filter.granularity),
            furnace_utilization: aggregators::furnace_utilization(runs),
            breakdown_hours: aggregators::breakdown_hours(breakdowns),
            process_distribution: aggregators::process_distribution(runs),
            options: dimension_options(&snapshot.heat_treatment_logs, &snapshot.maintenance_logs),
            heat_treatment_count: runs.len(),
            maintenance_count: breakdowns.len(),
        };

        info!(
            total_weight = report.total_weight,
            heat_treatment_count = report.heat_treatment_count,
            maintenance_count = report.maintenance_count,
            "分析报告生成完成"
        );

        report
    }
}
