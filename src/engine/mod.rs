// ==========================================
// 热处理分析引擎 - 引擎层
// ==========================================
// 职责: 过滤与聚合规则，全部为同步纯函数
// 红线: Engine 不读写存储，不修改输入记录
// ==========================================

pub mod aggregators;
pub mod analytics;
pub mod bucketing;
pub mod dimension_filter;
pub mod dimensions;
pub mod duration;
pub mod log_query;
pub mod record;
pub mod time_window;

// 重导出核心引擎
pub use aggregators::{
    breakdown_hours, furnace_utilization, process_distribution, round2, total_weight,
    weight_by_process, weight_by_time,
};
pub use analytics::{AnalyticsEngine, AnalyticsFilter, FilteredLogs, LogSnapshot};
pub use bucketing::bucket_key;
pub use dimension_filter::filter_by_dimension;
pub use dimensions::{dimension_options, distinct_equipment, distinct_processes};
pub use duration::{parse_duration_hours, run_duration_hours};
pub use log_query::{query_logs, LogListing, LogQuery};
pub use record::AnalyticsRecord;
pub use time_window::filter_by_time_range;
