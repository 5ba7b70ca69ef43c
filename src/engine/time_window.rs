// ==========================================
// 热处理分析引擎 - 时间窗口过滤器
// ==========================================
// 规则: 记录日期 >= 起始日期（按日历日比较，含起始日）
//       日期无法解析的记录一律排除（All 除外）
// ==========================================

use crate::domain::TimeRange;
use crate::engine::record::AnalyticsRecord;
use chrono::NaiveDate;

/// 按时间范围过滤记录
///
/// # 参数
/// - `records`: 全量记录
/// - `range`: 时间范围
/// - `today`: 锚点日期（调用方传入“今天”）
pub fn filter_by_time_range<T>(records: &[T], range: TimeRange, today: NaiveDate) -> Vec<T>
where
    T: AnalyticsRecord + Clone,
{
    match range.start_date(today) {
        None => records.to_vec(),
        Some(start) => records
            .iter()
            .filter(|r| r.record_date().is_some_and(|date| date >= start))
            .cloned()
            .collect(),
    }
}
