// ==========================================
// 热处理分析引擎 - 时间分桶
// ==========================================
// 分桶键: day=YYYY-MM-DD / month=YYYY-MM / year=YYYY
// 说明: 三种格式均为定宽、高位在前，字典序即时间序
// ==========================================

use crate::domain::Granularity;
use chrono::{Datelike, NaiveDate};

/// 计算日期在指定粒度下的分桶键
pub fn bucket_key(date: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Day => date.format("%Y-%m-%d").to_string(),
        Granularity::Month => format!("{:04}-{:02}", date.year(), date.month()),
        Granularity::Year => format!("{:04}", date.year()),
    }
}
