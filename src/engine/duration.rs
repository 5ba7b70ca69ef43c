// ==========================================
// 热处理分析引擎 - 时长解析
// ==========================================
// 职责: 从自由文本中提取小时数；计算炉次运行时长
// 规则: "<整数> hour(s)" 与 "<整数> minute(s)" 各取第一处匹配，缺失按 0
// ==========================================

use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

static HOURS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s+hours?").expect("invalid regex"));

static MINUTES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s+minutes?").expect("invalid regex"));

const SECONDS_PER_HOUR: f64 = 3600.0;

/// 解析维修时长文本为小时数
///
/// - "2 hours, 30 minutes" -> 2.5
/// - "45 minutes" -> 0.75
/// - "" 或无关文本 -> 0
pub fn parse_duration_hours(text: &str) -> f64 {
    let hours = first_integer(&HOURS_REGEX, text);
    let minutes = first_integer(&MINUTES_REGEX, text);
    hours + minutes / 60.0
}

fn first_integer(pattern: &Regex, text: &str) -> f64 {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// 计算炉次运行时长（小时）
///
/// 结束时间早于开始时间视为跨零点，结束时间落在次日
pub fn run_duration_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    let mut seconds = (end - start).num_seconds();
    if seconds < 0 {
        seconds += 24 * 3600;
    }
    seconds as f64 / SECONDS_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_duration_hours() {
        assert_eq!(parse_duration_hours("2 hours, 30 minutes"), 2.5);
        assert_eq!(parse_duration_hours("45 minutes"), 0.75);
        assert_eq!(parse_duration_hours("3 hours"), 3.0);
        assert_eq!(parse_duration_hours("1 hour, 15 minutes"), 1.25);
        assert_eq!(parse_duration_hours(""), 0.0);
        assert_eq!(parse_duration_hours("waiting for spares"), 0.0);
    }

    #[test]
    fn test_parse_duration_first_match_only() {
        assert_eq!(parse_duration_hours("2 hours then 3 hours"), 2.0);
        assert_eq!(parse_duration_hours("10 minutes, later 20 minutes"), 10.0 / 60.0);
    }

    #[test]
    fn test_parse_duration_ignores_non_ascii_digits() {
        assert_eq!(parse_duration_hours("٣ hours, 2 hours"), 2.0);
        assert_eq!(parse_duration_hours("٤٥ minutes"), 0.0);
    }

    #[test]
    fn test_parse_duration_requires_separator() {
        assert_eq!(parse_duration_hours("2hours"), 0.0);
        assert_eq!(parse_duration_hours("2 Hours"), 0.0);
    }

    #[test]
    fn test_run_duration_same_day() {
        assert_eq!(run_duration_hours(t(8, 0), t(14, 30)), 6.5);
        assert_eq!(run_duration_hours(t(8, 0), t(8, 0)), 0.0);
    }

    #[test]
    fn test_run_duration_crosses_midnight() {
        assert_eq!(run_duration_hours(t(22, 0), t(2, 0)), 4.0);
    }
}
