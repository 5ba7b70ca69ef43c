// ==========================================
// 热处理分析引擎 - 宽松字段解析
// ==========================================
// 职责: 人工录入文本字段的容错解析（数量/单重/时间）
// 策略: 解析失败一律降级为默认值，不抛错
// ==========================================

use chrono::NaiveTime;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::sync::LazyLock;

static LEADING_INT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").expect("invalid regex"));

static LEADING_DECIMAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").expect("invalid regex")
});

/// 解析文本开头的整数（"10 pcs" -> 10, "2.5" -> 2）
///
/// 负数与无法解析的文本返回 None
pub fn parse_leading_int(text: &str) -> Option<u64> {
    let caps = LEADING_INT_REGEX.captures(text)?;
    let value: i64 = caps.get(1)?.as_str().parse().ok()?;
    u64::try_from(value).ok()
}

/// 解析文本开头的小数（"2.5kg" -> 2.5, "1e3" -> 1000）
///
/// 负数、非有限值与无法解析的文本返回 None
pub fn parse_leading_decimal(text: &str) -> Option<f64> {
    let caps = LEADING_DECIMAL_REGEX.captures(text)?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// 解析 HH:MM（兼容 HH:MM:SS）
pub fn parse_clock_time(text: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
        .ok()
}

/// 非空文本视为“存在”（不去空格，与录入端判空口径一致）
pub fn non_empty(text: &str) -> Option<&str> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// 反序列化宽松字符串：接受字符串/数字/布尔，null 与缺失视为空串
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    })
}

/// 反序列化宽松字符串列表：单个值视为一个元素，非数组非字符串忽略
pub fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) if !s.is_empty() => vec![s],
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("10"), Some(10));
        assert_eq!(parse_leading_int("  10 pcs"), Some(10));
        assert_eq!(parse_leading_int("2.5"), Some(2));
        assert_eq!(parse_leading_int("+4"), Some(4));
        assert_eq!(parse_leading_int("-3"), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_only_ascii_digits_are_numeric() {
        assert_eq!(parse_leading_int("٣"), None);
        assert_eq!(parse_leading_int("１２"), None);
        assert_eq!(parse_leading_decimal("٣.5"), None);
        assert_eq!(parse_leading_decimal("7٣"), Some(7.0));
    }

    #[test]
    fn test_parse_leading_decimal() {
        assert_eq!(parse_leading_decimal("2.5"), Some(2.5));
        assert_eq!(parse_leading_decimal("2.5kg"), Some(2.5));
        assert_eq!(parse_leading_decimal(".5"), Some(0.5));
        assert_eq!(parse_leading_decimal("5."), Some(5.0));
        assert_eq!(parse_leading_decimal("1e3"), Some(1000.0));
        assert_eq!(parse_leading_decimal("-1.5"), None);
        assert_eq!(parse_leading_decimal("kg"), None);
    }

    #[test]
    fn test_parse_clock_time() {
        assert_eq!(
            parse_clock_time("22:00"),
            NaiveTime::from_hms_opt(22, 0, 0)
        );
        assert_eq!(
            parse_clock_time("07:30:15"),
            NaiveTime::from_hms_opt(7, 30, 15)
        );
        assert_eq!(parse_clock_time("25:00"), None);
        assert_eq!(parse_clock_time(""), None);
    }

    #[test]
    fn test_lenient_string_accepts_scalars() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(default, deserialize_with = "lenient_string")]
            a: String,
            #[serde(default, deserialize_with = "lenient_string")]
            b: String,
            #[serde(default, deserialize_with = "lenient_string")]
            c: String,
            #[serde(default, deserialize_with = "lenient_string")]
            missing: String,
        }

        let row: Row = serde_json::from_str(r#"{"a": 12, "b": null, "c": "x"}"#).unwrap();
        assert_eq!(row.a, "12");
        assert_eq!(row.b, "");
        assert_eq!(row.c, "x");
        assert_eq!(row.missing, "");
    }
}
