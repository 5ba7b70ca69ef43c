// ==========================================
// 热处理分析引擎 - 领域类型定义
// ==========================================
// 职责: 筛选维度、时间范围、时间粒度、设备角色等枚举
// 约定: 字符串形式与前端选择器取值一致（小写）
// ==========================================

use chrono::{Datelike, Days, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 选择器中表示“不过滤”的取值
pub const SELECTOR_ALL: &str = "all";

// ==========================================
// 时间范围 (Time Range)
// ==========================================
// 以“今天”为锚点向前回溯；月/年按日历计算，不按固定天数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    All,     // 全部
    Week,    // 最近 7 天
    Month,   // 最近 1 个月
    Quarter, // 最近 3 个月
    Year,    // 最近 1 年
}

impl TimeRange {
    /// 计算窗口起始日期（含）
    ///
    /// # 返回
    /// - None: `All`，不做时间过滤
    /// - Some(date): 记录日期 >= date 才保留
    ///
    /// 月份回溯到不存在的日期时，溢出天数顺延到下月（3-31 回溯 1 个月为 3-02）
    pub fn start_date(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            TimeRange::All => None,
            TimeRange::Week => Some(today - Duration::days(7)),
            TimeRange::Month => Some(sub_months_rolling(today, 1)),
            TimeRange::Quarter => Some(sub_months_rolling(today, 3)),
            TimeRange::Year => Some(sub_months_rolling(today, 12)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::All => "all",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Quarter => "quarter",
            TimeRange::Year => "year",
        }
    }
}

fn sub_months_rolling(date: NaiveDate, months: u32) -> NaiveDate {
    // 先回溯到目标月 1 日，再加回 (日 - 1) 天；目标月不存在该日时自然滚入下月
    date.with_day(1)
        .and_then(|first| first.checked_sub_months(Months::new(months)))
        .and_then(|first| first.checked_add_days(Days::new(u64::from(date.day() - 1))))
        .unwrap_or(NaiveDate::MIN)
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TimeRange::All),
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "quarter" => Ok(TimeRange::Quarter),
            "year" => Ok(TimeRange::Year),
            other => Err(format!("未知时间范围: {}", other)),
        }
    }
}

// ==========================================
// 时间粒度 (Granularity)
// ==========================================
// 分桶键: day=YYYY-MM-DD, month=YYYY-MM, year=YYYY
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Month,
    Year,
}

impl Granularity {
    /// 宽松解析：无法识别的取值回退为 `Day`
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "month" => Granularity::Month,
            "year" => Granularity::Year,
            _ => Granularity::Day,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Month => "month",
            Granularity::Year => "year",
        }
    }
}

impl Default for Granularity {
    fn default() -> Self {
        Granularity::Day
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 设备角色 (Equipment Role)
// ==========================================
// 同一台设备在过程记录中叫 furnace，在故障记录中叫 machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentRole {
    Furnace, // 热处理过程记录
    Machine, // 故障维修记录
}

impl fmt::Display for EquipmentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquipmentRole::Furnace => write!(f, "furnace"),
            EquipmentRole::Machine => write!(f, "machine"),
        }
    }
}

// ==========================================
// 筛选维度 (Dimension Field)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionField {
    Equipment,
    Process,
}

impl fmt::Display for DimensionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionField::Equipment => write!(f, "equipment"),
            DimensionField::Process => write!(f, "process"),
        }
    }
}

// ==========================================
// 维度选择器 (Selector)
// ==========================================
// "all" 表示不过滤；其余取值按原样精确匹配（区分大小写，不去空格）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    All,
    Exact(String),
}

impl Selector {
    pub fn parse(value: &str) -> Self {
        if value == SELECTOR_ALL {
            Selector::All
        } else {
            Selector::Exact(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    /// 判断字段值是否命中选择器
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Selector::All => true,
            Selector::Exact(expected) => value == Some(expected.as_str()),
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Selector::All
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => write!(f, "{}", SELECTOR_ALL),
            Selector::Exact(v) => write!(f, "{}", v),
        }
    }
}

// ==========================================
// 排序方向 (Sort Direction)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("未知排序方向: {}", other)),
        }
    }
}
