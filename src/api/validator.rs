// ==========================================
// 热处理分析引擎 - 录入校验器
// ==========================================
// 职责: 新增记录前的必填项与格式校验
// 策略: 收集全部违规后一次性返回，不在首个违规处中断
// ==========================================

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::domain::{HeatTreatmentLog, MaintenanceLog};
use chrono::NaiveDate;

/// 热处理记录必填字段（字段名, 取值）
fn heat_treatment_required(log: &HeatTreatmentLog) -> [(&'static str, &str); 7] {
    [
        ("date", log.date.as_str()),
        ("jobNo", log.job_no.as_str()),
        ("material", log.material.as_str()),
        ("quantity", log.quantity.as_str()),
        ("weightPerForging", log.weight_per_forging.as_str()),
        ("processStartTime", log.process_start_time.as_str()),
        ("temperature", log.temperature.as_str()),
    ]
}

fn check_required(fields: &[(&'static str, &str)], violations: &mut Vec<ValidationViolation>) {
    for (field, value) in fields {
        if value.trim().is_empty() {
            violations.push(ValidationViolation::new(field, "必填项不能为空"));
        }
    }
}

fn check_date(value: &str, violations: &mut Vec<ValidationViolation>) {
    if !value.trim().is_empty() && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        violations.push(ValidationViolation::new(
            "date",
            format!("日期格式应为 YYYY-MM-DD，实际 {}", value),
        ));
    }
}

fn into_result(kind: &str, violations: Vec<ValidationViolation>) -> ApiResult<()> {
    if violations.is_empty() {
        return Ok(());
    }
    tracing::warn!(kind, count = violations.len(), "记录校验未通过");
    Err(ApiError::RecordValidationError {
        reason: format!("{}存在{}处字段错误", kind, violations.len()),
        violations,
    })
}

/// 校验热处理记录
pub fn validate_heat_treatment_log(log: &HeatTreatmentLog) -> ApiResult<()> {
    let mut violations = Vec::new();
    check_required(&heat_treatment_required(log), &mut violations);
    check_date(&log.date, &mut violations);
    into_result("热处理记录", violations)
}

/// 校验故障记录
pub fn validate_maintenance_log(log: &MaintenanceLog) -> ApiResult<()> {
    let mut violations = Vec::new();
    check_required(
        &[("date", log.date.as_str()), ("machine", log.machine.as_str())],
        &mut violations,
    );
    check_date(&log.date, &mut violations);
    into_result("故障记录", violations)
}
