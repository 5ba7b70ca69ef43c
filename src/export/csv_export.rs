// ==========================================
// 热处理分析引擎 - CSV 导出
// ==========================================
// 格式（下游表格工具依赖，逐字节保持）:
// - 表头 = 第一条记录的字段名（存储顺序），不加引号
// - 每行 = 该记录自身的字段值（存储顺序），行间 '\n'，末尾无换行
// - 字符串含逗号时加引号，内部引号加倍
// - 数组/对象/null 先 JSON 序列化再加引号，内部引号加倍
// - 数字/布尔原样输出
// ==========================================

use crate::export::error::{ExportError, ExportResult};
use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde_json::{Map, Number, Value};

/// 导出文件名，如 heat_treatment_logs_2024-03-15.csv
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
}

/// 将原始记录导出为 CSV 文本
///
/// # 错误
/// - `NoRecords`: 记录为空
/// - `NotAnObject`: 某条记录不是 JSON 对象
pub fn export_records_csv(records: &[Value]) -> ExportResult<String> {
    let first = records.first().ok_or(ExportError::NoRecords)?;
    let header: Vec<String> = as_object(first, 0)?.keys().cloned().collect();

    let mut bytes = Vec::new();
    write_row(&mut bytes, &header)?;
    for (row, record) in records.iter().enumerate() {
        let fields: Vec<String> = as_object(record, row)?.values().map(format_cell).collect();
        write_row(&mut bytes, &fields)?;
    }

    let mut text =
        String::from_utf8(bytes).map_err(|e| ExportError::CsvWriteError(e.to_string()))?;
    if text.ends_with('\n') {
        text.pop();
    }

    tracing::info!(rows = records.len(), columns = header.len(), "CSV 导出完成");
    Ok(text)
}

/// 写出一行；内容为空的行只写换行
///
/// csv 写出器会把空行写成 `""`，这里直接向缓冲区写换行绕过它
fn write_row(out: &mut Vec<u8>, fields: &[String]) -> ExportResult<()> {
    if fields.len() <= 1 && fields.iter().all(String::is_empty) {
        out.push(b'\n');
        return Ok(());
    }
    // 字段已按导出规则自行转义，写出器只负责拼接
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(&mut *out);
    writer.write_record(fields)?;
    writer
        .flush()
        .map_err(|e| ExportError::CsvWriteError(e.to_string()))?;
    Ok(())
}

fn as_object(value: &Value, row: usize) -> ExportResult<&Map<String, Value>> {
    value.as_object().ok_or(ExportError::NotAnObject(row))
}

/// 单元格格式化
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) if s.contains(',') => quote(s),
        Value::String(s) => s.clone(),
        Value::Number(n) => format_number(n),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => quote(&value.to_string()),
    }
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// 数字按 JS 字符串化习惯输出（整数值的浮点不带 ".0"）
fn format_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_collection_is_error() {
        assert!(matches!(export_records_csv(&[]), Err(ExportError::NoRecords)));
    }

    #[test]
    fn test_basic_export_without_trailing_newline() {
        let records = vec![
            json!({"id": "1", "furnace": "HF1", "quantity": "10"}),
            json!({"id": "2", "furnace": "HF2", "quantity": "4"}),
        ];
        assert_eq!(
            export_records_csv(&records).unwrap(),
            "id,furnace,quantity\n1,HF1,10\n2,HF2,4"
        );
    }

    #[test]
    fn test_quoting_rules() {
        let records = vec![json!({
            "material": "EN8, forged",
            "notes": "say \"hi\", ok",
            "plain": "no \"comma\" here",
            "employees": ["A", "B"],
            "extra": null,
            "count": 3,
            "ratio": 2.5,
            "whole": 4.0,
            "flag": true
        })];
        let csv = export_records_csv(&records).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "\"EN8, forged\",\"say \"\"hi\"\", ok\",no \"comma\" here,\"[\"\"A\"\",\"\"B\"\"]\",\"null\",3,2.5,4,true"
        );
    }

    #[test]
    fn test_rows_follow_their_own_key_order() {
        let records = vec![json!({"a": "1", "b": "2"}), json!({"b": "3", "a": "4", "c": "5"})];
        assert_eq!(export_records_csv(&records).unwrap(), "a,b\n1,2\n3,4,5");
    }

    #[test]
    fn test_empty_record_writes_blank_line() {
        let records = vec![json!({"a": "1"}), json!({})];
        assert_eq!(export_records_csv(&records).unwrap(), "a\n1\n");

        let records = vec![json!({"a": "1"}), json!({"a": ""}), json!({"a": "2"})];
        assert_eq!(export_records_csv(&records).unwrap(), "a\n1\n\n2");

        // 多个空字段仍按逗号拼接
        let records = vec![json!({"a": "", "b": ""})];
        assert_eq!(export_records_csv(&records).unwrap(), "a,b\n,");
    }

    #[test]
    fn test_non_object_record_rejected() {
        let records = vec![json!({"a": "1"}), json!(7)];
        assert!(matches!(
            export_records_csv(&records),
            Err(ExportError::NotAnObject(1))
        ));
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(
            export_file_name("heat_treatment_logs", date),
            "heat_treatment_logs_2024-03-05.csv"
        );
    }
}
