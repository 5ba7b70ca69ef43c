// ==========================================
// 热处理分析引擎 - 记录仓储（Record Store Adapter）
// ==========================================
// 职责: 从键值存储读取两类记录集合，追加/删除单条记录
// 存储: heatTreatmentLogs / maintenanceLogs 键下的 JSON 数组
// 约定: 键不存在 = 空集合；无法解码的单条记录告警后丢弃
//       写回时保留其他记录的原始 JSON（含未知字段与字段顺序）
// ==========================================

use crate::config::StorageKeys;
use crate::domain::{HeatTreatmentLog, MaintenanceLog};
use crate::engine::LogSnapshot;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::kv_store::KeyValueStore;
use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

pub struct LogRepository {
    store: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl LogRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    // ==========================================
    // 读取
    // ==========================================

    /// 读取原始 JSON 数组
    pub fn load_raw(&self, key: &str) -> RepositoryResult<Vec<Value>> {
        let Some(text) = self.store.get(key)? else {
            return Ok(Vec::new());
        };

        let value: Value =
            serde_json::from_str(&text).map_err(|e| RepositoryError::MalformedCollection {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        match value {
            Value::Array(items) => Ok(items),
            Value::Null => Ok(Vec::new()),
            other => Err(RepositoryError::MalformedCollection {
                key: key.to_string(),
                message: format!("期望数组，实际为 {}", json_type_name(&other)),
            }),
        }
    }

    fn load_typed<T: DeserializeOwned>(&self, key: &str) -> RepositoryResult<Vec<T>> {
        let items = self.load_raw(key)?;
        let total = items.len();

        let records: Vec<T> = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(key, index, error = %e, "记录无法解码，已忽略");
                    None
                }
            })
            .collect();

        debug!(key, total, loaded = records.len(), "读取记录集合");
        Ok(records)
    }

    pub fn load_heat_treatment_logs(&self) -> RepositoryResult<Vec<HeatTreatmentLog>> {
        self.load_typed(&self.keys.heat_treatment_key)
    }

    pub fn load_maintenance_logs(&self) -> RepositoryResult<Vec<MaintenanceLog>> {
        self.load_typed(&self.keys.maintenance_key)
    }

    pub fn load_raw_heat_treatment_logs(&self) -> RepositoryResult<Vec<Value>> {
        self.load_raw(&self.keys.heat_treatment_key)
    }

    pub fn load_raw_maintenance_logs(&self) -> RepositoryResult<Vec<Value>> {
        self.load_raw(&self.keys.maintenance_key)
    }

    /// 一次性读取两类集合，作为引擎输入快照
    pub fn load_snapshot(&self) -> RepositoryResult<LogSnapshot> {
        Ok(LogSnapshot {
            heat_treatment_logs: self.load_heat_treatment_logs()?,
            maintenance_logs: self.load_maintenance_logs()?,
        })
    }

    // ==========================================
    // 写入
    // ==========================================

    /// 追加热处理记录（补齐 id 与 createdAt）
    pub fn append_heat_treatment_log(
        &self,
        mut log: HeatTreatmentLog,
    ) -> RepositoryResult<HeatTreatmentLog> {
        if log.id.is_empty() {
            log.id = Uuid::new_v4().to_string();
        }
        log.created_at = now_iso();
        self.append_raw(&self.keys.heat_treatment_key, serde_json::to_value(&log)?)?;
        Ok(log)
    }

    /// 追加故障记录（补齐 id 与 createdAt）
    pub fn append_maintenance_log(&self, mut log: MaintenanceLog) -> RepositoryResult<MaintenanceLog> {
        if log.id.is_empty() {
            log.id = Uuid::new_v4().to_string();
        }
        log.created_at = now_iso();
        self.append_raw(&self.keys.maintenance_key, serde_json::to_value(&log)?)?;
        Ok(log)
    }

    pub fn delete_heat_treatment_log(&self, id: &str) -> RepositoryResult<bool> {
        self.delete_raw(&self.keys.heat_treatment_key, id)
    }

    pub fn delete_maintenance_log(&self, id: &str) -> RepositoryResult<bool> {
        self.delete_raw(&self.keys.maintenance_key, id)
    }

    fn append_raw(&self, key: &str, item: Value) -> RepositoryResult<()> {
        let mut items = self.load_raw(key)?;
        items.push(item);
        self.store_raw(key, &items)
    }

    fn delete_raw(&self, key: &str, id: &str) -> RepositoryResult<bool> {
        let items = self.load_raw(key)?;
        let before = items.len();
        let kept: Vec<Value> = items
            .into_iter()
            .filter(|item| item.get("id").and_then(Value::as_str) != Some(id))
            .collect();

        if kept.len() == before {
            return Ok(false);
        }
        self.store_raw(key, &kept)?;
        debug!(key, id, removed = before - kept.len(), "删除记录");
        Ok(true)
    }

    fn store_raw(&self, key: &str, items: &[Value]) -> RepositoryResult<()> {
        let text = serde_json::to_string(items)?;
        self.store.set(key, &text)
    }
}

/// ISO-8601 UTC 时间戳，毫秒精度（如 2024-03-15T10:00:00.000Z）
fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
