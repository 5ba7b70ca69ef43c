// ==========================================
// 热处理分析引擎 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写
// 存储: config_kv 表 (key-value)，缺省时使用内置默认值
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::{Granularity, TimeRange};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    pub const HEAT_TREATMENT_KEY: &str = "storage/heat_treatment_key";
    pub const MAINTENANCE_KEY: &str = "storage/maintenance_key";
    pub const DEFAULT_TIME_RANGE: &str = "analytics/default_time_range";
    pub const DEFAULT_GRANULARITY: &str = "analytics/default_granularity";
}

pub const DEFAULT_HEAT_TREATMENT_KEY: &str = "heatTreatmentLogs";
pub const DEFAULT_MAINTENANCE_KEY: &str = "maintenanceLogs";

/// 记录集合在键值存储中的键名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageKeys {
    pub heat_treatment_key: String,
    pub maintenance_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            heat_treatment_key: DEFAULT_HEAT_TREATMENT_KEY.to_string(),
            maintenance_key: DEFAULT_MAINTENANCE_KEY.to_string(),
        }
    }
}

/// 分析页默认筛选
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsDefaults {
    pub time_range: TimeRange,
    pub granularity: Granularity,
}

impl Default for AnalyticsDefaults {
    fn default() -> Self {
        Self {
            time_range: TimeRange::All,
            granularity: Granularity::Day,
        }
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Self::from_connection(Arc::new(Mutex::new(conn)))
    }

    /// 从已有连接创建 ConfigManager
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        let manager = Self { conn };
        manager.ensure_table()?;
        Ok(manager)
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn ensure_table(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS config_kv (
              key TEXT PRIMARY KEY,
              value TEXT NOT NULL,
              updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );
            "#,
        )?;
        Ok(())
    }

    /// 读取配置值
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_config_value(&self, key: &str) -> RepositoryResult<Option<String>> {
        let conn = self.get_conn()?;
        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// 读取配置值，带默认值（空白值视为未配置）
    fn get_config_or_default(&self, key: &str, default: &str) -> RepositoryResult<String> {
        Ok(self
            .get_config_value(key)?
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string()))
    }

    /// 写入配置值（Upsert）
    pub fn set_config_value(&self, key: &str, value: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO config_kv (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value],
        )?;
        tracing::info!(key, value, "配置已更新");
        Ok(())
    }

    /// 获取全部配置（按键排序）
    pub fn list_configs(&self) -> RepositoryResult<BTreeMap<String, String>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare("SELECT key, value FROM config_kv ORDER BY key")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut configs = BTreeMap::new();
        for row in rows {
            let (key, value) = row?;
            configs.insert(key, value);
        }
        Ok(configs)
    }

    // ==========================================
    // 类型化读取
    // ==========================================

    pub fn storage_keys(&self) -> RepositoryResult<StorageKeys> {
        Ok(StorageKeys {
            heat_treatment_key: self
                .get_config_or_default(config_keys::HEAT_TREATMENT_KEY, DEFAULT_HEAT_TREATMENT_KEY)?,
            maintenance_key: self
                .get_config_or_default(config_keys::MAINTENANCE_KEY, DEFAULT_MAINTENANCE_KEY)?,
        })
    }

    /// 默认筛选；配置值非法时告警并回退默认
    pub fn analytics_defaults(&self) -> RepositoryResult<AnalyticsDefaults> {
        let fallback = AnalyticsDefaults::default();

        let raw_range = self.get_config_or_default(
            config_keys::DEFAULT_TIME_RANGE,
            fallback.time_range.as_str(),
        )?;
        let time_range = raw_range.parse::<TimeRange>().unwrap_or_else(|e| {
            tracing::warn!("默认时间范围配置无效: {}, 使用 {}", e, fallback.time_range);
            fallback.time_range
        });

        let raw_granularity = self.get_config_or_default(
            config_keys::DEFAULT_GRANULARITY,
            fallback.granularity.as_str(),
        )?;

        Ok(AnalyticsDefaults {
            time_range,
            granularity: Granularity::parse_lenient(&raw_granularity),
        })
    }
}
