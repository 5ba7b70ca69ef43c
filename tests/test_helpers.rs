// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 临时数据库、API 装配、原始 JSON 预置
// ==========================================

#![allow(dead_code)]

use heat_treatment_analytics::api::AnalyticsApi;
use heat_treatment_analytics::config::StorageKeys;
use heat_treatment_analytics::repository::{KeyValueStore, LogRepository, MemoryKvStore, SqliteKvStore};
use serde_json::Value;
use std::error::Error;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// 创建临时测试数据库
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file
        .path()
        .to_str()
        .ok_or("临时文件路径不是合法 UTF-8")?
        .to_string();
    Ok((temp_file, db_path))
}

/// 以临时数据库打开 API
pub fn open_test_api() -> Result<(NamedTempFile, String, AnalyticsApi), Box<dyn Error>> {
    let (temp_file, db_path) = create_test_db()?;
    let api = AnalyticsApi::open(&db_path)?;
    Ok((temp_file, db_path, api))
}

/// 内存仓储（默认键名）
pub fn memory_repository() -> (Arc<MemoryKvStore>, LogRepository) {
    let store = Arc::new(MemoryKvStore::new());
    let repo = LogRepository::new(store.clone(), StorageKeys::default());
    (store, repo)
}

/// 直接向数据库写入原始 JSON 集合（模拟前端写入）
pub fn seed_raw(db_path: &str, key: &str, value: &Value) -> Result<(), Box<dyn Error>> {
    let store = SqliteKvStore::new(db_path)?;
    store.set(key, &serde_json::to_string(value)?)?;
    Ok(())
}
