// ==========================================
// 热处理分析引擎 - 配置层
// ==========================================
// 职责: 存储键名与默认筛选的配置管理
// 存储: config_kv 表
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{config_keys, AnalyticsDefaults, ConfigManager, StorageKeys};
