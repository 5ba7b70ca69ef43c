// ==========================================
// 热处理分析引擎 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 封装键值存储，向引擎提供记录快照
// ==========================================

pub mod error;
pub mod kv_store;
pub mod log_repo;

// 重导出核心仓储
pub use error::{RepositoryError, RepositoryResult};
pub use kv_store::{KeyValueStore, MemoryKvStore, SqliteKvStore};
pub use log_repo::LogRepository;
