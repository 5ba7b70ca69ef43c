// ==========================================
// 热处理分析引擎 - 核心库
// ==========================================
// 技术栈: Rust + SQLite（键值存储）
// 系统定位: 热处理过程记录与设备故障记录的过滤聚合引擎
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 记录与指标类型
pub mod domain;

// 数据仓储层 - 键值存储访问
pub mod repository;

// 引擎层 - 过滤与聚合规则
pub mod engine;

// 导出层 - CSV
pub mod export;

// 配置层 - 存储键与默认筛选
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{DimensionField, EquipmentRole, Granularity, Selector, SortDirection, TimeRange};

// 领域实体
pub use domain::{AnalyticsReport, DimensionOptions, HeatTreatmentLog, MaintenanceLog};

// 引擎
pub use engine::{AnalyticsEngine, AnalyticsFilter, LogQuery, LogSnapshot};

// 仓储
pub use repository::{KeyValueStore, LogRepository, MemoryKvStore, SqliteKvStore};

// API
pub use api::{AnalyticsApi, AnalyticsRequest, ApiError};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "热处理分析引擎";
