// ==========================================
// 热处理分析引擎 - 导出层
// ==========================================
// 职责: 原始记录导出（CSV）
// ==========================================

pub mod csv_export;
pub mod error;

pub use csv_export::{export_file_name, export_records_csv};
pub use error::{ExportError, ExportResult};
