// ==========================================
// 热处理分析引擎 - 导出模块错误类型
// ==========================================

use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("没有可导出的记录")]
    NoRecords,

    #[error("记录不是 JSON 对象 (行 {0})")]
    NotAnObject(usize),

    #[error("CSV 写出失败: {0}")]
    CsvWriteError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<csv::Error>
impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvWriteError(err.to_string())
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
