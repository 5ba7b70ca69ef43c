// ==========================================
// 热处理分析引擎 - API 层
// ==========================================
// 职责: 面向界面层的业务接口，字符串入参校验与错误转换
// ==========================================

pub mod analytics_api;
pub mod error;
pub mod validator;

pub use analytics_api::{AnalyticsApi, AnalyticsRequest, CsvExport};
pub use error::{ApiError, ApiResult, ValidationViolation};
