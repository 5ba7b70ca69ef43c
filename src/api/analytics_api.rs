// ==========================================
// 热处理分析引擎 - 分析 API
// ==========================================
// 职责: 面向界面层的入口；字符串请求 → 类型化筛选 → 引擎 → 指标表
// 架构: API 层 → Engine（纯函数） + Repository（键值存储）
// 说明: 每次调用都从存储重新读取全量快照并完整重算
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::{validate_heat_treatment_log, validate_maintenance_log};
use crate::config::{AnalyticsDefaults, ConfigManager};
use crate::db::open_sqlite_connection;
use crate::domain::{
    AnalyticsReport, DimensionOptions, Granularity, HeatTreatmentLog, MaintenanceLog, Selector,
    TimeRange, SELECTOR_ALL,
};
use crate::engine::{dimension_options, query_logs, AnalyticsEngine, AnalyticsFilter, LogListing, LogQuery};
use crate::export::{export_file_name, export_records_csv};
use crate::repository::{LogRepository, SqliteKvStore};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

const HEAT_TREATMENT_EXPORT_PREFIX: &str = "heat_treatment_logs";
const MAINTENANCE_EXPORT_PREFIX: &str = "maintenance_logs";

/// 分析请求（取值与前端选择器一致）
///
/// 缺省字段使用配置中的默认筛选
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsRequest {
    #[serde(default)]
    pub time_range: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub process: Option<String>,
    #[serde(default)]
    pub granularity: Option<String>,
}

/// CSV 导出结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvExport {
    pub file_name: String,
    pub content: String,
}

// ==========================================
// AnalyticsApi - 分析 API
// ==========================================
pub struct AnalyticsApi {
    repo: Arc<LogRepository>,
    defaults: AnalyticsDefaults,
    engine: AnalyticsEngine,
}

impl AnalyticsApi {
    pub fn new(repo: Arc<LogRepository>, defaults: AnalyticsDefaults) -> Self {
        Self {
            repo,
            defaults,
            engine: AnalyticsEngine::new(),
        }
    }

    /// 打开数据库并装配（存储键与默认筛选读自 config_kv）
    pub fn open(db_path: &str) -> ApiResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| ApiError::DatabaseConnectionError(e.to_string()))?;
        let conn = Arc::new(Mutex::new(conn));

        let config = ConfigManager::from_connection(conn.clone())?;
        let keys = config.storage_keys()?;
        let defaults = config.analytics_defaults()?;
        let store = SqliteKvStore::from_connection(conn)?;

        tracing::info!(
            db_path,
            heat_treatment_key = %keys.heat_treatment_key,
            maintenance_key = %keys.maintenance_key,
            "分析 API 初始化完成"
        );

        Ok(Self::new(
            Arc::new(LogRepository::new(Arc::new(store), keys)),
            defaults,
        ))
    }

    pub fn repository(&self) -> &LogRepository {
        &self.repo
    }

    // ==========================================
    // 分析查询
    // ==========================================

    /// 解析请求为筛选条件
    ///
    /// 时间范围非法时报错；时间粒度非法时回退为 day
    pub fn resolve_filter(&self, request: &AnalyticsRequest) -> ApiResult<AnalyticsFilter> {
        let time_range = match request.time_range.as_deref() {
            None => self.defaults.time_range,
            Some(raw) => raw.parse::<TimeRange>().map_err(ApiError::InvalidInput)?,
        };
        let granularity = request
            .granularity
            .as_deref()
            .map(Granularity::parse_lenient)
            .unwrap_or(self.defaults.granularity);

        Ok(AnalyticsFilter {
            time_range,
            equipment: Selector::parse(request.equipment.as_deref().unwrap_or(SELECTOR_ALL)),
            process: Selector::parse(request.process.as_deref().unwrap_or(SELECTOR_ALL)),
            granularity,
        })
    }

    /// 生成分析报告
    pub fn get_analytics_report(
        &self,
        request: &AnalyticsRequest,
        today: NaiveDate,
    ) -> ApiResult<AnalyticsReport> {
        let filter = self.resolve_filter(request)?;
        let snapshot = self.repo.load_snapshot()?;
        Ok(self.engine.compute(&snapshot, &filter, today))
    }

    /// 以本地当天为锚点生成分析报告
    pub fn get_analytics_report_today(&self, request: &AnalyticsRequest) -> ApiResult<AnalyticsReport> {
        self.get_analytics_report(request, chrono::Local::now().date_naive())
    }

    /// 筛选项（未过滤的全量记录）
    pub fn get_dimension_options(&self) -> ApiResult<DimensionOptions> {
        let snapshot = self.repo.load_snapshot()?;
        Ok(dimension_options(
            &snapshot.heat_treatment_logs,
            &snapshot.maintenance_logs,
        ))
    }

    // ==========================================
    // 记录列表
    // ==========================================

    pub fn list_heat_treatment_logs(&self, query: &LogQuery) -> ApiResult<LogListing> {
        if HeatTreatmentLog::default().field_text(&query.sort_field).is_none() {
            return Err(ApiError::InvalidInput(format!(
                "未知排序字段: {}",
                query.sort_field
            )));
        }
        let logs = self.repo.load_heat_treatment_logs()?;
        Ok(query_logs(&logs, query))
    }

    // ==========================================
    // 记录维护
    // ==========================================

    pub fn record_heat_treatment_log(&self, log: HeatTreatmentLog) -> ApiResult<HeatTreatmentLog> {
        validate_heat_treatment_log(&log)?;
        let saved = self.repo.append_heat_treatment_log(log)?;
        tracing::info!(id = %saved.id, furnace = %saved.furnace, "热处理记录已保存");
        Ok(saved)
    }

    pub fn record_maintenance_log(&self, log: MaintenanceLog) -> ApiResult<MaintenanceLog> {
        validate_maintenance_log(&log)?;
        let saved = self.repo.append_maintenance_log(log)?;
        tracing::info!(id = %saved.id, machine = %saved.machine, "故障记录已保存");
        Ok(saved)
    }

    pub fn delete_heat_treatment_log(&self, id: &str) -> ApiResult<()> {
        if self.repo.delete_heat_treatment_log(id)? {
            Ok(())
        } else {
            Err(ApiError::NotFound(format!("热处理记录(id={})不存在", id)))
        }
    }

    pub fn delete_maintenance_log(&self, id: &str) -> ApiResult<()> {
        if self.repo.delete_maintenance_log(id)? {
            Ok(())
        } else {
            Err(ApiError::NotFound(format!("故障记录(id={})不存在", id)))
        }
    }

    // ==========================================
    // 导出
    // ==========================================

    pub fn export_heat_treatment_csv(&self, today: NaiveDate) -> ApiResult<CsvExport> {
        let records = self.repo.load_raw_heat_treatment_logs()?;
        Ok(CsvExport {
            file_name: export_file_name(HEAT_TREATMENT_EXPORT_PREFIX, today),
            content: export_records_csv(&records)?,
        })
    }

    pub fn export_maintenance_csv(&self, today: NaiveDate) -> ApiResult<CsvExport> {
        let records = self.repo.load_raw_maintenance_logs()?;
        Ok(CsvExport {
            file_name: export_file_name(MAINTENANCE_EXPORT_PREFIX, today),
            content: export_records_csv(&records)?,
        })
    }
}
