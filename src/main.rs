// ==========================================
// 热处理分析引擎 - 报告命令行入口
// ==========================================
// 用法:
//   heat-treatment-analytics [db_path] [time_range] [equipment] [process] [granularity]
//
// 读取数据库中的全部记录，按筛选条件重算并以 JSON 输出到 stdout
// ==========================================

use heat_treatment_analytics::api::{AnalyticsApi, AnalyticsRequest};
use heat_treatment_analytics::db::get_default_db_path;
use heat_treatment_analytics::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let db_path = args
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(get_default_db_path);

    // 缺省参数走配置中的默认筛选
    let mut next_arg = || args.next().map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
    let request = AnalyticsRequest {
        time_range: next_arg(),
        equipment: next_arg(),
        process: next_arg(),
        granularity: next_arg(),
    };

    tracing::info!("==================================================");
    tracing::info!("{} v{}", heat_treatment_analytics::APP_NAME, heat_treatment_analytics::VERSION);
    tracing::info!("使用数据库: {}", db_path);
    tracing::info!("==================================================");

    let api = AnalyticsApi::open(&db_path)?;
    let report = api.get_analytics_report_today(&request)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
