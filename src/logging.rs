// ==========================================
// 热处理分析引擎 - 日志系统初始化
// ==========================================
// 输出约定: stdout 只承载报告 JSON（可直接重定向/管道给下游工具），
//           所有日志一律写 stderr
// 过滤: RUST_LOG，缺省为 info
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 未设置 RUST_LOG 时的过滤级别
pub const DEFAULT_LOG_FILTER: &str = "info";

/// 读取 RUST_LOG；未设置或无法解析时使用 `DEFAULT_LOG_FILTER`
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// 初始化报告程序的日志
///
/// `heat-treatment-analytics > report.json` 时文件里只有报告，
/// 跳过的记录（debug）与无法解码的存储项（warn）出现在终端。
///
/// 例如 `RUST_LOG=heat_treatment_analytics::engine=debug` 可查看
/// 每条被聚合器跳过的记录。
///
/// ```no_run
/// heat_treatment_analytics::logging::init();
/// ```
pub fn init() {
    fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// 测试用日志：debug 级别，输出交给测试框架捕获
///
/// 多个测试重复调用时静默忽略
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_is_repeatable() {
        init_test();
        init_test();
        tracing::debug!("日志已初始化");
    }
}
