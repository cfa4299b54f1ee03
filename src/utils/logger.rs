// ============================================================================
// Timestables - 日志工具
// ============================================================================
//
// 文件: src/utils/logger.rs
// 职责: 日志输出和格式化工具
// 边界:
//   - ✅ 诊断日志初始化（tracing）
//   - ✅ 面向用户的状态输出
//   - ✅ 彩色前缀控制
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件日志写入
//
// ============================================================================

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use super::constants::APP_NAME;
use crate::models::config::Config;

/// 初始化诊断日志，`RUST_LOG` 优先，否则按 verbose 决定级别
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // 重复初始化（例如测试中）时忽略
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 同步彩色输出开关
pub fn apply_color_preference() {
    colored::control::set_override(Config::get_colored());
}

/// 简单的状态输出工具
pub struct Logger;

impl Logger {
    fn prefix() -> String {
        format!("[{APP_NAME}]")
    }

    pub fn info<S: AsRef<str>>(msg: S) {
        println!("{} {}", Self::prefix().cyan(), msg.as_ref());
    }

    pub fn warn<S: AsRef<str>>(msg: S) {
        eprintln!("{} {}", "[WARN]".yellow(), msg.as_ref());
    }

    pub fn error<S: AsRef<str>>(msg: S) {
        eprintln!("{} {}", "[ERROR]".red(), msg.as_ref());
    }

    pub fn success<S: AsRef<str>>(msg: S) {
        println!("{} {}", Self::prefix().green(), msg.as_ref());
    }
}
