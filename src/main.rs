// ============================================================================
// Timestables - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 启动 CLI 并统一处理错误退出
//
// ============================================================================

use timestables::cli::run_cli;
use timestables::utils::logger::Logger;

#[tokio::main]
async fn main() {
    if let Err(e) = run_cli().await {
        Logger::error(format!("{e:#}"));
        std::process::exit(1);
    }
}
