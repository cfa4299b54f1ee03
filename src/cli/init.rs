// ============================================================================
// Timestables - 初始化命令处理
// ============================================================================
//
// 文件: src/cli/init.rs
// 职责: 处理配置文件初始化命令
// 边界:
//   - ✅ 初始化命令参数解析
//   - ✅ 默认配置文件生成
//   - ✅ 配置文件存在性检查
//   - ❌ 不应包含配置文件格式定义
//   - ❌ 不应包含配置验证逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::models::config::Config;
use crate::utils::logger::Logger;

/// 初始化命令参数
#[derive(Debug, Args)]
pub struct InitArgs {
    /// 强制覆盖已存在的配置文件
    #[arg(short, long)]
    pub force: bool,
}

/// 处理初始化命令
pub fn handle_init(args: InitArgs, config_path: &Path) -> Result<()> {
    Logger::info("Initializing timestables configuration...");

    // 检查配置文件是否已存在
    if config_path.exists() && !args.force {
        Logger::warn(format!("Config file already exists: {}", config_path.display()));
        Logger::info("Use --force to overwrite existing config file");
        return Ok(());
    }

    // 生成默认配置文件
    match Config::create_default_config_file(config_path) {
        Ok(_) => {
            Logger::success(format!("Config file created: {}", config_path.display()));
            Logger::info("Add locale files to the configured locale directories to ship more languages");
        }
        Err(e) => {
            Logger::error(format!("Failed to create config file: {e}"));
            return Err(e);
        }
    }

    Ok(())
}
