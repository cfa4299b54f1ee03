// ============================================================================
// Timestables - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 启动流程（配置、日志、语言目录）
//   - ✅ 命令路由分发
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含查找和插值逻辑
//
// ============================================================================

pub mod check;
pub mod export;
pub mod init;
pub mod keys;
pub mod locales;
pub mod show;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::i18n::{self, loader, Catalog, LocaleId};
use crate::models::config::{Config, RuntimeArgs};
use crate::utils::constants::{DEFAULT_CONFIG_FILE, LOCALE_ENV};
use crate::utils::logger::{apply_color_preference, init_tracing};
use check::{handle_check, CheckArgs};
use export::{handle_export, ExportArgs};
use init::{handle_init, InitArgs};
use keys::{handle_keys, KeysArgs};
use locales::{handle_locales, LocalesArgs};
use show::{handle_show, ShowArgs};

/// Timestables - string catalogue tool for the times tables quiz
#[derive(Debug, Parser)]
#[command(name = "timestables")]
#[command(about = "Inspect, render and validate the times tables quiz strings")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface locale (e.g. en-AU)
    #[arg(short, long, global = true, env = LOCALE_ENV)]
    pub locale: Option<String>,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Additional locale directory (repeatable)
    #[arg(long = "locale-dir", global = true)]
    pub locale_dirs: Vec<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every message key with its template
    Keys(KeysArgs),
    /// Render one message
    Show(ShowArgs),
    /// List registered locales
    Locales(LocalesArgs),
    /// Validate locale files
    Check(CheckArgs),
    /// Export a locale as a locale file
    Export(ExportArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

/// 输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub async fn run_cli() -> Result<()> {
    execute(Cli::parse()).await
}

/// 执行已解析的命令
pub async fn execute(cli: Cli) -> Result<()> {
    // Build runtime args to override config
    let runtime_args = build_runtime_args(&cli);
    let setup = || -> Result<&'static Config> {
        let config = Config::initialize(&cli.config, runtime_args)?;
        init_tracing(config.output.verbose);
        apply_color_preference();
        Ok(config)
    };

    match cli.command {
        // init 不读取已有配置，损坏的配置文件也能用 --force 覆盖
        Commands::Init(args) => {
            init_tracing(cli.verbose);
            if cli.no_color {
                colored::control::set_override(false);
            }
            handle_init(args, &cli.config)
        }
        Commands::Keys(args) => handle_keys(args, load_catalog(setup()?)?),
        Commands::Show(args) => handle_show(args, load_catalog(setup()?)?),
        Commands::Locales(args) => handle_locales(args, load_catalog(setup()?)?),
        Commands::Check(args) => handle_check(args, setup()?),
        Commands::Export(args) => handle_export(args, load_catalog(setup()?)?),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        locale: cli.locale.clone(),
        extra_locale_dirs: cli.locale_dirs.clone(),
    }
}

/// 按配置构建并安装全局语言目录
pub fn load_catalog(config: &Config) -> Result<&'static Catalog> {
    let locale: LocaleId = config
        .i18n
        .locale
        .parse()
        .with_context(|| format!("Invalid locale in configuration: {}", config.i18n.locale))?;
    let catalog = loader::build_catalog(&locale, &config.i18n.locale_dirs)
        .context("Failed to load locale dictionaries")?;
    Ok(i18n::install(catalog)?)
}
