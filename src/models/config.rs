// ============================================================================
// Timestables - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值
//   - ✅ 配置文件读写操作
//   - ✅ 运行时参数合并
//   - ❌ 不应包含语言表加载逻辑
//   - ❌ 不应包含 CLI 参数解析
//
// ============================================================================

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::utils::constants::{DEFAULT_LOCALE, DEFAULT_LOCALE_DIR};

/// 全局配置（启动时合并完运行时参数后冻结）
static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

/// 配置文件结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
}

/// 国际化配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    /// 额外语言文件目录
    #[serde(default = "Config::default_locale_dirs")]
    pub locale_dirs: Vec<PathBuf>,
}

/// 输出配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否详细输出
    #[serde(default = "Config::default_verbose")]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub locale: Option<String>,
    /// 追加在配置目录之后
    pub extra_locale_dirs: Vec<PathBuf>,
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    /// 获取默认语言
    fn default_locale() -> String {
        DEFAULT_LOCALE.to_string()
    }

    /// 获取默认语言文件目录
    fn default_locale_dirs() -> Vec<PathBuf> {
        vec![PathBuf::from(DEFAULT_LOCALE_DIR)]
    }

    /// 获取默认是否详细输出
    fn default_verbose() -> bool {
        false
    }

    /// 获取默认是否彩色输出
    fn default_colored() -> bool {
        true
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    pub fn initialize(config_path: &Path, args: RuntimeArgs) -> anyhow::Result<&'static Config> {
        let mut config = Self::load_config(config_path)?;
        config.merge_runtime_args(args);
        GLOBAL_CONFIG
            .set(config)
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Self::global()
    }

    /// 获取全局配置
    pub fn global() -> anyhow::Result<&'static Config> {
        GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))
    }

    /// 加载配置文件，不存在时使用默认配置
    ///
    /// 相对路径的语言目录以配置文件所在目录为基准。
    pub fn load_config(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        if let Some(base) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.i18n.locale_dirs = config
                .i18n
                .locale_dirs
                .into_iter()
                .map(|dir| if dir.is_relative() { base.join(dir) } else { dir })
                .collect();
        }
        Ok(config)
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(locale) = args.locale {
            self.i18n.locale = locale;
        }
        self.i18n.locale_dirs.extend(args.extra_locale_dirs);
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;
        Ok(())
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &Path) -> anyhow::Result<()> {
        Self::default().save_to_file(config_path)
    }

    /// 获取界面语言（带默认值）
    pub fn get_locale() -> String {
        match Self::global() {
            Ok(config) => config.i18n.locale.clone(),
            _ => Self::default_locale(),
        }
    }

    /// 获取详细输出设置（带默认值）
    pub fn get_verbose() -> bool {
        match Self::global() {
            Ok(config) => config.output.verbose,
            _ => Self::default_verbose(),
        }
    }

    /// 获取是否彩色输出（带默认值）
    pub fn get_colored() -> bool {
        match Self::global() {
            Ok(config) => config.output.colored,
            _ => Self::default_colored(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            i18n: I18nConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locale: Config::default_locale(),
            locale_dirs: Config::default_locale_dirs(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: Config::default_verbose(),
            colored: Config::default_colored(),
        }
    }
}
