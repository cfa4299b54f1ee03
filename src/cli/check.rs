// ============================================================================
// Timestables - 语言文件检查命令
// ============================================================================
//
// 文件: src/cli/check.rs
// 职责: 校验所有配置目录中的语言文件
// 边界:
//   - ✅ 检查命令参数定义
//   - ✅ 逐文件报告输出
//   - ✅ 配置语言可用性提示
//   - ❌ 不应包含校验规则实现
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use super::OutputFormat;
use crate::i18n::loader::{self, FileReport};
use crate::i18n::{Catalog, LocaleId};
use crate::models::config::Config;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;

/// 检查命令参数
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// 检查结果汇总
#[derive(Debug, Serialize)]
pub struct CheckSummary {
    pub files: Vec<FileReport>,
    /// 不存在而被跳过的目录
    pub missing_dirs: Vec<PathBuf>,
    pub locales: Vec<LocaleId>,
    pub configured_locale: String,
    /// 配置语言能否直接使用（否则会回退到默认语言）
    pub configured_locale_available: bool,
}

impl CheckSummary {
    pub fn failures(&self) -> usize {
        self.files.iter().filter(|report| !report.is_ok()).count()
    }
}

/// 执行检查（不输出）
pub fn run_check(config: &Config) -> Result<CheckSummary> {
    let mut catalog = Catalog::builtin();
    let mut files = Vec::new();
    let mut missing_dirs = Vec::new();
    for dir in &config.i18n.locale_dirs {
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "locale directory not found, skipping");
            missing_dirs.push(dir.clone());
            continue;
        }
        files.extend(loader::inspect_dir(&mut catalog, dir)?);
    }

    let configured_locale_available = config
        .i18n
        .locale
        .parse::<LocaleId>()
        .map(|locale| catalog.contains(&locale))
        .unwrap_or(false);

    Ok(CheckSummary {
        files,
        missing_dirs,
        locales: catalog.locales().cloned().collect(),
        configured_locale: config.i18n.locale.clone(),
        configured_locale_available,
    })
}

/// 处理检查命令
pub fn handle_check(args: CheckArgs, config: &Config) -> Result<()> {
    let summary = run_check(config)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => {
            for report in &summary.files {
                match &report.error {
                    None => println!("{} {}", icons::SUCCESS, report.path.display()),
                    Some(error) => println!("{} {}: {error}", icons::ERROR, report.path.display()),
                }
            }
            if !summary.configured_locale_available {
                Logger::warn(format!(
                    "Configured locale '{}' is not available, the default locale will be used",
                    summary.configured_locale
                ));
            }
        }
    }

    let failures = summary.failures();
    if failures > 0 {
        anyhow::bail!("{failures} locale file(s) failed validation");
    }
    if args.format == OutputFormat::Text {
        Logger::success(format!(
            "{} locale(s) valid: {}",
            summary.locales.len(),
            summary
                .locales
                .iter()
                .map(LocaleId::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::export::to_locale_file;
    use crate::i18n::Dictionary;
    use crate::models::config::{I18nConfig, OutputConfig};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn config_for(locale: &str, locale_dirs: Vec<PathBuf>) -> Config {
        Config {
            i18n: I18nConfig {
                locale: locale.to_string(),
                locale_dirs,
            },
            output: OutputConfig {
                verbose: false,
                colored: false,
            },
        }
    }

    fn write_valid(dir: &Path, locale: &str) {
        fs::write(dir.join(format!("{locale}.toml")), to_locale_file(&Dictionary::en_au())).unwrap();
    }

    fn json() -> CheckArgs {
        CheckArgs {
            format: OutputFormat::Json,
        }
    }

    #[test]
    fn invalid_file_is_reported_and_fails_the_command() {
        let dir = TempDir::new().unwrap();
        write_valid(dir.path(), "en-US");
        fs::write(dir.path().join("fr.toml"), "headingMainPage = \"Tables\"\n").unwrap();
        let config = config_for("en-US", vec![dir.path().to_path_buf()]);

        let summary = run_check(&config).unwrap();
        assert_eq!(summary.files.len(), 2);
        assert_eq!(summary.failures(), 1);
        let failed = summary.files.iter().find(|report| !report.is_ok()).unwrap();
        assert!(failed.path.ends_with("fr.toml"));
        assert!(failed.error.as_deref().unwrap().contains("missing"));

        let err = handle_check(json(), &config).unwrap_err();
        assert!(err.to_string().contains("1 locale file(s) failed validation"));
    }

    #[test]
    fn all_valid_files_pass() {
        let dir = TempDir::new().unwrap();
        write_valid(dir.path(), "en-US");
        write_valid(dir.path(), "en-GB");
        let config = config_for("en-GB", vec![dir.path().to_path_buf()]);

        let summary = run_check(&config).unwrap();
        assert_eq!(summary.failures(), 0);
        assert!(summary.configured_locale_available);
        let locales: Vec<&str> = summary.locales.iter().map(LocaleId::as_str).collect();
        assert_eq!(locales, vec!["en-AU", "en-GB", "en-US"]);
        handle_check(json(), &config).unwrap();
    }

    #[test]
    fn unavailable_configured_locale_is_flagged() {
        let dir = TempDir::new().unwrap();
        write_valid(dir.path(), "en-US");

        let summary = run_check(&config_for("de-DE", vec![dir.path().to_path_buf()])).unwrap();
        assert!(!summary.configured_locale_available);
        assert_eq!(summary.configured_locale, "de-DE");

        let summary = run_check(&config_for("not a locale", vec![])).unwrap();
        assert!(!summary.configured_locale_available);
    }

    #[test]
    fn missing_directory_is_skipped() {
        let dir = TempDir::new().unwrap();
        write_valid(dir.path(), "en-US");
        let absent = dir.path().join("absent");
        let config = config_for("en-AU", vec![absent.clone(), dir.path().to_path_buf()]);

        let summary = run_check(&config).unwrap();
        assert_eq!(summary.missing_dirs, vec![absent]);
        assert_eq!(summary.files.len(), 1);
        assert_eq!(summary.failures(), 0);
        handle_check(json(), &config).unwrap();
    }
}
