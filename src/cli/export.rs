// ============================================================================
// Timestables - 语言导出命令
// ============================================================================
//
// 文件: src/cli/export.rs
// 职责: 把当前语言表导出为语言文件，作为新翻译的起点
// 边界:
//   - ✅ 导出命令参数定义
//   - ✅ 语言文件文本生成
//   - ❌ 不应包含语言文件解析
//
// ============================================================================

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::i18n::{Catalog, Dictionary, LocaleId};
use crate::utils::logger::Logger;

/// 导出命令参数
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(short, long)]
    pub force: bool,
}

/// 生成语言文件内容（按文案键顺序）
pub fn to_locale_file(dictionary: &Dictionary) -> String {
    let mut content = format!("# Locale: {}\n", dictionary.locale());
    for (key, template) in dictionary.iter() {
        let value = toml::Value::String(template.to_string());
        content.push_str(&format!("{} = {}\n", key.as_str(), value));
    }
    content
}

pub fn handle_export(args: ExportArgs, catalog: &Catalog) -> Result<()> {
    let dictionary = catalog.active();
    let content = to_locale_file(dictionary);

    let Some(path) = args.output else {
        print!("{content}");
        return Ok(());
    };

    // 文件名即语言标识，与已注册语言同名会在下次启动时冲突
    if let Some(locale) = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.parse::<LocaleId>().ok())
        .filter(|locale| catalog.contains(locale))
    {
        anyhow::bail!(
            "Locale '{locale}' is already registered, choose another file name than {}",
            path.display()
        );
    }

    if path.exists() && !args.force {
        Logger::warn(format!("Output file already exists: {}", path.display()));
        Logger::info("Use --force to overwrite existing file");
        return Ok(());
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write locale file: {}", path.display()))?;
    Logger::success(format!(
        "Exported locale {} to {}",
        dictionary.locale(),
        path.display()
    ));
    Ok(())
}
