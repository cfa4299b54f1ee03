// ============================================================================
// Timestables - CLI Keys 命令
// ============================================================================
//
// 文件: src/cli/keys.rs
// 职责: 列出全部文案键及当前语言模板
// 边界:
//   - ✅ 命令行参数定义
//   - ✅ 文本/JSON 输出
//   - ❌ 不应包含查找逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::OutputFormat;
use crate::i18n::{placeholders, Catalog};
use crate::models::message_key::MessageKey;

/// 列出文案键命令参数
#[derive(Debug, Args)]
pub struct KeysArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct KeyEntry<'a> {
    key: MessageKey,
    template: &'a str,
    placeholders: Vec<&'a str>,
}

/// 当前语言下每个文案键的模板与占位符
fn key_entries(catalog: &Catalog) -> Vec<KeyEntry<'_>> {
    catalog
        .active()
        .iter()
        .map(|(key, template)| KeyEntry {
            key,
            template,
            placeholders: placeholders(template).into_iter().collect(),
        })
        .collect()
}

pub fn handle_keys(args: KeysArgs, catalog: &Catalog) -> Result<()> {
    let entries = key_entries(catalog);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            let width = MessageKey::ALL
                .iter()
                .map(|key| key.as_str().len())
                .max()
                .unwrap_or_default();
            for entry in &entries {
                println!("{:<width$}  {}", entry.key.as_str(), entry.template);
            }
        }
    }
    Ok(())
}
