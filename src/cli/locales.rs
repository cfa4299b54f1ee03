// ============================================================================
// Timestables - CLI Locales 命令
// ============================================================================
//
// 文件: src/cli/locales.rs
// 职责: 列出已注册的语言
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::OutputFormat;
use crate::i18n::{Catalog, LocaleId};
use crate::utils::constants::icons;

/// 列出语言命令参数
#[derive(Debug, Args)]
pub struct LocalesArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct LocaleEntry<'a> {
    locale: &'a LocaleId,
    default: bool,
    active: bool,
}

fn locale_entries(catalog: &Catalog) -> Vec<LocaleEntry<'_>> {
    catalog
        .locales()
        .map(|locale| LocaleEntry {
            locale,
            default: locale == catalog.default_locale(),
            active: locale == catalog.active_locale(),
        })
        .collect()
}

pub fn handle_locales(args: LocalesArgs, catalog: &Catalog) -> Result<()> {
    let entries = locale_entries(catalog);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            for entry in &entries {
                let icon = if entry.active { icons::CURRENT } else { icons::ITEM };
                let suffix = if entry.default { " (default)" } else { "" };
                println!("{icon} {}{suffix}", entry.locale);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Dictionary;
    use std::collections::HashMap;

    fn with_en_us() -> Catalog {
        let table: HashMap<String, String> = Dictionary::en_au()
            .iter()
            .map(|(key, template)| (key.as_str().to_string(), template.to_string()))
            .collect();
        let mut catalog = Catalog::builtin();
        catalog
            .insert(Dictionary::from_table("en-US".parse().unwrap(), table).unwrap())
            .unwrap();
        catalog.with_locale(&"en-US".parse().unwrap())
    }

    #[test]
    fn marks_default_and_active_locales() {
        let catalog = with_en_us();
        let entries = locale_entries(&catalog);
        let summary: Vec<(&str, bool, bool)> = entries
            .iter()
            .map(|entry| (entry.locale.as_str(), entry.default, entry.active))
            .collect();
        assert_eq!(summary, vec![("en-AU", true, false), ("en-US", false, true)]);
    }

    #[test]
    fn builtin_catalog_lists_only_default() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_value(locale_entries(&catalog)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "locale": "en-AU", "default": true, "active": true }])
        );
        handle_locales(
            LocalesArgs {
                format: OutputFormat::Text,
            },
            &catalog,
        )
        .unwrap();
    }
}
