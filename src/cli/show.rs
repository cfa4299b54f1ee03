// ============================================================================
// Timestables - CLI Show 命令
// ============================================================================
//
// 文件: src/cli/show.rs
// 职责: 渲染单条文案
// 边界:
//   - ✅ 命令行参数定义和解析（name=value）
//   - ✅ 调用语言目录渲染
//   - ❌ 不应包含插值实现
//
// ============================================================================

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use super::OutputFormat;
use crate::i18n::{Catalog, ParamValue, Params};
use crate::models::game::Difficulty;
use crate::models::message_key::MessageKey;

/// 渲染文案命令参数
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Message key (e.g. messageGameStart)
    pub key: String,

    /// Interpolation value as name=value (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_param)]
    pub params: Vec<(String, ParamValue)>,

    /// Shortcut for --param difficulty=<level>
    #[arg(long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// 解析 `name=value`
fn parse_param(raw: &str) -> Result<(String, ParamValue), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing parameter name in '{raw}'"));
    }
    Ok((name.to_string(), ParamValue::infer(value)))
}

#[derive(Debug, Serialize)]
struct Rendered<'a> {
    key: MessageKey,
    locale: &'a str,
    template: &'a str,
    rendered: String,
}

pub fn handle_show(args: ShowArgs, catalog: &Catalog) -> Result<()> {
    let key: MessageKey = args.key.parse()?;

    let mut params: Params = args.params.into_iter().collect();
    if let Some(difficulty) = args.difficulty {
        params.insert("difficulty", difficulty);
    }

    let rendered = catalog
        .translate(key, &params)
        .with_context(|| format!("Failed to render '{key}'"))?;

    match args.format {
        OutputFormat::Text => println!("{rendered}"),
        OutputFormat::Json => {
            let output = Rendered {
                key,
                locale: catalog.active_locale().as_str(),
                template: catalog.resolve(key),
                rendered,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("highscore=42", "highscore", ParamValue::Integer(42))]
    #[case("difficulty=easy", "difficulty", ParamValue::Text("easy".to_string()))]
    #[case("note=a=b", "note", ParamValue::Text("a=b".to_string()))]
    #[case("empty=", "empty", ParamValue::Text(String::new()))]
    fn parses_name_value_pairs(#[case] raw: &str, #[case] name: &str, #[case] value: ParamValue) {
        assert_eq!(parse_param(raw).unwrap(), (name.to_string(), value));
    }

    #[rstest]
    #[case("novalue")]
    #[case("=42")]
    fn rejects_malformed_pairs(#[case] raw: &str) {
        assert!(parse_param(raw).is_err());
    }

    #[test]
    fn unknown_key_fails() {
        let args = ShowArgs {
            key: "headingNope".to_string(),
            params: Vec::new(),
            difficulty: None,
            format: OutputFormat::Text,
        };
        let err = handle_show(args, &Catalog::builtin()).unwrap_err();
        assert!(err.to_string().contains("unknown message key: headingNope"));
    }

    #[test]
    fn missing_value_fails_with_context() {
        let args = ShowArgs {
            key: "messageGameStart".to_string(),
            params: Vec::new(),
            difficulty: None,
            format: OutputFormat::Text,
        };
        let err = handle_show(args, &Catalog::builtin()).unwrap_err();
        assert_eq!(err.to_string(), "Failed to render 'messageGameStart'");
        assert!(format!("{err:#}").contains("{difficulty}"));
    }

    #[test]
    fn difficulty_flag_supplies_parameter() {
        let args = ShowArgs {
            key: "messageGameStart".to_string(),
            params: Vec::new(),
            difficulty: Some(Difficulty::Hard),
            format: OutputFormat::Json,
        };
        assert!(handle_show(args, &Catalog::builtin()).is_ok());
    }
}
