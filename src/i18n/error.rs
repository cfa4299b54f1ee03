// ============================================================================
// Timestables - 国际化错误类型
// ============================================================================
//
// 文件: src/i18n/error.rs
// 职责: 国际化模块的错误定义
// 边界:
//   - ✅ 语言表校验错误
//   - ✅ 插值错误
//   - ✅ 语言文件读取/解析错误
//   - ❌ 不应包含错误展示逻辑
//
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

use super::locale::LocaleId;
use crate::models::message_key::MessageKey;

/// 国际化错误
#[derive(Debug, Error)]
pub enum I18nError {
    /// 语言表缺少部分文案键
    #[error("locale '{locale}' is missing templates for: {}", .missing.join(", "))]
    IncompleteDictionary {
        locale: LocaleId,
        missing: Vec<&'static str>,
    },

    /// 语言表包含注册表中不存在的键
    #[error("locale '{locale}' defines unknown message keys: {}", .unknown.join(", "))]
    UnknownKeys { locale: LocaleId, unknown: Vec<String> },

    /// 模板占位符与默认语言不一致
    #[error(
        "template '{key}' in locale '{locale}' uses placeholders [{}], expected [{}]",
        .found.join(", "),
        .expected.join(", ")
    )]
    PlaceholderMismatch {
        locale: LocaleId,
        key: MessageKey,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// 渲染时缺少占位符对应的参数
    #[error("no value supplied for placeholder '{{{name}}}'")]
    MissingInterpolationValue { name: String },

    #[error("unknown message key: {0}")]
    UnknownMessageKey(String),

    #[error("invalid locale identifier: '{0}'")]
    InvalidLocale(String),

    #[error("locale '{0}' is already registered")]
    DuplicateLocale(LocaleId),

    #[error("the global catalog is already installed")]
    CatalogAlreadyInstalled,

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// 语言文件中的值不是字符串
    #[error("{}: value of '{key}' must be a string", .path.display())]
    InvalidValue { path: PathBuf, key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_message_shows_braces() {
        let err = I18nError::MissingInterpolationValue {
            name: "highscore".to_string(),
        };
        assert_eq!(err.to_string(), "no value supplied for placeholder '{highscore}'");
    }

    #[test]
    fn incomplete_dictionary_lists_keys() {
        let err = I18nError::IncompleteDictionary {
            locale: "fr-FR".parse().unwrap(),
            missing: vec!["headingMainPage", "messageCorrect"],
        };
        assert_eq!(
            err.to_string(),
            "locale 'fr-FR' is missing templates for: headingMainPage, messageCorrect"
        );
    }
}
