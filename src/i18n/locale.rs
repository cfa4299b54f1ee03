// ============================================================================
// Timestables - 语言标识
// ============================================================================
//
// 文件: src/i18n/locale.rs
// 职责: 语言标识的校验与规范化
// 边界:
//   - ✅ 语言标签解析（en-AU / en_au）
//   - ✅ 规范化输出
//   - ❌ 不应包含系统语言探测
//
// ============================================================================

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::I18nError;
use crate::utils::constants::DEFAULT_LOCALE;

/// 规范化后的语言标识，例如 `en-AU`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocaleId(String);

impl LocaleId {
    /// 内置默认语言标识
    pub fn default_locale() -> Self {
        LocaleId(DEFAULT_LOCALE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for LocaleId {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || I18nError::InvalidLocale(s.to_string());
        let mut subtags = s.trim().split(['-', '_']);

        let language = subtags.next().ok_or_else(invalid)?;
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let mut normalized = language.to_ascii_lowercase();
        for subtag in subtags {
            if !(2..=8).contains(&subtag.len())
                || !subtag.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return Err(invalid());
            }
            normalized.push('-');
            // 两位字母视为地区代码
            if subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()) {
                normalized.push_str(&subtag.to_ascii_uppercase());
            } else {
                normalized.push_str(subtag);
            }
        }

        Ok(LocaleId(normalized))
    }
}

impl Default for LocaleId {
    fn default() -> Self {
        Self::default_locale()
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for LocaleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LocaleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
