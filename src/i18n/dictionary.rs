// ============================================================================
// Timestables - 语言表
// ============================================================================
//
// 文件: src/i18n/dictionary.rs
// 职责: 单个语言的完整文案表
// 边界:
//   - ✅ 内置语言表构建
//   - ✅ 外部文案表的完整性校验
//   - ✅ 文案查找
//   - ❌ 不应包含文件读取逻辑
//   - ❌ 不应包含语言切换逻辑
//
// ============================================================================

use std::borrow::Cow;
use std::collections::HashMap;

use super::locale::LocaleId;
use super::{en_au, I18nError};
use crate::models::message_key::MessageKey;

/// 单个语言的文案表，构建后不可变
///
/// 模板按 `MessageKey::ALL` 的顺序存放，长度由类型保证与键总数一致。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    locale: LocaleId,
    templates: [Cow<'static, str>; MessageKey::COUNT],
}

impl Dictionary {
    /// 内置 en-AU 语言表
    pub fn en_au() -> Self {
        Self {
            locale: LocaleId::default_locale(),
            templates: std::array::from_fn(|i| Cow::Borrowed(en_au::template(MessageKey::ALL[i]))),
        }
    }

    /// 从 `键名 -> 模板` 的表构建，缺键或多键都会失败
    pub fn from_table(locale: LocaleId, mut table: HashMap<String, String>) -> Result<Self, I18nError> {
        let missing: Vec<&'static str> = MessageKey::ALL
            .iter()
            .map(MessageKey::as_str)
            .filter(|name| !table.contains_key(*name))
            .collect();
        if !missing.is_empty() {
            return Err(I18nError::IncompleteDictionary { locale, missing });
        }

        if table.len() > MessageKey::COUNT {
            let mut unknown: Vec<String> = table
                .keys()
                .filter(|name| name.parse::<MessageKey>().is_err())
                .cloned()
                .collect();
            unknown.sort();
            return Err(I18nError::UnknownKeys { locale, unknown });
        }

        let templates = std::array::from_fn(|i| {
            Cow::Owned(table.remove(MessageKey::ALL[i].as_str()).unwrap_or_default())
        });
        Ok(Self { locale, templates })
    }

    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    /// 查找模板
    pub fn resolve(&self, key: MessageKey) -> &str {
        &self.templates[key.index()]
    }

    /// 按键顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (MessageKey, &str)> + '_ {
        MessageKey::ALL.iter().map(move |key| (*key, self.resolve(*key)))
    }
}
