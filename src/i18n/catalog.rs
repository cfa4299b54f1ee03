// ============================================================================
// Timestables - 语言目录
// ============================================================================
//
// 文件: src/i18n/catalog.rs
// 职责: 管理进程内所有语言表以及当前语言
// 边界:
//   - ✅ 语言表注册与占位符一致性校验
//   - ✅ 当前语言选择与回退
//   - ✅ 查找 + 渲染
//   - ❌ 不应包含文件扫描逻辑
//   - ❌ 不应包含 CLI 相关逻辑
//
// ============================================================================

use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::dictionary::Dictionary;
use super::locale::LocaleId;
use super::render::{placeholders, render, Params};
use super::I18nError;
use crate::models::message_key::MessageKey;

/// 语言目录
///
/// 默认语言（en-AU）始终存在，也是其他语言占位符校验的基准。
#[derive(Debug, Clone)]
pub struct Catalog {
    default_locale: LocaleId,
    active: LocaleId,
    reference: Dictionary,
    dictionaries: BTreeMap<LocaleId, Dictionary>,
}

impl Catalog {
    /// 只包含内置 en-AU 的目录
    pub fn builtin() -> Self {
        let dictionary = Dictionary::en_au();
        let locale = dictionary.locale().clone();
        let mut dictionaries = BTreeMap::new();
        dictionaries.insert(locale.clone(), dictionary.clone());
        Self {
            default_locale: locale.clone(),
            active: locale,
            reference: dictionary,
            dictionaries,
        }
    }

    /// 注册一个语言表
    pub fn insert(&mut self, dictionary: Dictionary) -> Result<(), I18nError> {
        let locale = dictionary.locale().clone();
        if self.dictionaries.contains_key(&locale) {
            return Err(I18nError::DuplicateLocale(locale));
        }

        let reference = self.default_dictionary();
        for key in MessageKey::ALL {
            let expected = placeholders(reference.resolve(key));
            let found = placeholders(dictionary.resolve(key));
            if expected != found {
                return Err(I18nError::PlaceholderMismatch {
                    locale,
                    key,
                    expected: expected.into_iter().map(str::to_string).collect(),
                    found: found.into_iter().map(str::to_string).collect(),
                });
            }
        }

        debug!(locale = %locale, "registered locale dictionary");
        self.dictionaries.insert(locale, dictionary);
        Ok(())
    }

    /// 选择当前语言；不存在时回退到默认语言并记录警告
    pub fn select(&mut self, locale: &LocaleId) -> &LocaleId {
        if self.dictionaries.contains_key(locale) {
            self.active = locale.clone();
        } else {
            warn!(
                requested = %locale,
                fallback = %self.default_locale,
                "no dictionary for requested locale, falling back"
            );
            self.active = self.default_locale.clone();
        }
        &self.active
    }

    /// 构建式的 `select`
    pub fn with_locale(mut self, locale: &LocaleId) -> Self {
        self.select(locale);
        self
    }

    pub fn active_locale(&self) -> &LocaleId {
        &self.active
    }

    pub fn default_locale(&self) -> &LocaleId {
        &self.default_locale
    }

    /// 当前语言的语言表
    pub fn active(&self) -> &Dictionary {
        self.dictionary(&self.active)
    }

    /// 指定语言的语言表，不存在时返回默认语言
    pub fn dictionary(&self, locale: &LocaleId) -> &Dictionary {
        match self.dictionaries.get(locale) {
            Some(dictionary) => dictionary,
            None => {
                warn!(requested = %locale, "unknown locale, using default dictionary");
                self.default_dictionary()
            }
        }
    }

    pub fn contains(&self, locale: &LocaleId) -> bool {
        self.dictionaries.contains_key(locale)
    }

    /// 已注册的语言（有序）
    pub fn locales(&self) -> impl Iterator<Item = &LocaleId> + '_ {
        self.dictionaries.keys()
    }

    /// 当前语言下的模板
    pub fn resolve(&self, key: MessageKey) -> &str {
        self.active().resolve(key)
    }

    /// 当前语言下查找并渲染
    pub fn translate(&self, key: MessageKey, params: &Params) -> Result<String, I18nError> {
        render(self.resolve(key), params)
    }

    fn default_dictionary(&self) -> &Dictionary {
        &self.reference
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
