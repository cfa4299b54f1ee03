// ============================================================================
// Timestables - 国际化模块
// ============================================================================
//
// 文件: src/i18n/mod.rs
// 职责: 国际化支持和翻译管理
// 边界:
//   - ✅ 全局语言目录安装与获取
//   - ✅ 翻译宏定义和实现
//   - ✅ 参数化翻译支持
//   - ❌ 不应包含具体翻译内容
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含 CLI 相关逻辑
//
// ============================================================================

pub mod catalog;
pub mod dictionary;
pub mod en_au;
pub mod error;
pub mod loader;
pub mod locale;
pub mod render;

use std::sync::OnceLock;

pub use catalog::Catalog;
pub use dictionary::Dictionary;
pub use error::I18nError;
pub use locale::LocaleId;
pub use render::{placeholders, render, ParamValue, Params};

use crate::models::message_key::MessageKey;

/// 全局语言目录（进程内只读）
static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// 安装全局语言目录（程序启动时调用，只能调用一次）
pub fn install(loaded: Catalog) -> Result<&'static Catalog, I18nError> {
    CATALOG
        .set(loaded)
        .map_err(|_| I18nError::CatalogAlreadyInstalled)?;
    Ok(catalog())
}

/// 获取全局语言目录；未安装时使用内置 en-AU
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(Catalog::builtin)
}

/// 获取翻译模板
pub fn get_translation(key: MessageKey) -> String {
    catalog().resolve(key).to_string()
}

/// 获取并渲染翻译
pub fn format_translation(key: MessageKey, params: &Params) -> Result<String, I18nError> {
    catalog().translate(key, params)
}

/// 简单翻译宏
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::get_translation($key)
    };
}

/// 带命名参数的翻译宏，返回 `Result<String, I18nError>`
///
/// ```ignore
/// let line = tf!(MessageKey::MessageHighScore, highscore = 42)?;
/// ```
#[macro_export]
macro_rules! tf {
    ($key:expr $(, $name:ident = $value:expr)* $(,)?) => {{
        let params = $crate::i18n::Params::new()
            $(.with(stringify!($name), $value))*;
        $crate::i18n::format_translation($key, &params)
    }};
}
