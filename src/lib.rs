// ============================================================================
// Timestables - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: 模块声明与常用类型导出
// 边界:
//   - ✅ 子模块声明
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体实现
//
// ============================================================================

//! 乘法口诀小游戏的国际化核心：封闭的文案键注册表、完整的语言表、
//! 命名占位符插值，以及检查语言文件的命令行工具。

pub mod cli;
pub mod i18n;
pub mod models;
pub mod utils;

// 重新导出常用类型
pub use i18n::{render, Catalog, Dictionary, I18nError, LocaleId, ParamValue, Params};
pub use models::game::{Difficulty, Question};
pub use models::message_key::MessageKey;
