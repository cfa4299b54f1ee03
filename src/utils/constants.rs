// ============================================================================
// Timestables - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 默认路径与环境变量名
//   - ✅ 输出图标字符定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "TIMESTABLES";

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "timestables.toml";

/// 默认界面语言
pub const DEFAULT_LOCALE: &str = "en-AU";

/// 默认语言文件目录
pub const DEFAULT_LOCALE_DIR: &str = "locales";

/// 指定界面语言的环境变量
pub const LOCALE_ENV: &str = "TIMESTABLES_LOCALE";

/// 输出图标
pub mod icons {
    /// 成功图标
    pub const SUCCESS: &str = "✓";
    /// 错误图标
    pub const ERROR: &str = "✗";
    /// 当前项图标
    pub const CURRENT: &str = "●";
    /// 普通项图标
    pub const ITEM: &str = "○";
}
