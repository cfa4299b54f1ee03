// ============================================================================
// Timestables - 工具模块
// ============================================================================
//
// 文件: src/utils/mod.rs
// 职责: 通用工具子模块导出
//
// ============================================================================

pub mod constants;
pub mod logger;
