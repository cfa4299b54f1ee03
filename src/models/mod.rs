// ============================================================================
// Timestables - 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 数据模型子模块导出
//
// ============================================================================

pub mod config;
pub mod game;
pub mod message_key;
