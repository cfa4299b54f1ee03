// ============================================================================
// Timestables - 游戏数据模型
// ============================================================================
//
// 文件: src/models/game.rs
// 职责: 测验相关的数据结构定义
// 边界:
//   - ✅ 难度等级定义
//   - ✅ 单道题目作答记录
//   - ❌ 不应包含出题或计分逻辑
//   - ❌ 不应包含游戏流程控制
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::models::message_key::MessageKey;

/// 难度等级
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

/// 难度解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}', expected one of: easy, medium, hard, expert")]
pub struct ParseDifficultyError(pub String);

impl Difficulty {
    /// 所有难度（由易到难）
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// 稳定的小写标签
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 一道题目的作答记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// 题面，例如 "7 x 8"
    pub question: String,
    /// 正确答案
    pub correct_answer: i64,
    /// 玩家答案（未作答为 None）
    pub player_answer: Option<i64>,
    /// 玩家当前得分
    pub player_score: u32,
}

impl Question {
    /// 创建未作答的题目
    pub fn new(question: impl Into<String>, correct_answer: i64, player_score: u32) -> Self {
        Self {
            question: question.into(),
            correct_answer,
            player_answer: None,
            player_score,
        }
    }

    /// 记录玩家答案
    pub fn with_answer(mut self, answer: i64) -> Self {
        self.player_answer = Some(answer);
        self
    }

    /// 是否已作答
    pub fn is_answered(&self) -> bool {
        self.player_answer.is_some()
    }

    /// 是否答对（未作答视为未答对）
    pub fn is_correct(&self) -> bool {
        self.player_answer == Some(self.correct_answer)
    }

    /// 作答结果对应的文案键
    pub fn outcome_key(&self) -> Option<MessageKey> {
        match self.player_answer {
            None => None,
            Some(answer) if answer == self.correct_answer => Some(MessageKey::MessageCorrect),
            Some(_) => Some(MessageKey::MessageIncorrect),
        }
    }
}
