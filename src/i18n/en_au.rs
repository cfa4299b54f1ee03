// ============================================================================
// Timestables - English (Australia) Translation Table
// ============================================================================
//
// 文件: src/i18n/en_au.rs
// 职责: en-AU translation content definition
// 边界:
//   - ✅ en-AU template strings definition
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

use crate::models::message_key::MessageKey;

/// en-AU template for a message key
pub fn template(key: MessageKey) -> &'static str {
    match key {
        // Headings
        MessageKey::HeadingMainPage => "Times Tables",
        MessageKey::HeadingHighScores => "High Scores",
        MessageKey::HeadingPlayerName => "Your Name",
        MessageKey::HeadingLastGame => "Last Game",
        // Messages
        MessageKey::MessageGameStart => "Starting game with {difficulty} difficulty",
        MessageKey::MessageGameOver => "Game over! Your score is",
        MessageKey::MessageCheckAnswer => "Checking answer for",
        MessageKey::MessageCorrect => "Correct",
        MessageKey::MessageIncorrect => "Incorrect",
        MessageKey::MessageHighScore => "New high score! {highscore}",
    }
}
