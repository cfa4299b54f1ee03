// ============================================================================
// Timestables - 文案键注册表
// ============================================================================
//
// 文件: src/models/message_key.rs
// 职责: 所有可显示文案的标识符定义
// 边界:
//   - ✅ 文案键枚举定义（封闭集合）
//   - ✅ 文案键名称与解析
//   - ❌ 不应包含任何翻译内容
//   - ❌ 不应包含查找或插值逻辑
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::i18n::I18nError;

// 变体、键名、`ALL` 和 `COUNT` 由同一份列表生成，新增文案只需加一行
macro_rules! message_keys {
    ($($variant:ident => $name:literal,)*) => {
        /// 文案键
        ///
        /// 新增任何界面文案都必须在这里新增一个变体，编译器会强制所有内置
        /// 语言表补全对应模板。分组仅用于维护，运行时不区分。
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub enum MessageKey {
            $(
                #[serde(rename = $name)]
                $variant,
            )*
        }

        impl MessageKey {
            /// 文案键总数
            pub const COUNT: usize = [$($name),*].len();

            /// 全部文案键（声明顺序）
            pub const ALL: [MessageKey; Self::COUNT] = [$(MessageKey::$variant),*];

            /// 获取稳定的键名（语言文件中使用的名称）
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $name,)*
                }
            }
        }
    };
}

message_keys! {
    // Headings
    HeadingMainPage => "headingMainPage",
    HeadingHighScores => "headingHighScores",
    HeadingPlayerName => "headingPlayerName",
    HeadingLastGame => "headingLastGame",

    // Subheadings

    // Paragraphs

    // Buttons

    // Labels

    // Placeholders

    // Messages
    MessageGameStart => "messageGameStart",
    MessageGameOver => "messageGameOver",
    MessageCheckAnswer => "messageCheckAnswer",
    MessageCorrect => "messageCorrect",
    MessageIncorrect => "messageIncorrect",
    MessageHighScore => "messageHighScore",

    // Errors

    // Links
}

// `Dictionary` 以判别值为下标存放模板
const _: () = {
    let mut position = 0;
    while position < MessageKey::COUNT {
        assert!(MessageKey::ALL[position] as usize == position);
        position += 1;
    }
};

impl MessageKey {
    /// 在 `ALL` 中的位置
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for MessageKey {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| I18nError::UnknownMessageKey(s.to_string()))
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::BTreeSet;

    #[test]
    fn all_is_in_discriminant_order() {
        for (position, key) in MessageKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), position, "{key} is out of order");
        }
    }

    #[test]
    fn every_key_resolves_in_builtin_dictionary() {
        let dictionary = crate::i18n::Dictionary::en_au();
        for key in MessageKey::ALL {
            assert_eq!(dictionary.resolve(key), crate::i18n::en_au::template(key));
        }
        assert_eq!(MessageKey::ALL.len(), MessageKey::COUNT);
        let last = MessageKey::ALL[MessageKey::COUNT - 1];
        assert_eq!(last.index() + 1, MessageKey::COUNT);
    }

    #[test]
    fn names_are_unique() {
        let names: BTreeSet<&str> = MessageKey::ALL.iter().map(MessageKey::as_str).collect();
        assert_eq!(names.len(), MessageKey::COUNT);
    }

    #[rstest]
    #[case("headingMainPage", MessageKey::HeadingMainPage)]
    #[case("messageHighScore", MessageKey::MessageHighScore)]
    #[case("messageGameStart", MessageKey::MessageGameStart)]
    fn parses_exact_names(#[case] name: &str, #[case] expected: MessageKey) {
        assert_eq!(name.parse::<MessageKey>().unwrap(), expected);
    }

    #[rstest]
    #[case("HeadingMainPage")]
    #[case("heading_main_page")]
    #[case("")]
    fn rejects_unknown_names(#[case] name: &str) {
        let err = name.parse::<MessageKey>().unwrap_err();
        assert!(matches!(err, I18nError::UnknownMessageKey(ref n) if n == name));
    }

    #[test]
    fn serde_name_matches_as_str() {
        for key in MessageKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }
}
