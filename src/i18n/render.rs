// ============================================================================
// Timestables - 模板插值
// ============================================================================
//
// 文件: src/i18n/render.rs
// 职责: 命名占位符替换
// 边界:
//   - ✅ 占位符扫描
//   - ✅ 参数值定义与字符串化
//   - ✅ 模板渲染
//   - ❌ 不应包含复数、性别等语法规则
//   - ❌ 不应包含本地化数字格式
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::I18nError;
use crate::models::game::Difficulty;

/// 插值参数值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    /// 从命令行文本推断参数类型：能解析为整数的视为整数
    pub fn infer(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(number) => ParamValue::Integer(number),
            Err(_) => ParamValue::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Integer(value) => write!(f, "{value}"),
            ParamValue::Float(value) => write!(f, "{value}"),
            ParamValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<Difficulty> for ParamValue {
    fn from(value: Difficulty) -> Self {
        ParamValue::Text(value.as_str().to_string())
    }
}

macro_rules! impl_from_small_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ParamValue {
            fn from(value: $ty) -> Self {
                ParamValue::Integer(i64::from(value))
            }
        })*
    };
}

impl_from_small_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ParamValue {
            fn from(value: $ty) -> Self {
                match i64::try_from(value) {
                    Ok(number) => ParamValue::Integer(number),
                    Err(_) => ParamValue::Text(value.to_string()),
                }
            }
        })*
    };
}

impl_from_wide_int!(u64, usize, isize);

/// 插值参数集合
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加参数（同名覆盖）
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// 模板片段
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// 将模板切分为字面量与占位符；不合法的花括号内容按字面量处理
fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut result = Vec::new();
    let mut rest = template;
    let mut literal_start = 0usize;
    let mut offset = 0usize;

    while let Some(open) = rest.find('{') {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('}') else {
            break;
        };
        let name = &after_open[..close];
        let consumed = open + 1 + close + 1;

        if is_identifier(name) {
            let placeholder_start = offset + open;
            if placeholder_start > literal_start {
                result.push(Segment::Literal(&template[literal_start..placeholder_start]));
            }
            result.push(Segment::Placeholder(name));
            literal_start = offset + consumed;
            rest = &rest[consumed..];
            offset += consumed;
        } else {
            // 跳过这个 '{'，其后可能仍有合法占位符
            rest = &rest[open + 1..];
            offset += open + 1;
        }
    }

    if literal_start < template.len() {
        result.push(Segment::Literal(&template[literal_start..]));
    }
    result
}

/// 模板中出现的占位符名称
pub fn placeholders(template: &str) -> BTreeSet<&str> {
    segments(template)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// 渲染模板
///
/// 每个占位符都必须有对应参数，否则返回 `MissingInterpolationValue`；
/// 多余参数会被忽略。替换结果不会再次扫描。
pub fn render(template: &str, params: &Params) -> Result<String, I18nError> {
    let mut output = String::with_capacity(template.len());
    for segment in segments(template) {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder(name) => {
                let value = params
                    .get(name)
                    .ok_or_else(|| I18nError::MissingInterpolationValue {
                        name: name.to_string(),
                    })?;
                output.push_str(&value.to_string());
            }
        }
    }
    Ok(output)
}
