use serde::{Deserialize, Serialize};

/// 文本中的一个关键短语
///
/// 偏移量为原文中的字节偏移
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPhrase {
    pub text: String,
    pub score: f64,
    pub begin_offset: usize,
    pub end_offset: usize,
}

/// 带关键短语标注的文本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightedText {
    pub original: String,
    #[serde(default)]
    pub key_phrases: Vec<KeyPhrase>,
}

impl HighlightedText {
    /// 按起始偏移排序后构建
    pub fn new(original: impl Into<String>, mut key_phrases: Vec<KeyPhrase>) -> Self {
        key_phrases.sort_by_key(|kp| kp.begin_offset);
        Self {
            original: original.into(),
            key_phrases,
        }
    }

    /// 用 `**` 包裹关键短语，重叠部分只保留先出现的
    pub fn render_marked(&self) -> String {
        let mut out = String::with_capacity(self.original.len() + self.key_phrases.len() * 4);
        let mut cursor = 0;
        for kp in &self.key_phrases {
            if kp.begin_offset < cursor
                || kp.end_offset > self.original.len()
                || kp.begin_offset >= kp.end_offset
                || !self.original.is_char_boundary(kp.begin_offset)
                || !self.original.is_char_boundary(kp.end_offset)
            {
                continue;
            }
            out.push_str(&self.original[cursor..kp.begin_offset]);
            out.push_str("**");
            out.push_str(&self.original[kp.begin_offset..kp.end_offset]);
            out.push_str("**");
            cursor = kp.end_offset;
        }
        out.push_str(&self.original[cursor..]);
        out
    }
}
