//! 题目分段
//!
//! 按 "Question N of TOTAL" 标记把整份题库原文切成若干段，
//! 每段与其前一个标记中的序号 N 绑定

use super::section::trim_text;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Question (\d+) of (\d+)").expect("题目标记正则非法"));

/// 一道题的原文片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    /// 题目序号
    pub ordinal: u32,
    /// 已去除首尾空白的原文
    pub body: &'a str,
}

/// 标记在原文中的位置
#[derive(Debug, Clone, Copy)]
struct Marker {
    start: usize,
    end: usize,
    ordinal: u32,
}

/// 按标记位置切分原文
///
/// 标记序号可以不连续、重复或乱序，每次出现都独立成段。
/// 找不到任何标记时整份原文作为序号 1 的一段。
/// 只有 TOTAL 与 `total` 完全相同的标记才算数
pub fn split_sections(text: &str, total: u32) -> Vec<Section<'_>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let markers: Vec<Marker> = MARKER
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            if caps.get(2)?.as_str().parse::<u32>().ok()? != total {
                return None;
            }
            // 序号溢出时按普通文本处理
            let ordinal = caps.get(1)?.as_str().parse().ok()?;
            Some(Marker {
                start: whole.start(),
                end: whole.end(),
                ordinal,
            })
        })
        .collect();

    debug!("找到 {} 个题目标记", markers.len());

    let Some(first) = markers.first() else {
        return non_empty(text, 1).into_iter().collect();
    };

    let mut sections = Vec::with_capacity(markers.len() + 1);
    sections.extend(non_empty(&text[..first.start], 1));

    for (i, current) in markers.iter().enumerate() {
        let end = markers.get(i + 1).map_or(text.len(), |next| next.start);
        sections.extend(non_empty(&text[current.end..end], current.ordinal));
    }

    sections
}

fn non_empty(raw: &str, ordinal: u32) -> Option<Section<'_>> {
    let body = trim_text(raw);
    (!body.is_empty()).then_some(Section { ordinal, body })
}
