//! 地名输入分词器
//!
//! 将自由文本按分隔符切分为片段，如 "北京 平谷" → ["北京", "平谷"]

/// 分词器
pub struct Tokenizer;

impl Tokenizer {
    /// 按分隔符切分为片段
    ///
    /// 片段内的符号保留（如 "重-庆市"），交由拼音转换丢弃
    pub fn segments(text: &str) -> Vec<String> {
        text.split(Self::is_separator)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// 分隔符：空白、逗号、顿号、斜杠
    fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, ',' | '，' | '、' | '/')
    }
}
