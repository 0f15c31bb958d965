//! 汉字转拼音
//!
//! 同音字（如 "伤害" / "上海"）转换后得到相同的拼音串，匹配时据此容错。
//! 拼音表中查不到的字符（ASCII、标点、空白等）直接丢弃，不产生任何分隔符。
//! 地名中的多音字（厦门、长沙）另外展开全部读音，供候选项打分。

use pinyin::{ToPinyin, ToPinyinMulti};
use unicode_normalization::UnicodeNormalization;

/// 转换为拼音字符串（全拼，无声调，小写）
///
/// - "北京市" → "beijingshi"
/// - "重-庆市" → "zhongqingshi"（标点被丢弃）
/// - 多音字取最常用读音
pub fn to_roman(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    // NFC 归一化：兼容汉字折叠为统一汉字后再查表
    for ch in text.nfc() {
        if let Some(pinyin) = ch.to_pinyin() {
            result.push_str(pinyin.plain());
        }
    }
    result
}

/// 转换为带声调数字的拼音（如 "陕西" → "shan3xi1"）
///
/// 丢弃规则与 [`to_roman`] 一致，仅用于诊断输出
pub fn to_roman_with_tone(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 3);
    for ch in text.nfc() {
        if let Some(pinyin) = ch.to_pinyin() {
            result.push_str(pinyin.with_tone_num());
        }
    }
    result
}

/// 单个名称最多展开的读音组合数
const MAX_READINGS: usize = 8;

/// 展开多音字的读音组合（全拼，无声调）
///
/// 第一项总是与 [`to_roman`] 相同，其余按字序展开并去重，最多 `MAX_READINGS` 项。
/// - "厦门" → ["shamen", "xiamen"]（顺序取决于拼音表）
pub fn roman_readings(text: &str) -> Vec<String> {
    let mut readings = vec![String::with_capacity(text.len() * 2)];
    for ch in text.nfc() {
        let Some(first) = ch.to_pinyin() else {
            continue;
        };

        let mut syllables = vec![first.plain()];
        if let Some(multi) = ch.to_pinyin_multi() {
            for pinyin in multi {
                let plain = pinyin.plain();
                if !syllables.contains(&plain) {
                    syllables.push(plain);
                }
            }
        }

        let mut expanded: Vec<String> = Vec::with_capacity(MAX_READINGS);
        'outer: for prefix in &readings {
            for syllable in &syllables {
                let reading = format!("{}{}", prefix, syllable);
                if !expanded.contains(&reading) {
                    expanded.push(reading);
                }
                if expanded.len() >= MAX_READINGS {
                    break 'outer;
                }
            }
        }
        readings = expanded;
    }
    readings
}
