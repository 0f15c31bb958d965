//! 地名规则定义
//!
//! 包含行政区划后缀表

/// 行政区划后缀（按长度降序，保证最长匹配优先）
const ADMIN_SUFFIXES: &[&str] = &[
    // 省级
    "特别行政区",
    "维吾尔自治区",
    "壮族自治区",
    "回族自治区",
    "自治区",
    // 地级 / 县级
    "自治州",
    "自治县",
    "地区",
    "省",
    "市",
    "区",
    "县",
    "盟",
    "旗",
];

/// 去掉后缀后至少保留的字符数
const MIN_STEM_CHARS: usize = 2;

/// 去掉一个行政区划后缀
///
/// - "广东省" → "广东"
/// - "广西壮族自治区" → "广西"
/// - "和县" → "和县"（去掉后只剩一个字，保留原样）
pub fn strip_admin_suffix(name: &str) -> &str {
    for suffix in ADMIN_SUFFIXES {
        if let Some(stem) = name.strip_suffix(suffix) {
            if stem.chars().count() >= MIN_STEM_CHARS {
                return stem;
            }
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_province_suffix() {
        assert_eq!(strip_admin_suffix("广东省"), "广东");
        assert_eq!(strip_admin_suffix("北京市"), "北京");
        assert_eq!(strip_admin_suffix("香港特别行政区"), "香港");
    }

    #[test]
    fn test_strip_longest_suffix_first() {
        // "自治区" 不能只去掉 "区"
        assert_eq!(strip_admin_suffix("广西壮族自治区"), "广西");
        assert_eq!(strip_admin_suffix("宁夏回族自治区"), "宁夏");
        assert_eq!(strip_admin_suffix("西藏自治区"), "西藏");
        assert_eq!(strip_admin_suffix("大兴安岭地区"), "大兴安岭");
    }

    #[test]
    fn test_strip_keeps_short_names() {
        assert_eq!(strip_admin_suffix("和县"), "和县");
        assert_eq!(strip_admin_suffix("平谷"), "平谷");
        assert_eq!(strip_admin_suffix(""), "");
    }

    #[test]
    fn test_only_one_suffix_removed() {
        assert_eq!(strip_admin_suffix("北京市区"), "北京市");
    }
}
