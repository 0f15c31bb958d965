//! 拼音串相似度
//!
//! ratio = (len(a) + len(b) - 编辑距离) / (len(a) + len(b))，长度按 Unicode 字符计

use strsim::levenshtein;

/// 计算两个拼音串的相似度 (0.0 - 1.0)
///
/// - 完全相同返回 1.0（包括两者都为空）
/// - 仅一方为空返回 0.0
/// - 对称；不同的串一定小于 1.0
pub fn ratio(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let total = a.chars().count() + b.chars().count();
    // 编辑距离不超过较长串的长度，total - distance 不会下溢
    let distance = levenshtein(a, b);
    (total - distance) as f64 / total as f64
}
