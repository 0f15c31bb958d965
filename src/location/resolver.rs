//! 自由文本地名解析
//!
//! 输入可能同时包含省和市（如 "北京 平谷"），也可能只有一个省名或一个城市名。
//!
//! ## 处理流程
//! 1. 按空白 / 逗号 / 顿号 / 斜杠切分片段
//! 2. 单个片段：省份精确命中直接返回；否则尝试跨省城市匹配，再退回省份
//! 3. 多个片段：首段作省份，其余拼接后作该省下的城市

use std::sync::Arc;

use crate::location::matcher::{CityHit, PlaceMatcher};
use crate::location::tokenizer::Tokenizer;
use crate::location::types::{MatchResult, MatchThresholds, Resolution};

/// 自由文本解析器
pub struct CompositeResolver {
    matcher: Arc<PlaceMatcher>,
    thresholds: MatchThresholds,
}

impl CompositeResolver {
    pub fn new(matcher: Arc<PlaceMatcher>, thresholds: MatchThresholds) -> Self {
        Self {
            matcher,
            thresholds,
        }
    }

    /// 解析自由文本
    ///
    /// 纯函数，不可失败（无法识别时返回空结果，置信度为 0）
    pub fn resolve(&self, text: &str) -> Resolution {
        let segments = Tokenizer::segments(text);

        let resolution = match segments.as_slice() {
            [] => Resolution::none(),
            [single] => self.resolve_single(single),
            [first, rest @ ..] => self.resolve_pair(first, &rest.concat()),
        };

        tracing::debug!(
            "解析地名 {:?} → {:?} ({:.3})",
            text,
            resolution.matched_name(),
            resolution.ratio
        );
        resolution
    }

    /// 单个片段：可能是省名，也可能是城市名
    fn resolve_single(&self, segment: &str) -> Resolution {
        let province = self.matcher.match_province(segment);
        if province.ratio >= 1.0 {
            return Resolution::province_only(province);
        }

        if let Some(hit) = self.matcher.match_city_anywhere(segment) {
            if self.accept_bare_city(&province, &hit) {
                let owner = MatchResult::new(
                    hit.province.clone(),
                    self.matcher.province_score(segment, &hit.province),
                );
                let ratio = hit.city.ratio;
                return Resolution::with_city(owner, hit.city, ratio);
            }
        }

        if province.ratio >= self.thresholds.province_accept {
            Resolution::province_only(province)
        } else {
            Resolution::none()
        }
    }

    /// 跨省城市命中是否可信
    ///
    /// 城市分须达到高置信并超过省份分；省份分已高置信时，城市只能属于该省
    fn accept_bare_city(&self, province: &MatchResult, hit: &CityHit) -> bool {
        if hit.city.ratio < self.thresholds.city_confident || hit.city.ratio <= province.ratio {
            return false;
        }
        province.ratio < self.thresholds.province_confident
            || hit.province == province.matched_name
    }

    /// 多个片段：首段为省份，其余为城市
    fn resolve_pair(&self, province_text: &str, city_text: &str) -> Resolution {
        let province = self.matcher.match_province(province_text);
        if province.ratio < self.thresholds.province_accept {
            // 首段不像省份，整体当作一个片段重新解析
            return self.resolve_single(&format!("{}{}", province_text, city_text));
        }

        let city = self.matcher.match_city(city_text, &province.matched_name);
        if city.ratio >= self.thresholds.city_accept {
            let ratio = province.ratio.min(city.ratio);
            Resolution::with_city(province, city, ratio)
        } else {
            Resolution::province_only(province)
        }
    }
}
