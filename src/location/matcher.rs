//! 省份 / 城市匹配
//!
//! 输入与候选统一转为拼音后打分，取最高分候选。
//! 匹配器只排序不拒绝：即使最高分很低也会返回，由调用方按阈值取舍。

use std::sync::Arc;

use unicode_normalization::UnicodeNormalization;

use crate::location::gazetteer::Gazetteer;
use crate::location::rules::strip_admin_suffix;
use crate::location::similarity::ratio;
use crate::location::transliterate::{roman_readings, to_roman};
use crate::location::types::MatchResult;

/// 去后缀比较的折扣：保证只有完全相同的输入才能得到 1.0
const SHORT_FORM_WEIGHT: f64 = 0.9;

/// 预计算拼音的候选项
#[derive(Debug, Clone)]
struct Candidate {
    name: String,
    /// 全称的各种读音（第一项为常用读音）
    romans: Vec<String>,
    /// 去后缀后的各种读音
    short_romans: Vec<String>,
}

impl Candidate {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            romans: roman_readings(name),
            short_romans: roman_readings(strip_admin_suffix(name)),
        }
    }
}

/// 归一化后的查询
#[derive(Debug)]
struct Query {
    text: String,
    roman: String,
    short_roman: String,
}

impl Query {
    /// 空输入返回 None
    fn parse(input: &str) -> Option<Self> {
        let text: String = input.trim().nfc().collect();
        if text.is_empty() {
            return None;
        }
        let roman = to_roman(&text);
        let short_roman = to_roman(strip_admin_suffix(&text));
        Some(Self {
            text,
            roman,
            short_roman,
        })
    }

    /// 对单个候选打分，取候选各读音中的最高分
    fn score(&self, candidate: &Candidate) -> f64 {
        if self.roman.is_empty() {
            return 0.0;
        }
        let full = best_ratio(&self.roman, &candidate.romans);
        let short = best_ratio(&self.short_roman, &candidate.short_romans) * SHORT_FORM_WEIGHT;
        full.max(short)
    }
}

fn best_ratio(roman: &str, readings: &[String]) -> f64 {
    readings
        .iter()
        .map(|reading| ratio(roman, reading))
        .fold(0.0, f64::max)
}

/// 跨省城市匹配结果
#[derive(Debug, Clone, PartialEq)]
pub struct CityHit {
    /// 城市所属省份
    pub province: String,
    pub city: MatchResult,
}

/// 省份 / 城市匹配器（可复用，预计算拼音）
pub struct PlaceMatcher {
    gazetteer: Arc<Gazetteer>,
    /// 省份候选（规范顺序）
    provinces: Vec<Candidate>,
    /// 与 provinces 下标一一对应
    cities: Vec<Vec<Candidate>>,
}

impl PlaceMatcher {
    /// 创建匹配器
    ///
    /// # Arguments
    /// * `gazetteer` - 已加载的地名表
    pub fn new(gazetteer: Arc<Gazetteer>) -> Self {
        let provinces = gazetteer
            .provinces()
            .iter()
            .map(|name| Candidate::new(name))
            .collect();
        let cities = gazetteer
            .iter()
            .map(|(_, list)| list.iter().map(|name| Candidate::new(name)).collect())
            .collect();

        Self {
            gazetteer,
            provinces,
            cities,
        }
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    /// 匹配省份
    pub fn match_province(&self, input: &str) -> MatchResult {
        match Query::parse(input) {
            Some(query) => Self::best_match(&query, &self.provinces),
            None => MatchResult::none(),
        }
    }

    /// 在指定省份内匹配城市
    ///
    /// 省份不存在或输入为空时返回空结果
    pub fn match_city(&self, input: &str, province: &str) -> MatchResult {
        let Some(index) = self.gazetteer.province_index(province) else {
            return MatchResult::none();
        };
        match Query::parse(input) {
            Some(query) => Self::best_match(&query, &self.cities[index]),
            None => MatchResult::none(),
        }
    }

    /// 在所有省份中匹配城市
    ///
    /// 平分时取规范顺序中最先出现的省份
    pub fn match_city_anywhere(&self, input: &str) -> Option<CityHit> {
        let query = Query::parse(input)?;

        // 1. 精确匹配
        if let Some((i, candidate)) = self.all_cities().find(|(_, c)| c.name == query.text) {
            return Some(self.city_hit(i, MatchResult::new(candidate.name.clone(), 1.0)));
        }

        // 2. 拼音相似度
        let mut best: Option<(usize, MatchResult)> = None;
        for (i, candidate) in self.all_cities() {
            let score = query.score(candidate);
            let best_score = best.as_ref().map_or(0.0, |(_, m)| m.ratio);
            if score > best_score {
                best = Some((i, MatchResult::new(candidate.name.clone(), score)));
            }
        }

        best.map(|(i, city)| self.city_hit(i, city))
    }

    /// 输入相对于指定省份的得分（省份不存在时为 0）
    pub fn province_score(&self, input: &str, province: &str) -> f64 {
        let Some(index) = self.gazetteer.province_index(province) else {
            return 0.0;
        };
        let Some(query) = Query::parse(input) else {
            return 0.0;
        };
        if query.text == province {
            return 1.0;
        }
        query.score(&self.provinces[index])
    }

    /// 按规范顺序遍历所有城市候选 (省份下标, 候选)
    fn all_cities(&self) -> impl Iterator<Item = (usize, &Candidate)> + '_ {
        self.cities
            .iter()
            .enumerate()
            .flat_map(|(i, list)| list.iter().map(move |c| (i, c)))
    }

    fn city_hit(&self, province_index: usize, city: MatchResult) -> CityHit {
        CityHit {
            province: self.gazetteer.provinces()[province_index].clone(),
            city,
        }
    }

    /// 在候选中取最高分
    ///
    /// 原文完全相同的候选直接返回 1.0，避免同音候选（山西省 / 陕西省）按顺序抢先
    fn best_match(query: &Query, candidates: &[Candidate]) -> MatchResult {
        if let Some(exact) = candidates.iter().find(|c| c.name == query.text) {
            return MatchResult::new(exact.name.clone(), 1.0);
        }

        let mut best = MatchResult::none();
        for candidate in candidates {
            let score = query.score(candidate);
            // 严格大于：平分时保留先出现的候选
            if score > best.ratio {
                best = MatchResult::new(candidate.name.clone(), score);
            }
        }

        tracing::debug!(
            "匹配 {:?} ({}) → {:?} ({:.3})",
            query.text,
            query.roman,
            best.matched_name,
            best.ratio
        );
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> PlaceMatcher {
        PlaceMatcher::new(Arc::new(Gazetteer::embedded().unwrap()))
    }

    fn small() -> PlaceMatcher {
        let entries = vec![
            ("北京市".to_string(), vec!["平谷".to_string(), "昌平".to_string()]),
            ("上海市".to_string(), vec![]),
            ("广州市".to_string(), vec![]),
        ];
        PlaceMatcher::new(Arc::new(Gazetteer::from_entries(entries).unwrap()))
    }

    #[test]
    fn test_exact_province_match() {
        let matcher = embedded();
        assert_eq!(matcher.match_province("北京市"), MatchResult::new("北京市", 1.0));
    }

    #[test]
    fn test_similar_province_match() {
        let matcher = embedded();
        let result = matcher.match_province("广东");
        assert_eq!(result.matched_name, "广东省");
        assert!(result.ratio >= 0.6);
        assert!(result.ratio < 1.0);
    }

    #[test]
    fn test_no_province_match() {
        let matcher = embedded();
        assert_eq!(matcher.match_province("invalid"), MatchResult::none());
        assert_eq!(matcher.match_province(""), MatchResult::none());
        assert_eq!(matcher.match_province("   "), MatchResult::none());
    }

    #[test]
    fn test_best_match_small_candidates() {
        let matcher = small();

        let result = matcher.match_province("北京");
        assert_eq!(result.matched_name, "北京市");
        assert!(result.ratio >= 0.7);

        assert_eq!(matcher.match_province("invalid"), MatchResult::none());
    }

    #[test]
    fn test_homophone_province() {
        let matcher = embedded();
        let result = matcher.match_province("伤害");
        assert_eq!(result.matched_name, "上海市");
        assert!(result.ratio >= 0.7);
        assert_eq!(
            matcher.match_province("伤害").matched_name,
            matcher.match_province("上海").matched_name
        );
    }

    #[test]
    fn test_long_suffix_province() {
        let matcher = embedded();
        assert_eq!(matcher.match_province("广西").matched_name, "广西壮族自治区");
        assert_eq!(matcher.match_province("新疆").matched_name, "新疆维吾尔自治区");
        assert_eq!(matcher.match_province("内蒙").matched_name, "内蒙古自治区");
    }

    #[test]
    fn test_homophone_names_exact_wins() {
        let matcher = embedded();
        assert_eq!(matcher.match_province("陕西省"), MatchResult::new("陕西省", 1.0));
        assert_eq!(matcher.match_province("山西省"), MatchResult::new("山西省", 1.0));
        // 同音且非原文：按规范顺序取先出现的山西省
        assert_eq!(matcher.match_province("陕西").matched_name, "山西省");
    }

    #[test]
    fn test_punctuation_tolerated() {
        let matcher = embedded();
        let result = matcher.match_province("重-庆市");
        assert_eq!(result.matched_name, "重庆市");
        assert_eq!(result.ratio, 1.0);
    }

    #[test]
    fn test_tie_breaks_by_order() {
        let entries = vec![
            ("甲".to_string(), vec!["上海".to_string()]),
            ("乙".to_string(), vec!["尚海".to_string()]),
        ];
        let matcher = PlaceMatcher::new(Arc::new(Gazetteer::from_entries(entries).unwrap()));
        let hit = matcher.match_city_anywhere("伤害").unwrap();
        assert_eq!(hit.province, "甲");
        assert_eq!(hit.city, MatchResult::new("上海", 1.0));
    }

    #[test]
    fn test_heteronym_city() {
        let matcher = embedded();
        assert_eq!(matcher.match_city("下门", "福建省"), MatchResult::new("厦门", 1.0));
        assert_eq!(matcher.match_city("常沙", "湖南省"), MatchResult::new("长沙", 1.0));

        let hit = matcher.match_city_anywhere("下门").unwrap();
        assert_eq!(hit.province, "福建省");
        assert_eq!(hit.city, MatchResult::new("厦门", 1.0));

        let hit = matcher.match_city_anywhere("常沙").unwrap();
        assert_eq!(hit.province, "湖南省");
        assert_eq!(hit.city, MatchResult::new("长沙", 1.0));
    }

    #[test]
    fn test_heteronym_keeps_common_reading() {
        // 重庆按常用读音 zhongqing 也能命中
        let matcher = embedded();
        assert_eq!(matcher.match_province("种庆市"), MatchResult::new("重庆市", 1.0));
        assert_eq!(matcher.match_province("崇庆市"), MatchResult::new("重庆市", 1.0));
    }

    #[test]
    fn test_exact_city_match() {
        let matcher = embedded();
        assert_eq!(matcher.match_city("平谷", "北京市"), MatchResult::new("平谷", 1.0));
    }

    #[test]
    fn test_similar_city_match() {
        let matcher = embedded();
        let result = matcher.match_city("平", "北京市");
        assert_eq!(result.matched_name, "平谷");
        assert!(result.ratio >= 0.6);

        let result = matcher.match_city("平谷区", "北京市");
        assert_eq!(result.matched_name, "平谷");
        assert!(result.ratio >= 0.8);
    }

    #[test]
    fn test_city_invalid_input() {
        let matcher = embedded();
        assert_eq!(matcher.match_city("invalid", "北京市"), MatchResult::none());
        assert_eq!(matcher.match_city("", "北京市"), MatchResult::none());
        assert_eq!(matcher.match_city("平谷", "invalid-province"), MatchResult::none());
    }

    #[test]
    fn test_city_empty_province() {
        let matcher = small();
        assert_eq!(matcher.match_city("上海", "上海市"), MatchResult::none());
    }

    #[test]
    fn test_city_anywhere() {
        let matcher = embedded();
        let hit = matcher.match_city_anywhere("平谷").unwrap();
        assert_eq!(hit.province, "北京市");
        assert_eq!(hit.city, MatchResult::new("平谷", 1.0));

        let hit = matcher.match_city_anywhere("深镇").unwrap();
        assert_eq!(hit.province, "广东省");
        assert_eq!(hit.city.matched_name, "深圳");

        assert!(matcher.match_city_anywhere("").is_none());
        assert!(matcher.match_city_anywhere("abc").is_none());
    }

    #[test]
    fn test_idempotent_on_gazetteer_names() {
        let matcher = embedded();
        for (province, cities) in matcher.gazetteer().iter() {
            assert_eq!(matcher.match_province(province).ratio, 1.0);
            for city in cities {
                assert_eq!(matcher.match_city(city, province), MatchResult::new(city.as_str(), 1.0));
            }
        }
    }

    #[test]
    fn test_extra_suffix_stays_above_threshold() {
        let matcher = embedded();
        let result = matcher.match_province("北京市区");
        assert_eq!(result.matched_name, "北京市");
        assert!(result.ratio >= 0.6);
        assert!(result.ratio <= 1.0);
    }

    #[test]
    fn test_province_score() {
        let matcher = embedded();
        assert_eq!(matcher.province_score("北京市", "北京市"), 1.0);
        assert!(matcher.province_score("北京", "北京市") >= 0.8);
        assert_eq!(matcher.province_score("北京", "火星"), 0.0);
    }
}
