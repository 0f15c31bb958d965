//! 地名匹配类型定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 匹配结果
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchResult {
    /// 匹配到的规范名称（无匹配时为空）
    pub matched_name: String,
    /// 相似度 (0.0 - 1.0)，无匹配时为 0
    pub ratio: f64,
}

impl MatchResult {
    pub fn new(matched_name: impl Into<String>, ratio: f64) -> Self {
        Self {
            matched_name: matched_name.into(),
            ratio,
        }
    }

    /// 无匹配
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.matched_name.is_empty()
    }
}

/// 自由文本解析结果（省 + 可选的市）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Resolution {
    pub province: MatchResult,
    /// 未识别出城市时为空
    pub city: MatchResult,
    /// 整体置信度
    pub ratio: f64,
}

impl Resolution {
    /// 无匹配
    pub fn none() -> Self {
        Self::default()
    }

    /// 仅省份
    pub fn province_only(province: MatchResult) -> Self {
        let ratio = province.ratio;
        Self {
            province,
            city: MatchResult::none(),
            ratio,
        }
    }

    /// 省份 + 城市
    pub fn with_city(province: MatchResult, city: MatchResult, ratio: f64) -> Self {
        Self {
            province,
            city,
            ratio,
        }
    }

    /// 组合名称："省 市" / "省" / ""
    pub fn matched_name(&self) -> String {
        match (self.province.is_empty(), self.city.is_empty()) {
            (true, _) => String::new(),
            (false, true) => self.province.matched_name.clone(),
            (false, false) => format!(
                "{} {}",
                self.province.matched_name, self.city.matched_name
            ),
        }
    }

    /// 折叠为单个匹配结果
    pub fn to_match(&self) -> MatchResult {
        MatchResult::new(self.matched_name(), self.ratio)
    }
}

/// 匹配阈值
///
/// 匹配器本身只排序不拒绝，由调用方按这些阈值决定是否接受
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchThresholds {
    /// 省份可接受的最低分
    #[serde(default = "default_province_accept")]
    pub province_accept: f64,
    /// 省份高置信分（达到后城市只在该省内认定）
    #[serde(default = "default_province_confident")]
    pub province_confident: f64,
    /// 已知省份时城市可接受的最低分
    #[serde(default = "default_city_accept")]
    pub city_accept: f64,
    /// 跨省搜索城市时的高置信分
    #[serde(default = "default_city_confident")]
    pub city_confident: f64,
}

fn default_province_accept() -> f64 {
    0.6
}

fn default_province_confident() -> f64 {
    0.75
}

fn default_city_accept() -> f64 {
    0.6
}

fn default_city_confident() -> f64 {
    0.9
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            province_accept: default_province_accept(),
            province_confident: default_province_confident(),
            city_accept: default_city_accept(),
            city_confident: default_city_confident(),
        }
    }
}

impl MatchThresholds {
    /// 验证阈值配置
    pub fn validate(&self) -> anyhow::Result<()> {
        let fields = [
            ("province_accept", self.province_accept),
            ("province_confident", self.province_confident),
            ("city_accept", self.city_accept),
            ("city_confident", self.city_confident),
        ];
        for (name, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                anyhow::bail!("阈值 {} 必须在 0.0 到 1.0 之间，当前为 {}", name, value);
            }
        }
        if self.province_confident < self.province_accept {
            anyhow::bail!("province_confident 不能低于 province_accept");
        }
        if self.city_confident < self.city_accept {
            anyhow::bail!("city_confident 不能低于 city_accept");
        }
        Ok(())
    }
}

/// 查询错误
#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    /// 省份不在地名表中
    UnknownProvince(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProvince(name) => write!(f, "未知省份: {}", name),
        }
    }
}

impl std::error::Error for LookupError {}

/// 输入校验错误（面向用户的提示文本）
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    InvalidProvince(String),
    InvalidCity(String),
}

impl ValidationError {
    /// 出错的字段名
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidProvince(_) => "province",
            Self::InvalidCity(_) => "city",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProvince(input) => write!(
                f,
                "无效省份: {}\n 一般最后面需要带上“省市区”等 例：\"北京市\"",
                input
            ),
            Self::InvalidCity(input) => write!(
                f,
                "无效城市: {}\n 最后面一般不带上“县市区”等（除非带上后只有两个字）",
                input
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
