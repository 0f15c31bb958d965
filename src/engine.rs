//! 地名引擎
//!
//! 组合地名表、匹配器、自由文本解析器和校验器，共享同一份只读地名表

use std::sync::Arc;

use anyhow::Result;

use crate::config::ResolverConfig;
use crate::location::{
    CompositeResolver, Gazetteer, LookupError, MatchResult, MatchThresholds, PlaceMatcher,
    Resolution, ValidatedLocation, ValidationError, Validator,
};

/// 地名引擎（可复用，可跨线程共享）
pub struct PlaceEngine {
    matcher: Arc<PlaceMatcher>,
    resolver: CompositeResolver,
    validator: Validator,
}

impl PlaceEngine {
    /// 创建地名引擎
    ///
    /// # Arguments
    /// * `gazetteer` - 已加载的地名表
    /// * `thresholds` - 匹配阈值
    pub fn new(gazetteer: Gazetteer, thresholds: MatchThresholds) -> Self {
        let matcher = Arc::new(PlaceMatcher::new(Arc::new(gazetteer)));
        let resolver = CompositeResolver::new(matcher.clone(), thresholds);
        let validator = Validator::new(matcher.clone(), thresholds);

        Self {
            matcher,
            resolver,
            validator,
        }
    }

    /// 按配置创建（加载自定义或内置地名表）
    pub fn from_config(config: &ResolverConfig) -> Result<Self> {
        let gazetteer = config.gazetteer()?;
        tracing::info!("地名引擎已初始化: {} 个省份", gazetteer.len());
        Ok(Self::new(gazetteer, config.thresholds))
    }

    /// 使用内置地名表和默认阈值创建
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(Gazetteer::embedded()?, MatchThresholds::default()))
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        self.matcher.gazetteer()
    }

    /// 省份列表
    pub fn provinces(&self) -> &[String] {
        self.gazetteer().provinces()
    }

    /// 省份下的城市列表
    pub fn cities(&self, province: &str) -> Result<&[String], LookupError> {
        self.gazetteer().lookup_cities(province)
    }

    pub fn match_province(&self, input: &str) -> MatchResult {
        self.matcher.match_province(input)
    }

    pub fn match_city(&self, input: &str, province: &str) -> MatchResult {
        self.matcher.match_city(input, province)
    }

    pub fn resolve(&self, text: &str) -> Resolution {
        self.resolver.resolve(text)
    }

    pub fn validate(
        &self,
        province: Option<&str>,
        city: Option<&str>,
    ) -> Result<ValidatedLocation, ValidationError> {
        self.validator.validate_location(province, city)
    }
}
