//! 出生地校验
//!
//! 在请求转发给排盘服务之前，把用户填写的省 / 市换成地名表中的规范名称。
//! 低于阈值时返回带字段名的提示文本。

use std::sync::Arc;

use serde::Serialize;

use crate::location::matcher::PlaceMatcher;
use crate::location::types::{MatchThresholds, ValidationError};

/// 校验后的出生地（未填写的字段保持为 None）
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ValidatedLocation {
    pub province: Option<String>,
    pub city: Option<String>,
}

/// 出生地校验器
pub struct Validator {
    matcher: Arc<PlaceMatcher>,
    thresholds: MatchThresholds,
}

impl Validator {
    pub fn new(matcher: Arc<PlaceMatcher>, thresholds: MatchThresholds) -> Self {
        Self {
            matcher,
            thresholds,
        }
    }

    /// 校验省份，返回规范名称
    pub fn validate_province(&self, input: &str) -> Result<String, ValidationError> {
        let result = self.matcher.match_province(input);
        if result.is_empty() || result.ratio < self.thresholds.province_accept {
            tracing::info!(
                "省份校验失败: {:?} (最佳 {:?}, {:.3})",
                input,
                result.matched_name,
                result.ratio
            );
            return Err(ValidationError::InvalidProvince(input.to_string()));
        }
        Ok(result.matched_name)
    }

    /// 校验城市（需先通过省份校验），返回 (规范省份, 规范城市)
    pub fn validate_city(
        &self,
        province: &str,
        city: &str,
    ) -> Result<(String, String), ValidationError> {
        let province = self.validate_province(province)?;
        let result = self.matcher.match_city(city, &province);
        if result.is_empty() || result.ratio < self.thresholds.city_accept {
            tracing::info!(
                "城市校验失败: {:?} @ {} (最佳 {:?}, {:.3})",
                city,
                province,
                result.matched_name,
                result.ratio
            );
            return Err(ValidationError::InvalidCity(city.to_string()));
        }
        Ok((province, result.matched_name))
    }

    /// 校验请求中的省 / 市字段
    ///
    /// 空字段跳过校验。只填城市时跨省查找，需达到高置信分才接受。
    pub fn validate_location(
        &self,
        province: Option<&str>,
        city: Option<&str>,
    ) -> Result<ValidatedLocation, ValidationError> {
        let province = province.map(str::trim).filter(|s| !s.is_empty());
        let city = city.map(str::trim).filter(|s| !s.is_empty());

        match (province, city) {
            (None, None) => Ok(ValidatedLocation::default()),
            (Some(p), None) => Ok(ValidatedLocation {
                province: Some(self.validate_province(p)?),
                city: None,
            }),
            (Some(p), Some(c)) => {
                let (province, city) = self.validate_city(p, c)?;
                Ok(ValidatedLocation {
                    province: Some(province),
                    city: Some(city),
                })
            }
            (None, Some(c)) => match self.matcher.match_city_anywhere(c) {
                Some(hit) if hit.city.ratio >= self.thresholds.city_confident => {
                    Ok(ValidatedLocation {
                        province: Some(hit.province),
                        city: Some(hit.city.matched_name),
                    })
                }
                _ => Err(ValidationError::InvalidCity(c.to_string())),
            },
        }
    }
}
