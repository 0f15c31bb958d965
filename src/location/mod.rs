//! 地名匹配
//!
//! 将用户输入的省 / 市名称解析为地名表中的规范名称，容忍缺失或多余的
//! 行政区划后缀、部分输入以及拼音输入法造成的同音错字。
//!
//! ## 处理流程
//! 1. 输入与候选统一转为无声调拼音
//! 2. 按编辑距离计算相似度
//! 3. 取最高分候选，由调用方按阈值决定是否接受

pub mod gazetteer;
pub mod matcher;
pub mod resolver;
pub mod rules;
pub mod similarity;
pub mod tokenizer;
pub mod transliterate;
pub mod types;
pub mod validator;

pub use gazetteer::Gazetteer;
pub use matcher::{CityHit, PlaceMatcher};
pub use resolver::CompositeResolver;
pub use transliterate::to_roman;
pub use types::{LookupError, MatchResult, MatchThresholds, Resolution, ValidationError};
pub use validator::{ValidatedLocation, Validator};
