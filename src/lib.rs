//! 中文省 / 市地名匹配
//!
//! 在出生地信息转发给排盘服务之前，把用户输入的省 / 市名称解析为地名表中的规范名称。

pub mod config;
pub mod engine;
pub mod location;

pub use config::ResolverConfig;
pub use engine::PlaceEngine;
pub use location::{Gazetteer, MatchResult, MatchThresholds, Resolution};
