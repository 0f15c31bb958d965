// src/config.rs

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::location::{Gazetteer, MatchThresholds};

const APP_DIR_NAME: &str = "PlaceMatch";
const CONFIG_FILENAME: &str = "config.json";

// ============================================================================
// 解析器配置
// ============================================================================

/// 解析器配置
///
/// 缺失字段使用默认值，旧文件可直接读取
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// 匹配阈值
    #[serde(default)]
    pub thresholds: MatchThresholds,
    /// 自定义地名表路径（为空时使用内置数据）
    #[serde(default)]
    pub gazetteer_path: Option<PathBuf>,
}

impl ResolverConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        let app_dir = config_dir.join(APP_DIR_NAME);
        Ok(app_dir.join(CONFIG_FILENAME))
    }

    /// 从默认位置加载配置，文件不存在时返回默认配置
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from_path(&path)
    }

    /// 从指定路径加载配置
    ///
    /// - 文件不存在：返回默认配置
    /// - 文件无法解析：记录警告并返回默认配置
    /// - 阈值不合法：返回错误
    pub fn load_from_path(path: &Path) -> Result<Self> {
        tracing::info!("尝试从以下路径加载配置: {:?}", path);

        if !path.exists() {
            tracing::info!("配置文件不存在，使用默认配置");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: ResolverConfig = match serde_json::from_str(&content) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("解析配置失败，使用默认配置: {}", e);
                return Ok(Self::default());
            }
        };

        config
            .thresholds
            .validate()
            .map_err(|e| anyhow::anyhow!("配置文件中的阈值无效: {}", e))?;

        Ok(config)
    }

    /// 保存到默认位置
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to_path(&path)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        self.thresholds.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!("配置已保存到: {:?}", path);
        Ok(())
    }

    /// 加载配置指定的地名表，未指定时使用内置数据
    pub fn gazetteer(&self) -> Result<Gazetteer> {
        match &self.gazetteer_path {
            Some(path) => Gazetteer::from_path(path),
            None => Gazetteer::embedded(),
        }
    }
}
