//! 地名表
//!
//! 省份有序列表 + 每个省份下的有序城市列表。加载后只读。
//! 列表顺序即规范枚举顺序，匹配平分时按此顺序取第一个。

use anyhow::Result;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::location::types::LookupError;

/// 内置地名数据
const EMBEDDED_GAZETTEER: &str = include_str!("../../resources/gazetteer.json");

/// JSON 文件格式
#[derive(Debug, Deserialize)]
struct GazetteerFile {
    provinces: Vec<ProvinceEntry>,
}

#[derive(Debug, Deserialize)]
struct ProvinceEntry {
    name: String,
    #[serde(default)]
    cities: Vec<String>,
}

/// 地名表（不可变）
#[derive(Debug, Clone)]
pub struct Gazetteer {
    provinces: Vec<String>,
    /// 与 provinces 下标一一对应
    cities: Vec<Vec<String>>,
    /// 省份名 → 下标
    index: HashMap<String, usize>,
}

impl Gazetteer {
    /// 从 (省份, 城市列表) 构建，校验唯一性
    pub fn from_entries(entries: Vec<(String, Vec<String>)>) -> Result<Self> {
        let mut provinces = Vec::with_capacity(entries.len());
        let mut cities = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());

        for (province, city_list) in entries {
            let province = province.trim().to_string();
            if province.is_empty() {
                anyhow::bail!("地名表中存在空的省份名称");
            }
            if index.contains_key(&province) {
                anyhow::bail!("地名表中省份重复: {}", province);
            }

            let city_list: Vec<String> = city_list
                .into_iter()
                .map(|city| city.trim().to_string())
                .collect();
            let mut seen: HashSet<&str> = HashSet::with_capacity(city_list.len());
            for city in &city_list {
                if city.is_empty() {
                    anyhow::bail!("省份 {} 下存在空的城市名称", province);
                }
                if !seen.insert(city.as_str()) {
                    anyhow::bail!("省份 {} 下城市重复: {}", province, city);
                }
            }

            index.insert(province.clone(), provinces.len());
            provinces.push(province);
            cities.push(city_list);
        }

        Ok(Self {
            provinces,
            cities,
            index,
        })
    }

    /// 从 JSON 文本加载
    pub fn from_json(content: &str) -> Result<Self> {
        let file: GazetteerFile = serde_json::from_str(content)?;
        let entries = file
            .provinces
            .into_iter()
            .map(|p| (p.name, p.cities))
            .collect();
        Self::from_entries(entries)
    }

    /// 从 JSON 文件加载
    pub fn from_path(path: &Path) -> Result<Self> {
        tracing::info!("从文件加载地名表: {:?}", path);
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("读取地名表失败 {:?}: {}", path, e))?;
        Self::from_json(&content)
    }

    /// 加载内置地名表
    pub fn embedded() -> Result<Self> {
        let gazetteer = Self::from_json(EMBEDDED_GAZETTEER)?;
        tracing::debug!(
            "内置地名表已加载: {} 个省份, {} 个城市",
            gazetteer.provinces.len(),
            gazetteer.cities.iter().map(Vec::len).sum::<usize>()
        );
        Ok(gazetteer)
    }

    /// 全部省份（规范顺序）
    pub fn provinces(&self) -> &[String] {
        &self.provinces
    }

    /// 省份下的城市，省份不存在时返回 None
    pub fn cities(&self, province: &str) -> Option<&[String]> {
        self.index
            .get(province)
            .map(|&i| self.cities[i].as_slice())
    }

    /// 城市查询接口：省份不存在时返回明确的错误
    pub fn lookup_cities(&self, province: &str) -> Result<&[String], LookupError> {
        self.cities(province)
            .ok_or_else(|| LookupError::UnknownProvince(province.to_string()))
    }

    pub fn contains_province(&self, province: &str) -> bool {
        self.index.contains_key(province)
    }

    /// 省份在规范顺序中的下标
    pub fn province_index(&self, province: &str) -> Option<usize> {
        self.index.get(province).copied()
    }

    /// 按规范顺序遍历 (省份, 城市列表)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.provinces
            .iter()
            .zip(self.cities.iter())
            .map(|(p, c)| (p.as_str(), c.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.provinces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty()
    }
}
