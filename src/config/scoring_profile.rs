use crate::domain::types::{DisasterCategory, DisasterType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 人数档位加分
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationBucket {
    /// 档位下限（含）
    pub min_people: u64,
    pub bonus: f64,
}

/// 优先级评分参数
///
/// score = severity × severity_weight + 人数档位加分 + 灾害大类加分，夹到 [0, 100]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringProfile {
    pub severity_weight: f64,

    /// 命中的档位中取最高加分, 与排列顺序无关
    pub population_buckets: Vec<PopulationBucket>,

    pub geological_bonus: f64,
    pub hydrological_bonus: f64,
    pub meteorological_bonus: f64,
    pub climatological_bonus: f64,
    pub other_bonus: f64,

    pub critical_threshold: f64,
    pub high_threshold: f64,
    pub medium_threshold: f64,
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self {
            severity_weight: 10.0,
            population_buckets: vec![
                PopulationBucket { min_people: 1000, bonus: 30.0 },
                PopulationBucket { min_people: 100, bonus: 20.0 },
                PopulationBucket { min_people: 10, bonus: 10.0 },
            ],
            geological_bonus: 15.0,
            hydrological_bonus: 10.0,
            meteorological_bonus: 15.0,
            climatological_bonus: 5.0,
            other_bonus: 0.0,
            critical_threshold: 70.0,
            high_threshold: 50.0,
            medium_threshold: 30.0,
        }
    }
}

impl ScoringProfile {
    pub fn category_bonus(&self, category: DisasterCategory) -> f64 {
        match category {
            DisasterCategory::Geological => self.geological_bonus,
            DisasterCategory::Hydrological => self.hydrological_bonus,
            DisasterCategory::Meteorological => self.meteorological_bonus,
            DisasterCategory::Climatological => self.climatological_bonus,
            DisasterCategory::Other => self.other_bonus,
        }
    }

    pub fn population_bonus(&self, affected_people: u64) -> f64 {
        self.population_buckets
            .iter()
            .filter(|b| affected_people >= b.min_people)
            .map(|b| b.bonus)
            .fold(0.0, f64::max)
    }
}

/// 资源估算参数（人均日需求 + 灾害类型系数）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRates {
    pub personnel_per_capita: f64,
    pub water_liters_per_capita: f64,
    pub food_rations_per_capita: f64,
    pub medical_kits_per_capita: f64,
    pub shelter_units_per_capita: f64,
    pub type_multipliers: HashMap<DisasterType, f64>,
}

impl Default for ResourceRates {
    fn default() -> Self {
        let type_multipliers = [
            (DisasterType::Earthquake, 1.5),
            (DisasterType::Tsunami, 1.6),
            (DisasterType::Hurricane, 1.4),
            (DisasterType::Flood, 1.3),
            (DisasterType::Tornado, 1.2),
            (DisasterType::Wildfire, 1.2),
            (DisasterType::Landslide, 1.1),
            (DisasterType::Drought, 0.8),
            (DisasterType::Other, 1.0),
        ]
        .into_iter()
        .collect();

        Self {
            personnel_per_capita: 0.05,
            water_liters_per_capita: 15.0,
            food_rations_per_capita: 3.0,
            medical_kits_per_capita: 0.1,
            shelter_units_per_capita: 0.2,
            type_multipliers,
        }
    }
}

impl ResourceRates {
    /// 灾害类型系数（表中缺失按 1.0）
    pub fn multiplier(&self, disaster_type: DisasterType) -> f64 {
        self.type_multipliers
            .get(&disaster_type)
            .copied()
            .unwrap_or(1.0)
    }
}

/// 报告校验阈值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationLimits {
    pub description_min_len: usize,
    pub description_max_len: usize,
    pub media_max_files: usize,
    pub media_max_bytes: u64,
    /// 超过该人数仅给出警告
    pub affected_people_warning: u64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            description_min_len: 10,
            description_max_len: 2000,
            media_max_files: 5,
            media_max_bytes: 10 * 1024 * 1024,
            affected_people_warning: 10_000_000,
        }
    }
}
