// ==========================================
// 灾害救援决策支持核心 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: 内存 key-value (global scope), 可由 JSON 文件覆写
// ==========================================

use crate::config::config_reader_trait::AssessmentConfigReader;
use crate::config::scoring_profile::{
    PopulationBucket, ResourceRates, ScoringProfile, ValidationLimits,
};
use crate::domain::types::DisasterType;
use crate::error::{ReliefError, ReliefResult};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    values: BTreeMap<String, String>,
}

impl ConfigManager {
    /// 创建使用默认值的 ConfigManager
    pub fn new() -> Self {
        let values = default_values()
            .into_iter()
            .map(|(k, v)| (k, v.to_string()))
            .collect();
        Self { values }
    }

    /// 从 JSON 文件加载（覆写默认值）
    ///
    /// 文件格式: 扁平 JSON 对象, 值可为字符串/数字/布尔
    pub fn from_json_file(path: &Path) -> ReliefResult<Self> {
        if !path.exists() {
            return Err(ReliefError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let mut manager = Self::new();
        manager.apply_json(&content)?;

        tracing::info!(path = %path.display(), "配置文件已加载");
        Ok(manager)
    }

    /// 以 JSON 文本覆写配置
    pub fn apply_json(&mut self, content: &str) -> ReliefResult<()> {
        let parsed: Value = serde_json::from_str(content)?;
        let object = parsed
            .as_object()
            .ok_or_else(|| ReliefError::ConfigFormatError("top level is not an object".into()))?;

        for (key, value) in object {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => {
                    return Err(ReliefError::ConfigFormatError(format!(
                        "key {} has non-scalar value {}",
                        key, other
                    )))
                }
            };
            if !self.values.contains_key(key) {
                tracing::warn!(key = %key, "未知配置键, 已保留但不会被读取");
            }
            self.values.insert(key.clone(), text);
        }

        Ok(())
    }

    /// 读取 global scope 的配置值
    pub fn get_global_config_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    /// 覆写单个配置值
    pub fn set_global_config_value(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// 列出全部配置（按键排序）
    pub fn list_global_configs(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// 读取并解析配置值
    fn get_parsed<T: FromStr>(&self, key: &str) -> ReliefResult<T>
    where
        T::Err: std::fmt::Display,
    {
        let raw = match self.values.get(key) {
            Some(v) => v.trim().to_string(),
            None => default_values()
                .into_iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.to_string())
                .ok_or_else(|| ReliefError::ConfigValueError {
                    key: key.to_string(),
                    value: String::new(),
                    message: "no such key".to_string(),
                })?,
        };

        raw.parse::<T>().map_err(|e| ReliefError::ConfigValueError {
            key: key.to_string(),
            value: raw.clone(),
            message: e.to_string(),
        })
    }

    fn get_f64(&self, key: &str) -> ReliefResult<f64> {
        let value: f64 = self.get_parsed(key)?;
        if !value.is_finite() || value < 0.0 {
            return Err(ReliefError::ConfigValueError {
                key: key.to_string(),
                value: value.to_string(),
                message: "must be a finite non-negative number".to_string(),
            });
        }
        Ok(value)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// AssessmentConfigReader 实现
// ==========================================
impl AssessmentConfigReader for ConfigManager {
    fn get_scoring_profile(&self) -> ReliefResult<ScoringProfile> {
        use config_keys::*;

        let mut keyed_buckets = Vec::with_capacity(3);
        for (min_key, bonus_key) in [
            (POPULATION_LARGE_MIN, POPULATION_LARGE_BONUS),
            (POPULATION_MEDIUM_MIN, POPULATION_MEDIUM_BONUS),
            (POPULATION_SMALL_MIN, POPULATION_SMALL_BONUS),
        ] {
            let bucket = PopulationBucket {
                min_people: self.get_parsed(min_key)?,
                bonus: self.get_f64(bonus_key)?,
            };
            keyed_buckets.push((bonus_key, bucket));
        }
        keyed_buckets.sort_by(|a, b| b.1.min_people.cmp(&a.1.min_people));

        // 人数越多加分不能越少
        for pair in keyed_buckets.windows(2) {
            let (larger_key, larger) = pair[0];
            let (_, smaller) = pair[1];
            if larger.bonus < smaller.bonus {
                return Err(ReliefError::ConfigValueError {
                    key: larger_key.to_string(),
                    value: larger.bonus.to_string(),
                    message: format!(
                        "population bonus for >= {} people must not be below the bonus for >= {} people",
                        larger.min_people, smaller.min_people
                    ),
                });
            }
        }
        let population_buckets = keyed_buckets.into_iter().map(|(_, b)| b).collect();

        let profile = ScoringProfile {
            severity_weight: self.get_f64(SEVERITY_WEIGHT)?,
            population_buckets,
            geological_bonus: self.get_f64(CATEGORY_BONUS_GEOLOGICAL)?,
            hydrological_bonus: self.get_f64(CATEGORY_BONUS_HYDROLOGICAL)?,
            meteorological_bonus: self.get_f64(CATEGORY_BONUS_METEOROLOGICAL)?,
            climatological_bonus: self.get_f64(CATEGORY_BONUS_CLIMATOLOGICAL)?,
            other_bonus: self.get_f64(CATEGORY_BONUS_OTHER)?,
            critical_threshold: self.get_f64(PRIORITY_THRESHOLD_CRITICAL)?,
            high_threshold: self.get_f64(PRIORITY_THRESHOLD_HIGH)?,
            medium_threshold: self.get_f64(PRIORITY_THRESHOLD_MEDIUM)?,
        };

        if !(profile.medium_threshold <= profile.high_threshold
            && profile.high_threshold <= profile.critical_threshold)
        {
            return Err(ReliefError::ConfigValueError {
                key: PRIORITY_THRESHOLD_HIGH.to_string(),
                value: profile.high_threshold.to_string(),
                message: "thresholds must satisfy medium <= high <= critical".to_string(),
            });
        }

        Ok(profile)
    }

    fn get_resource_rates(&self) -> ReliefResult<ResourceRates> {
        use config_keys::*;

        let mut type_multipliers = std::collections::HashMap::new();
        for disaster_type in DisasterType::ALL {
            let key = resource_multiplier_key(disaster_type);
            type_multipliers.insert(disaster_type, self.get_f64(&key)?);
        }

        Ok(ResourceRates {
            personnel_per_capita: self.get_f64(RESOURCE_RATE_PERSONNEL)?,
            water_liters_per_capita: self.get_f64(RESOURCE_RATE_WATER)?,
            food_rations_per_capita: self.get_f64(RESOURCE_RATE_FOOD)?,
            medical_kits_per_capita: self.get_f64(RESOURCE_RATE_MEDICAL)?,
            shelter_units_per_capita: self.get_f64(RESOURCE_RATE_SHELTER)?,
            type_multipliers,
        })
    }

    fn get_validation_limits(&self) -> ReliefResult<ValidationLimits> {
        use config_keys::*;

        let limits = ValidationLimits {
            description_min_len: self.get_parsed(DESCRIPTION_MIN_LEN)?,
            description_max_len: self.get_parsed(DESCRIPTION_MAX_LEN)?,
            media_max_files: self.get_parsed(MEDIA_MAX_FILES)?,
            media_max_bytes: self.get_parsed(MEDIA_MAX_BYTES)?,
            affected_people_warning: self.get_parsed(AFFECTED_PEOPLE_WARNING)?,
        };

        if limits.description_min_len > limits.description_max_len {
            return Err(ReliefError::ConfigValueError {
                key: DESCRIPTION_MIN_LEN.to_string(),
                value: limits.description_min_len.to_string(),
                message: "must not exceed description_max_len".to_string(),
            });
        }

        Ok(limits)
    }

    fn get_planning_horizon_days(&self) -> ReliefResult<u32> {
        let days: u32 = self.get_parsed(config_keys::PLANNING_HORIZON_DAYS)?;
        if days == 0 {
            return Err(ReliefError::ConfigValueError {
                key: config_keys::PLANNING_HORIZON_DAYS.to_string(),
                value: "0".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(days)
    }
}

/// 默认配置文件路径: <config_dir>/relief-core/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("relief-core").join("config.json"))
}

// ==========================================
// 默认值表
// ==========================================
fn default_values() -> Vec<(String, &'static str)> {
    use config_keys::*;

    let mut values: Vec<(String, &'static str)> = vec![
        (SEVERITY_WEIGHT.into(), "10"),
        (POPULATION_LARGE_MIN.into(), "1000"),
        (POPULATION_LARGE_BONUS.into(), "30"),
        (POPULATION_MEDIUM_MIN.into(), "100"),
        (POPULATION_MEDIUM_BONUS.into(), "20"),
        (POPULATION_SMALL_MIN.into(), "10"),
        (POPULATION_SMALL_BONUS.into(), "10"),
        (CATEGORY_BONUS_GEOLOGICAL.into(), "15"),
        (CATEGORY_BONUS_HYDROLOGICAL.into(), "10"),
        (CATEGORY_BONUS_METEOROLOGICAL.into(), "15"),
        (CATEGORY_BONUS_CLIMATOLOGICAL.into(), "5"),
        (CATEGORY_BONUS_OTHER.into(), "0"),
        (PRIORITY_THRESHOLD_CRITICAL.into(), "70"),
        (PRIORITY_THRESHOLD_HIGH.into(), "50"),
        (PRIORITY_THRESHOLD_MEDIUM.into(), "30"),
        (RESOURCE_RATE_PERSONNEL.into(), "0.05"),
        (RESOURCE_RATE_WATER.into(), "15"),
        (RESOURCE_RATE_FOOD.into(), "3"),
        (RESOURCE_RATE_MEDICAL.into(), "0.1"),
        (RESOURCE_RATE_SHELTER.into(), "0.2"),
        (DESCRIPTION_MIN_LEN.into(), "10"),
        (DESCRIPTION_MAX_LEN.into(), "2000"),
        (MEDIA_MAX_FILES.into(), "5"),
        (MEDIA_MAX_BYTES.into(), "10485760"),
        (AFFECTED_PEOPLE_WARNING.into(), "10000000"),
        (PLANNING_HORIZON_DAYS.into(), "7"),
    ];

    let multipliers = [
        (DisasterType::Earthquake, "1.5"),
        (DisasterType::Tsunami, "1.6"),
        (DisasterType::Hurricane, "1.4"),
        (DisasterType::Flood, "1.3"),
        (DisasterType::Tornado, "1.2"),
        (DisasterType::Wildfire, "1.2"),
        (DisasterType::Landslide, "1.1"),
        (DisasterType::Drought, "0.8"),
        (DisasterType::Other, "1.0"),
    ];
    for (disaster_type, value) in multipliers {
        values.push((resource_multiplier_key(disaster_type), value));
    }

    values
}

fn resource_multiplier_key(disaster_type: DisasterType) -> String {
    format!(
        "{}{}",
        config_keys::RESOURCE_MULTIPLIER_PREFIX,
        disaster_type.to_wire_str()
    )
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 优先级评分
    pub const SEVERITY_WEIGHT: &str = "severity_weight";
    pub const POPULATION_LARGE_MIN: &str = "population_large_min";
    pub const POPULATION_LARGE_BONUS: &str = "population_large_bonus";
    pub const POPULATION_MEDIUM_MIN: &str = "population_medium_min";
    pub const POPULATION_MEDIUM_BONUS: &str = "population_medium_bonus";
    pub const POPULATION_SMALL_MIN: &str = "population_small_min";
    pub const POPULATION_SMALL_BONUS: &str = "population_small_bonus";
    pub const CATEGORY_BONUS_GEOLOGICAL: &str = "category_bonus_geological";
    pub const CATEGORY_BONUS_HYDROLOGICAL: &str = "category_bonus_hydrological";
    pub const CATEGORY_BONUS_METEOROLOGICAL: &str = "category_bonus_meteorological";
    pub const CATEGORY_BONUS_CLIMATOLOGICAL: &str = "category_bonus_climatological";
    pub const CATEGORY_BONUS_OTHER: &str = "category_bonus_other";
    pub const PRIORITY_THRESHOLD_CRITICAL: &str = "priority_threshold_critical";
    pub const PRIORITY_THRESHOLD_HIGH: &str = "priority_threshold_high";
    pub const PRIORITY_THRESHOLD_MEDIUM: &str = "priority_threshold_medium";

    // 资源估算
    pub const RESOURCE_RATE_PERSONNEL: &str = "resource_rate_personnel";
    pub const RESOURCE_RATE_WATER: &str = "resource_rate_water";
    pub const RESOURCE_RATE_FOOD: &str = "resource_rate_food";
    pub const RESOURCE_RATE_MEDICAL: &str = "resource_rate_medical";
    pub const RESOURCE_RATE_SHELTER: &str = "resource_rate_shelter";
    /// 后接灾害类型, 如 resource_multiplier_flood
    pub const RESOURCE_MULTIPLIER_PREFIX: &str = "resource_multiplier_";

    // 报告校验
    pub const DESCRIPTION_MIN_LEN: &str = "description_min_len";
    pub const DESCRIPTION_MAX_LEN: &str = "description_max_len";
    pub const MEDIA_MAX_FILES: &str = "media_max_files";
    pub const MEDIA_MAX_BYTES: &str = "media_max_bytes";
    pub const AFFECTED_PEOPLE_WARNING: &str = "affected_people_warning";

    // 恢复规划
    pub const PLANNING_HORIZON_DAYS: &str = "planning_horizon_days";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_builtin_profiles() {
        let manager = ConfigManager::new();
        assert_eq!(manager.get_scoring_profile().unwrap(), ScoringProfile::default());
        assert_eq!(manager.get_resource_rates().unwrap(), ResourceRates::default());
        assert_eq!(
            manager.get_validation_limits().unwrap(),
            ValidationLimits::default()
        );
        assert_eq!(manager.get_planning_horizon_days().unwrap(), 7);
    }

    #[test]
    fn test_apply_json_overrides_values() {
        let mut manager = ConfigManager::new();
        manager
            .apply_json(r#"{"severity_weight": 12, "resource_multiplier_flood": "2.0"}"#)
            .unwrap();

        assert_eq!(manager.get_scoring_profile().unwrap().severity_weight, 12.0);
        assert_eq!(
            manager
                .get_resource_rates()
                .unwrap()
                .multiplier(DisasterType::Flood),
            2.0
        );
    }

    #[test]
    fn test_malformed_value_is_reported() {
        let mut manager = ConfigManager::new();
        manager.set_global_config_value(config_keys::SEVERITY_WEIGHT, "heavy");

        match manager.get_scoring_profile() {
            Err(ReliefError::ConfigValueError { key, value, .. }) => {
                assert_eq!(key, "severity_weight");
                assert_eq!(value, "heavy");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_threshold_order_is_enforced() {
        let mut manager = ConfigManager::new();
        manager.set_global_config_value(config_keys::PRIORITY_THRESHOLD_HIGH, "90");
        assert!(manager.get_scoring_profile().is_err());
    }

    #[test]
    fn test_population_bonus_order_is_enforced() {
        let mut manager = ConfigManager::new();
        manager.set_global_config_value(config_keys::POPULATION_LARGE_BONUS, "5");
        match manager.get_scoring_profile() {
            Err(ReliefError::ConfigValueError { key, .. }) => {
                assert_eq!(key, config_keys::POPULATION_LARGE_BONUS);
            }
            other => panic!("unexpected result: {:?}", other),
        }

        // 下限调换顺序后按人数重新排列
        let mut manager = ConfigManager::new();
        manager.set_global_config_value(config_keys::POPULATION_SMALL_MIN, "5000");
        manager.set_global_config_value(config_keys::POPULATION_SMALL_BONUS, "40");
        let profile = manager.get_scoring_profile().unwrap();
        assert_eq!(profile.population_buckets[0].min_people, 5000);
        assert_eq!(profile.population_bonus(6000), 40.0);
    }

    #[test]
    fn test_non_object_json_rejected() {
        let mut manager = ConfigManager::new();
        assert!(matches!(
            manager.apply_json("[1, 2]"),
            Err(ReliefError::ConfigFormatError(_))
        ));
        assert!(matches!(
            manager.apply_json(r#"{"severity_weight": [1]}"#),
            Err(ReliefError::ConfigFormatError(_))
        ));
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let mut manager = ConfigManager::new();
        manager.set_global_config_value(config_keys::PLANNING_HORIZON_DAYS, "0");
        assert!(manager.get_planning_horizon_days().is_err());
    }
}
