// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use relief_core::config::{
    AssessmentConfigReader, ResourceRates, ScoringProfile, ValidationLimits,
};
use relief_core::error::{ReliefError, ReliefResult};

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub profile: ScoringProfile,
    pub rates: ResourceRates,
    pub limits: ValidationLimits,
    pub planning_horizon_days: u32,
    /// 为 true 时所有读取返回配置错误
    pub broken: bool,
}

impl MockConfig {
    /// 创建默认配置
    pub fn default() -> Self {
        Self {
            profile: ScoringProfile::default(),
            rates: ResourceRates::default(),
            limits: ValidationLimits::default(),
            planning_horizon_days: 7,
            broken: false,
        }
    }

    /// 严重度权重覆写
    pub fn with_severity_weight(weight: f64) -> Self {
        let mut config = Self::default();
        config.profile.severity_weight = weight;
        config
    }

    /// 描述长度下限覆写
    pub fn with_description_min_len(len: usize) -> Self {
        let mut config = Self::default();
        config.limits.description_min_len = len;
        config
    }

    pub fn broken() -> Self {
        let mut config = Self::default();
        config.broken = true;
        config
    }

    fn check(&self, key: &str) -> ReliefResult<()> {
        if self.broken {
            return Err(ReliefError::ConfigValueError {
                key: key.to_string(),
                value: String::new(),
                message: "mock config is broken".to_string(),
            });
        }
        Ok(())
    }
}

impl AssessmentConfigReader for MockConfig {
    fn get_scoring_profile(&self) -> ReliefResult<ScoringProfile> {
        self.check("severity_weight")?;
        Ok(self.profile.clone())
    }

    fn get_resource_rates(&self) -> ReliefResult<ResourceRates> {
        self.check("resource_rate_water")?;
        Ok(self.rates.clone())
    }

    fn get_validation_limits(&self) -> ReliefResult<ValidationLimits> {
        self.check("description_min_len")?;
        Ok(self.limits)
    }

    fn get_planning_horizon_days(&self) -> ReliefResult<u32> {
        self.check("planning_horizon_days")?;
        Ok(self.planning_horizon_days)
    }
}
