// ==========================================
// 灾害救援决策支持核心 - 评估配置读取 Trait
// ==========================================
// 职责: 定义引擎所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::scoring_profile::{ResourceRates, ScoringProfile, ValidationLimits};
use crate::error::ReliefResult;

// ==========================================
// AssessmentConfigReader Trait
// ==========================================
// 实现者: ConfigManager（内存 key-value + JSON 文件）
pub trait AssessmentConfigReader: Send + Sync {
    /// 获取优先级评分参数
    ///
    /// # 默认值
    /// - severity_weight=10, 人数档位 1000/100/10 -> 30/20/10
    /// - 阈值 critical=70, high=50, medium=30
    fn get_scoring_profile(&self) -> ReliefResult<ScoringProfile>;

    /// 获取资源估算参数（人均日需求 + 灾害类型系数）
    fn get_resource_rates(&self) -> ReliefResult<ResourceRates>;

    /// 获取报告校验阈值
    fn get_validation_limits(&self) -> ReliefResult<ValidationLimits>;

    /// 获取资源规划天数
    ///
    /// # 默认值
    /// - 7
    fn get_planning_horizon_days(&self) -> ReliefResult<u32>;
}
