// ==========================================
// 灾害救援决策支持核心 - 配置层
// ==========================================
// 职责: 评分/估算/校验参数管理, 支持 JSON 文件覆写
// ==========================================

pub mod config_manager;
pub mod config_reader_trait;
pub mod scoring_profile;

// 重导出核心配置管理器
pub use config_manager::{config_keys, default_config_path, ConfigManager};
pub use config_reader_trait::AssessmentConfigReader;
pub use scoring_profile::{PopulationBucket, ResourceRates, ScoringProfile, ValidationLimits};
