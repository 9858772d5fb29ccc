// ==========================================
// 灾害救援决策支持核心 - 核心库
// ==========================================
// 技术栈: Rust (同步, 无持久化)
// 系统定位: 决策支持 (优先级 / 资源 / 恢复时间线), 人工最终决策
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 校验层 - 字段与范围
pub mod validation;

// 引擎层 - 业务规则
pub mod engine;

// 格式化层 - 展示字符串
pub mod format;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 统一错误类型
pub mod error;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    AlertSeverity, ContactType, DisasterCategory, DisasterType, PriorityLevel, RecoveryPhase,
    TimeUnit, VerificationStatus,
};

// 领域实体
pub use domain::{
    Assessment, CommunityReport, DisasterReport, EmergencyContact, Location, RecoveryTimeline,
    ResourceEstimate, WeatherAlert, WeatherReading,
};

// 引擎
pub use engine::{
    CommunicationHub, CommunityTriage, PriorityScorer, RecoveryPlanner, ReportAssessor,
    ResourceEstimator, WeatherMonitor,
};

// 校验 / 导入 / 配置
pub use config::{AssessmentConfigReader, ConfigManager};
pub use error::{ReliefError, ReliefResult};
pub use importer::ReportImporter;
pub use validation::{ReportValidator, ValidationResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "relief-core";
