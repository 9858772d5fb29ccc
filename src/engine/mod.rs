// ==========================================
// 灾害救援决策支持核心 - 引擎层
// ==========================================
// 职责: 实现业务规则引擎, 无状态, 无 I/O
// 约束: 所有评分规则必须可解释 (输出 breakdown / reason)
// ==========================================

pub mod communication;
pub mod community;
pub mod orchestrator;
pub mod priority;
pub mod recovery;
pub mod resource;
pub mod weather;

// 重导出核心引擎
pub use communication::CommunicationHub;
pub use community::CommunityTriage;
pub use orchestrator::ReportAssessor;
pub use priority::{PriorityScore, PriorityScorer, ScoreBreakdown};
pub use recovery::RecoveryPlanner;
pub use resource::ResourceEstimator;
pub use weather::WeatherMonitor;
