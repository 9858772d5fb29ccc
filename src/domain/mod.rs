// ==========================================
// 灾害救援决策支持核心 - 领域层
// ==========================================
// 职责: 实体与类型定义, 不含业务规则
// ==========================================

pub mod assessment;
pub mod community;
pub mod contact;
pub mod recovery;
pub mod report;
pub mod resource;
pub mod types;
pub mod weather;

pub use assessment::Assessment;
pub use community::{CommunityReport, CommunitySummary};
pub use contact::{EmergencyContact, EMERGENCY_CONTACTS, NATIONAL_REGION};
pub use recovery::{PhaseDuration, PlannedPhase, RecoveryPlan, RecoveryTimeline};
pub use report::{DisasterReport, Location, MediaAttachment, Reporter};
pub use resource::ResourceEstimate;
pub use types::{
    AlertSeverity, CommunityCategory, ContactType, DisasterCategory, DisasterType, PriorityLevel,
    RecoveryPhase, TimeUnit, VerificationStatus,
};
pub use weather::{WeatherAlert, WeatherAlertKind, WeatherReading};
