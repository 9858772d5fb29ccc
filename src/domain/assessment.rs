// ==========================================
// 灾害救援决策支持核心 - 报告评估结果
// ==========================================

use crate::domain::recovery::RecoveryTimeline;
use crate::domain::resource::ResourceEstimate;
use crate::domain::types::PriorityLevel;
use serde::{Deserialize, Serialize};

/// 单份报告的评估结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub report_id: String,
    pub priority: PriorityLevel,
    pub score: f64,
    pub resources: ResourceEstimate,
    pub timeline: RecoveryTimeline,
    pub summary: String,
    /// 校验警告 (不影响有效性)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}
