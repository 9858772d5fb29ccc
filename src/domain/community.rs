// ==========================================
// 灾害救援决策支持核心 - 社区报告
// ==========================================
// 市民观察上报, 通过他人确认累积可信度
// ==========================================

use crate::domain::report::Location;
use crate::domain::types::{CommunityCategory, VerificationStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 社区报告 (表单输入)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityReport {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub category: Option<CommunityCategory>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub confirmations: i64,
    #[serde(default)]
    pub media_count: u32,
    #[serde(default)]
    pub contact: Option<String>,
}

/// 社区报告汇总
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunitySummary {
    pub total: usize,
    pub by_category: BTreeMap<String, usize>,
    pub by_status: BTreeMap<String, usize>,
}

impl CommunitySummary {
    pub fn count_for_status(&self, status: VerificationStatus) -> usize {
        self.by_status.get(&status.to_string()).copied().unwrap_or(0)
    }
}
