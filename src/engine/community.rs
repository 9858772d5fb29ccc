// ==========================================
// 灾害救援决策支持核心 - 社区报告分诊引擎
// ==========================================
// 职责: 确认数 -> 核实状态; 类别 + 核实 -> 紧急程度; 批量汇总
// ==========================================

use crate::domain::community::{CommunityReport, CommunitySummary};
use crate::domain::types::{CommunityCategory, PriorityLevel, VerificationStatus};
use tracing::instrument;

/// 部分核实所需确认数
const PARTIAL_CONFIRMATIONS: i64 = 3;
/// 完全核实所需确认数
const VERIFIED_CONFIRMATIONS: i64 = 10;

fn category_base(category: Option<CommunityCategory>) -> u32 {
    match category {
        Some(CommunityCategory::MissingPerson) | Some(CommunityCategory::Hazard) => 3,
        Some(CommunityCategory::InfrastructureDamage) | Some(CommunityCategory::ResourceNeed) => 2,
        Some(CommunityCategory::Other) | None => 1,
    }
}

// ==========================================
// CommunityTriage - 社区报告分诊引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct CommunityTriage;

impl CommunityTriage {
    pub fn new() -> Self {
        Self
    }

    /// <3 未核实, 3-9 部分核实, >=10 已核实
    pub fn verification_status(&self, confirmations: i64) -> VerificationStatus {
        if confirmations >= VERIFIED_CONFIRMATIONS {
            VerificationStatus::Verified
        } else if confirmations >= PARTIAL_CONFIRMATIONS {
            VerificationStatus::PartiallyVerified
        } else {
            VerificationStatus::Unverified
        }
    }

    /// 类别基准分 + 已核实加 1; >=4 critical, 3 high, 2 medium, 其余 low
    pub fn urgency(&self, report: &CommunityReport) -> PriorityLevel {
        let mut points = category_base(report.category);
        if self.verification_status(report.confirmations) == VerificationStatus::Verified {
            points += 1;
        }

        match points {
            p if p >= 4 => PriorityLevel::Critical,
            3 => PriorityLevel::High,
            2 => PriorityLevel::Medium,
            _ => PriorityLevel::Low,
        }
    }

    /// 按类别与核实状态计数
    #[instrument(skip(self, reports), fields(count = reports.len()))]
    pub fn summarize(&self, reports: &[CommunityReport]) -> CommunitySummary {
        let mut summary = CommunitySummary {
            total: reports.len(),
            ..Default::default()
        };

        for report in reports {
            let category = report
                .category
                .map(|c| c.to_string())
                .unwrap_or_else(|| "uncategorized".to_string());
            *summary.by_category.entry(category).or_insert(0) += 1;

            let status = self.verification_status(report.confirmations).to_string();
            *summary.by_status.entry(status).or_insert(0) += 1;
        }

        summary
    }
}
