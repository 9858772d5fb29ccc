// ==========================================
// 灾害救援决策支持核心 - 优先级评分引擎
// ==========================================
// 职责: 灾情报告 -> 优先级 (low / medium / high / critical)
// 算法: 严重度加权 + 人数档位 + 灾害大类, 夹到 [0, 100] 后分档
// ==========================================

mod scoring;

pub use scoring::ScoreBreakdown;

use crate::config::scoring_profile::ScoringProfile;
use crate::domain::report::DisasterReport;
use crate::domain::types::PriorityLevel;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use std::cmp::Ordering;
use tracing::instrument;

/// 评分结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityScore {
    pub score: f64,
    pub level: PriorityLevel,
    pub breakdown: ScoreBreakdown,
}

// ==========================================
// PriorityScorer - 优先级评分引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct PriorityScorer {
    profile: ScoringProfile,
}

impl PriorityScorer {
    /// 使用默认评分参数
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: ScoringProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算评分与优先级
    ///
    /// 缺失字段取中性值: severity=3, affectedPeople=0, disasterType=other
    pub fn score(&self, report: &DisasterReport) -> PriorityScore {
        let breakdown = scoring::compute_breakdown(report, &self.profile);
        let score = breakdown.total();
        let level = self.level_for_score(score);

        tracing::debug!(
            severity_points = breakdown.severity_points,
            population_points = breakdown.population_points,
            category_points = breakdown.category_points,
            score,
            level = %level,
            "优先级评分"
        );

        PriorityScore {
            score,
            level,
            breakdown,
        }
    }

    /// 仅返回优先级
    pub fn calculate_priority(&self, report: &DisasterReport) -> PriorityLevel {
        self.score(report).level
    }

    /// 分数分档
    pub fn level_for_score(&self, score: f64) -> PriorityLevel {
        if score >= self.profile.critical_threshold {
            PriorityLevel::Critical
        } else if score >= self.profile.high_threshold {
            PriorityLevel::High
        } else if score >= self.profile.medium_threshold {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Low
        }
    }

    /// 生成评分原因 (可解释性)
    ///
    /// # 返回
    /// JSON 格式的评分原因字符串
    pub fn explain(&self, report: &DisasterReport) -> String {
        let result = self.score(report);
        let disaster_type = report.disaster_type();

        json!({
            "inputs": {
                "severity": report.severity_or_default(),
                "affectedPeople": report.affected_people_or_default(),
                "disasterType": disaster_type.to_wire_str(),
                "category": disaster_type.category().to_string(),
            },
            "breakdown": result.breakdown,
            "score": result.score,
            "level": result.level,
        })
        .to_string()
    }

    /// 批量排序: 分数降序, 同分按上报时间升序 (无时间排后)
    #[instrument(skip(self, reports), fields(count = reports.len()))]
    pub fn rank(&self, reports: Vec<DisasterReport>) -> Vec<(DisasterReport, PriorityScore)> {
        let mut scored: Vec<(DisasterReport, PriorityScore)> = reports
            .into_iter()
            .map(|r| {
                let s = self.score(&r);
                (r, s)
            })
            .collect();

        scored.sort_by(|(ra, sa), (rb, sb)| {
            match sb.score.partial_cmp(&sa.score).unwrap_or(Ordering::Equal) {
                Ordering::Equal => {}
                other => return other,
            }
            compare_reported_at(ra.reported_at, rb.reported_at)
        });

        scored
    }
}

/// 上报时间比较: 早者优先, 缺失排后
fn compare_reported_at(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
