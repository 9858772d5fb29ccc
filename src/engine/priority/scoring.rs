use crate::config::scoring_profile::ScoringProfile;
use crate::domain::report::DisasterReport;
use serde::Serialize;

/// 评分分项
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub severity_points: f64,
    pub population_points: f64,
    pub category_points: f64,
}

impl ScoreBreakdown {
    /// 分项合计, 夹到 [0, 100]
    pub fn total(&self) -> f64 {
        (self.severity_points + self.population_points + self.category_points).clamp(0.0, 100.0)
    }
}

pub(super) fn compute_breakdown(report: &DisasterReport, profile: &ScoringProfile) -> ScoreBreakdown {
    let severity = report.severity_or_default() as f64;
    let affected = report.affected_people_or_default();
    let category = report.disaster_type().category();

    ScoreBreakdown {
        severity_points: severity * profile.severity_weight,
        population_points: profile.population_bonus(affected),
        category_points: profile.category_bonus(category),
    }
}
