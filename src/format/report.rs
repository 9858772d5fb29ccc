// ==========================================
// 灾害救援决策支持核心 - 报告格式化
// ==========================================
// 职责: 报告编号生成 + 报告展示字段 + 一行摘要
// ==========================================

use crate::domain::report::DisasterReport;
use crate::format::datetime::format_datetime;
use crate::format::units::group_thousands;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

/// 报告编号前缀
pub const REPORT_ID_PREFIX: &str = "DR";

/// 生成报告编号: "DR-YYYYMMDD-XXXXXXXX"
pub fn generate_report_id() -> String {
    generate_report_id_on(Utc::now().date_naive())
}

pub fn generate_report_id_on(date: NaiveDate) -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(8)
        .collect();
    format!(
        "{}-{}-{}",
        REPORT_ID_PREFIX,
        date.format("%Y%m%d"),
        suffix.to_uppercase()
    )
}

/// 严重度文字
pub fn severity_label(severity: u8) -> &'static str {
    match severity {
        0 | 1 => "Minor",
        2 => "Moderate",
        3 => "Significant",
        4 => "Severe",
        _ => "Catastrophic",
    }
}

/// 报告展示字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedReport {
    pub id: String,
    pub disaster_type: String,
    pub location: String,
    pub severity: String,
    pub affected: String,
    pub reporter: String,
    pub reported_at: Option<String>,
}

impl FormattedReport {
    /// 一行摘要
    pub fn summary(&self) -> String {
        format!(
            "{} [{}] at {}: {}, {}",
            self.id, self.disaster_type, self.location, self.severity, self.affected
        )
    }
}

/// 格式化报告 (无编号时生成)
pub fn format_report(report: &DisasterReport) -> FormattedReport {
    let id = report
        .id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(generate_report_id);

    let severity = report.severity_or_default();
    let people = report.affected_people_or_default();

    let location = report
        .location
        .as_ref()
        .map(|l| l.to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Unknown location".to_string());

    let reporter = if report.is_anonymous() {
        "Anonymous".to_string()
    } else {
        report
            .reporter
            .as_ref()
            .and_then(|r| r.name.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("Anonymous")
            .to_string()
    };

    FormattedReport {
        id,
        disaster_type: report.disaster_type().label().to_string(),
        location,
        severity: format!("Severity {}/5 ({})", severity, severity_label(severity)),
        affected: match people {
            1 => "1 person affected".to_string(),
            n => format!("{} people affected", group_thousands(n)),
        },
        reporter,
        reported_at: report.reported_at.as_ref().map(format_datetime),
    }
}
