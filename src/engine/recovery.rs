// ==========================================
// 灾害救援决策支持核心 - 恢复规划引擎
// ==========================================
// 职责: 灾害类型 + 严重度 -> 四阶段恢复时间线 + 阶段排期
// 规则: 基准时长 × (严重度 / 3), 向上取整, 不低于阶段下限
// ==========================================

use crate::domain::recovery::{PhaseDuration, PlannedPhase, RecoveryPlan, RecoveryTimeline};
use crate::domain::report::{DisasterReport, DEFAULT_SEVERITY};
use crate::domain::types::{DisasterType, RecoveryPhase};
use chrono::{Duration, NaiveDate};

/// 阶段下限: 24 小时 / 7 天 / 4 周 / 3 月
const MIN_IMMEDIATE_HOURS: u32 = 24;
const MIN_SHORT_TERM_DAYS: u32 = 7;
const MIN_MEDIUM_TERM_WEEKS: u32 = 4;
const MIN_LONG_TERM_MONTHS: u32 = 3;

/// 基准时长 (小时, 天, 周, 月)
fn base_durations(disaster_type: DisasterType) -> [u32; 4] {
    match disaster_type {
        DisasterType::Earthquake => [72, 30, 26, 24],
        DisasterType::Tsunami => [72, 30, 26, 24],
        DisasterType::Hurricane => [48, 21, 16, 18],
        DisasterType::Flood => [48, 14, 12, 12],
        DisasterType::Tornado => [24, 14, 8, 9],
        DisasterType::Wildfire => [48, 21, 12, 12],
        DisasterType::Landslide => [48, 14, 10, 9],
        DisasterType::Drought => [24, 30, 26, 18],
        DisasterType::Other => [24, 14, 8, 6],
    }
}

fn phase_minimum(phase: RecoveryPhase) -> u32 {
    match phase {
        RecoveryPhase::Immediate => MIN_IMMEDIATE_HOURS,
        RecoveryPhase::ShortTerm => MIN_SHORT_TERM_DAYS,
        RecoveryPhase::MediumTerm => MIN_MEDIUM_TERM_WEEKS,
        RecoveryPhase::LongTerm => MIN_LONG_TERM_MONTHS,
    }
}

fn phase_tasks(phase: RecoveryPhase) -> &'static [&'static str] {
    match phase {
        RecoveryPhase::Immediate => &[
            "Search and rescue operations",
            "Emergency medical triage",
            "Establish temporary shelters",
            "Distribute water and food",
        ],
        RecoveryPhase::ShortTerm => &[
            "Restore critical utilities",
            "Clear debris from access routes",
            "Set up field clinics and sanitation",
            "Register displaced households",
        ],
        RecoveryPhase::MediumTerm => &[
            "Repair damaged housing",
            "Reopen schools and health facilities",
            "Restore local markets and livelihoods",
            "Provide psychosocial support",
        ],
        RecoveryPhase::LongTerm => &[
            "Rebuild infrastructure to resilient standards",
            "Update land-use and hazard maps",
            "Strengthen early-warning systems",
            "Run community preparedness training",
        ],
    }
}

/// 灾种特有的短期任务
fn hazard_specific_task(disaster_type: DisasterType) -> Option<&'static str> {
    match disaster_type {
        DisasterType::Earthquake => Some("Inspect structural safety of buildings"),
        DisasterType::Tsunami => Some("Survey coastline and clear marine debris"),
        DisasterType::Hurricane => Some("Secure damaged roofs and power lines"),
        DisasterType::Flood => Some("Pump out flooded areas and test water supply"),
        DisasterType::Tornado => Some("Secure damaged roofs and power lines"),
        DisasterType::Wildfire => Some("Monitor air quality and stabilise burned slopes"),
        DisasterType::Landslide => Some("Assess slope stability and reroute traffic"),
        DisasterType::Drought => Some("Set up water trucking and livestock support"),
        DisasterType::Other => None,
    }
}

// ==========================================
// RecoveryPlanner - 恢复规划引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct RecoveryPlanner;

impl RecoveryPlanner {
    pub fn new() -> Self {
        Self
    }

    /// 生成恢复时间线 (缺失严重度按 3)
    pub fn generate_timeline(&self, report: &DisasterReport) -> RecoveryTimeline {
        self.timeline_for(report.disaster_type(), report.severity_or_default())
    }

    /// 按灾害类型与严重度生成时间线
    pub fn timeline_for(&self, disaster_type: DisasterType, severity: u8) -> RecoveryTimeline {
        let base = base_durations(disaster_type);
        let ratio = severity as f64 / DEFAULT_SEVERITY as f64;

        let scaled = |index: usize, phase: RecoveryPhase| -> PhaseDuration {
            let raw = (base[index] as f64 * ratio * 1e6).round() / 1e6;
            let duration = (raw.ceil() as u32).max(phase_minimum(phase));
            PhaseDuration::new(duration, phase.unit())
        };

        RecoveryTimeline {
            immediate: scaled(0, RecoveryPhase::Immediate),
            short_term: scaled(1, RecoveryPhase::ShortTerm),
            medium_term: scaled(2, RecoveryPhase::MediumTerm),
            long_term: scaled(3, RecoveryPhase::LongTerm),
        }
    }

    /// 生成恢复计划
    ///
    /// 阶段首尾相接; `ends_on` 即下一阶段的 `starts_on`
    /// 超出可表示的日期范围时截止于 `NaiveDate::MAX`
    pub fn plan(&self, report: &DisasterReport, start_date: NaiveDate) -> RecoveryPlan {
        let disaster_type = report.disaster_type();
        let timeline = self.generate_timeline(report);

        let mut cursor = start_date;
        let mut phases = Vec::with_capacity(RecoveryPhase::ALL.len());

        for phase in RecoveryPhase::ALL {
            let duration = timeline.phase(phase);
            let ends_on = cursor
                .checked_add_signed(Duration::days(duration.in_days() as i64))
                .unwrap_or(NaiveDate::MAX);

            let mut tasks: Vec<String> = phase_tasks(phase).iter().map(|t| t.to_string()).collect();
            if phase == RecoveryPhase::ShortTerm {
                if let Some(task) = hazard_specific_task(disaster_type) {
                    tasks.push(task.to_string());
                }
            }

            phases.push(PlannedPhase {
                phase,
                duration,
                starts_on: cursor,
                ends_on,
                tasks,
            });
            cursor = ends_on;
        }

        tracing::debug!(
            disaster_type = %disaster_type,
            total_days = timeline.total_days(),
            "恢复计划生成"
        );

        RecoveryPlan { timeline, phases }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::TimeUnit;

    fn create_test_report(disaster_type: &str, severity: Option<i64>) -> DisasterReport {
        DisasterReport {
            disaster_type: Some(disaster_type.to_string()),
            severity,
            ..Default::default()
        }
    }

    #[test]
    fn test_baseline_severity_uses_table() {
        let timeline = RecoveryPlanner::new().generate_timeline(&create_test_report("earthquake", Some(3)));
        assert_eq!(timeline.immediate, PhaseDuration::new(72, TimeUnit::Hours));
        assert_eq!(timeline.short_term, PhaseDuration::new(30, TimeUnit::Days));
        assert_eq!(timeline.medium_term, PhaseDuration::new(26, TimeUnit::Weeks));
        assert_eq!(timeline.long_term, PhaseDuration::new(24, TimeUnit::Months));
    }

    #[test]
    fn test_missing_severity_defaults_to_three() {
        let planner = RecoveryPlanner::new();
        assert_eq!(
            planner.generate_timeline(&create_test_report("flood", None)),
            planner.generate_timeline(&create_test_report("flood", Some(3)))
        );
    }

    #[test]
    fn test_scales_with_severity_and_rounds_up() {
        let planner = RecoveryPlanner::new();
        let timeline = planner.generate_timeline(&create_test_report("flood", Some(5)));
        // 48 × 5/3 = 80, 14 × 5/3 = 23.3 -> 24, 12 × 5/3 = 20, 12 × 5/3 = 20
        assert_eq!(timeline.immediate.duration, 80);
        assert_eq!(timeline.short_term.duration, 24);
        assert_eq!(timeline.medium_term.duration, 20);
        assert_eq!(timeline.long_term.duration, 20);
    }

    #[test]
    fn test_minimums_enforced() {
        let timeline = RecoveryPlanner::new().generate_timeline(&create_test_report("other", Some(1)));
        assert_eq!(timeline.immediate.duration, 24);
        assert_eq!(timeline.short_term.duration, 7);
        assert_eq!(timeline.medium_term.duration, 4);
        assert_eq!(timeline.long_term.duration, 3);
    }

    #[test]
    fn test_plan_phases_are_contiguous() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let plan = RecoveryPlanner::new().plan(&create_test_report("tornado", Some(3)), start);

        assert_eq!(plan.phases.len(), 4);
        assert_eq!(plan.phases[0].starts_on, start);
        // 24 小时 = 1 天
        assert_eq!(plan.phases[0].ends_on, NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
        for pair in plan.phases.windows(2) {
            assert_eq!(pair[0].ends_on, pair[1].starts_on);
        }
        // 1 + 14 + 56 + 270
        assert_eq!(plan.timeline.total_days(), 341);
        assert_eq!(
            plan.completion_date(),
            Some(start + Duration::days(341))
        );
    }

    #[test]
    fn test_plan_saturates_at_max_date() {
        let start = NaiveDate::MAX - Duration::days(10);
        let plan = RecoveryPlanner::new().plan(&create_test_report("earthquake", Some(5)), start);

        assert_eq!(plan.phases[0].starts_on, start);
        assert_eq!(plan.completion_date(), Some(NaiveDate::MAX));
        for pair in plan.phases.windows(2) {
            assert_eq!(pair[0].ends_on, pair[1].starts_on);
        }
    }

    #[test]
    fn test_plan_adds_hazard_specific_task() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let planner = RecoveryPlanner::new();

        let flood = planner.plan(&create_test_report("flood", Some(2)), start);
        assert!(flood.phases[1]
            .tasks
            .iter()
            .any(|t| t.contains("Pump out flooded areas")));

        let other = planner.plan(&create_test_report("other", Some(2)), start);
        assert_eq!(other.phases[1].tasks.len(), 4);
    }
}
