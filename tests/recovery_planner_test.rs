// ==========================================
// RecoveryPlanner 集成测试
// ==========================================
// 测试目标: 阶段下限 / 严重度比例 / 计划排期
// ==========================================

mod helpers;

use chrono::NaiveDate;
use helpers::ReportBuilder;
use relief_core::domain::types::{DisasterType, RecoveryPhase, TimeUnit};
use relief_core::engine::RecoveryPlanner;

#[test]
fn test_units_are_fixed_per_phase() {
    let planner = RecoveryPlanner::new();
    for disaster_type in DisasterType::ALL {
        let timeline = planner.timeline_for(disaster_type, 3);
        assert_eq!(timeline.immediate.unit, TimeUnit::Hours);
        assert_eq!(timeline.short_term.unit, TimeUnit::Days);
        assert_eq!(timeline.medium_term.unit, TimeUnit::Weeks);
        assert_eq!(timeline.long_term.unit, TimeUnit::Months);
    }
}

#[test]
fn test_minimums_hold_for_every_input() {
    let planner = RecoveryPlanner::new();
    for disaster_type in DisasterType::ALL {
        for severity in 1..=5 {
            let timeline = planner.timeline_for(disaster_type, severity);
            assert!(timeline.immediate.duration >= 24);
            assert!(timeline.short_term.duration >= 7);
            assert!(timeline.medium_term.duration >= 4);
            assert!(timeline.long_term.duration >= 3);
        }
    }
}

#[test]
fn test_durations_non_decreasing_in_severity() {
    let planner = RecoveryPlanner::new();
    for disaster_type in DisasterType::ALL {
        let mut previous = 0;
        for severity in 1..=5 {
            let total = planner.timeline_for(disaster_type, severity).total_days();
            assert!(total >= previous, "{} severity {}", disaster_type, severity);
            previous = total;
        }
    }
}

#[test]
fn test_out_of_range_severity_is_clamped() {
    let planner = RecoveryPlanner::new();
    let extreme = ReportBuilder::new("X").disaster_type("hurricane").severity(99).build();
    assert_eq!(
        planner.generate_timeline(&extreme),
        planner.timeline_for(DisasterType::Hurricane, 5)
    );
}

#[test]
fn test_plan_schedule() {
    let start = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
    let report = ReportBuilder::new("Q").disaster_type("earthquake").severity(3).build();
    let plan = RecoveryPlanner::new().plan(&report, start);

    let phases: Vec<RecoveryPhase> = plan.phases.iter().map(|p| p.phase).collect();
    assert_eq!(phases, RecoveryPhase::ALL.to_vec());

    // 72 小时 = 3 天
    assert_eq!(plan.phases[0].ends_on, NaiveDate::from_ymd_opt(2026, 6, 4).unwrap());
    assert!(plan.phases.iter().all(|p| !p.tasks.is_empty()));
    assert!(plan.phases[1]
        .tasks
        .iter()
        .any(|t| t.contains("structural safety")));

    // 3 + 30 + 182 + 720
    assert_eq!(plan.timeline.total_days(), 935);
    assert_eq!(
        plan.completion_date(),
        NaiveDate::from_ymd_opt(2026, 6, 1).map(|d| d + chrono::Duration::days(935))
    );
}
