// ==========================================
// ResourceEstimator 集成测试
// ==========================================
// 测试目标: 灾害类型系数 / 严重度比例 / 向上取整 / 规划天数
// ==========================================

mod helpers;

use helpers::{MockConfig, ReportBuilder};
use relief_core::config::AssessmentConfigReader;
use relief_core::domain::types::DisasterType;
use relief_core::engine::ResourceEstimator;

fn water_for(disaster_type: &str) -> u64 {
    let report = ReportBuilder::new("W")
        .disaster_type(disaster_type)
        .severity(3)
        .affected_people(1000)
        .build();
    ResourceEstimator::new().estimate(&report).water_liters
}

#[test]
fn test_multiplier_table() {
    // 1000 × 15 × 系数
    assert_eq!(water_for("earthquake"), 22_500);
    assert_eq!(water_for("tsunami"), 24_000);
    assert_eq!(water_for("hurricane"), 21_000);
    assert_eq!(water_for("flood"), 19_500);
    assert_eq!(water_for("tornado"), 18_000);
    assert_eq!(water_for("wildfire"), 18_000);
    assert_eq!(water_for("landslide"), 16_500);
    assert_eq!(water_for("drought"), 12_000);
    assert_eq!(water_for("other"), 15_000);
    assert_eq!(water_for("volcano"), 15_000);
}

#[test]
fn test_every_field_scales_with_multiplier() {
    let estimator = ResourceEstimator::new();
    let base = estimator.estimate(
        &ReportBuilder::new("A").disaster_type("other").affected_people(10_000).build(),
    );
    let tsunami = estimator.estimate(
        &ReportBuilder::new("B").disaster_type("tsunami").affected_people(10_000).build(),
    );

    assert_eq!(tsunami.personnel, base.personnel * 16 / 10);
    assert_eq!(tsunami.food_rations, base.food_rations * 16 / 10);
    assert_eq!(tsunami.medical_kits, base.medical_kits * 16 / 10);
    assert_eq!(tsunami.shelter_units, base.shelter_units * 16 / 10);
}

#[test]
fn test_monotonic_in_severity_and_people() {
    let estimator = ResourceEstimator::new();
    let mut previous = 0;
    for severity in 1..=5 {
        let report = ReportBuilder::new("S").severity(severity).affected_people(500).build();
        let water = estimator.estimate(&report).water_liters;
        assert!(water >= previous);
        previous = water;
    }

    let mut previous = 0;
    for people in [1, 10, 100, 1000, 10_000] {
        let report = ReportBuilder::new("S").affected_people(people).build();
        let kits = estimator.estimate(&report).medical_kits;
        assert!(kits >= previous);
        previous = kits;
    }
}

#[test]
fn test_horizon_from_config() {
    let mut config = MockConfig::default();
    config.planning_horizon_days = 3;
    config.rates.type_multipliers.insert(DisasterType::Flood, 1.0);

    let estimator = ResourceEstimator::with_rates(config.get_resource_rates().unwrap());
    let report = ReportBuilder::new("H").disaster_type("flood").affected_people(100).build();

    let total = estimator.estimate_for_days(&report, config.get_planning_horizon_days().unwrap());
    assert_eq!(total.water_liters, 4_500);
    assert_eq!(total.food_rations, 900);
    assert_eq!(total.shelter_units, 20);
}
