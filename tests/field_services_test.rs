// ==========================================
// 现场服务集成测试
// ==========================================
// 测试目标: 通信中心 / 气象监测 / 社区分诊 / 格式化
// ==========================================

mod helpers;

use chrono::{Duration, TimeZone, Utc};
use helpers::ReportBuilder;
use relief_core::domain::community::CommunityReport;
use relief_core::domain::report::Location;
use relief_core::domain::types::{
    AlertSeverity, CommunityCategory, ContactType, PriorityLevel, VerificationStatus,
};
use relief_core::domain::weather::WeatherReading;
use relief_core::engine::{CommunicationHub, CommunityTriage, ReportAssessor, WeatherMonitor};
use relief_core::format::{
    format_datetime, format_distance, format_phone_number, format_quantity, format_relative,
    format_temperature, format_wind_speed, TemperatureUnit, WindUnit,
};
use relief_core::validation::CommunityReportValidator;

// ==========================================
// 通信中心
// ==========================================

#[test]
fn test_broadcast_from_assessment() {
    let report = ReportBuilder::new("B-1")
        .disaster_type("earthquake")
        .severity(5)
        .affected_people(5000)
        .address("Harbor District")
        .build();
    let assessment = ReportAssessor::new().assess(&report).unwrap();

    let hub = CommunicationHub::new();
    let message = hub
        .compose_broadcast(
            assessment.priority,
            report.disaster_type(),
            "Harbor District",
            "Move to higher ground and avoid damaged buildings.",
        )
        .unwrap();

    assert_eq!(
        message,
        "[CRITICAL] EARTHQUAKE alert for Harbor District: Move to higher ground and avoid damaged buildings."
    );
    assert_eq!(hub.to_sms_segments(&message).len(), 1);
}

#[test]
fn test_long_broadcast_splits_into_segments() {
    let hub = CommunicationHub::new();
    let body = "Shelters are open at the north school and the central stadium. ".repeat(6);
    let message = hub
        .compose_broadcast(PriorityLevel::High, relief_core::DisasterType::Flood, "Riverside", &body)
        .unwrap();

    let segments = hub.to_sms_segments(&message);
    assert!(segments.len() > 1);
    let total = segments.len();
    for (i, segment) in segments.iter().enumerate() {
        assert!(segment.starts_with(&format!("({}/{}) ", i + 1, total)));
        assert!(segment.chars().count() <= 160);
    }
}

#[test]
fn test_region_lookup_and_phone_display() {
    let hub = CommunicationHub::new();
    let coastal = hub.contacts_for_region("  COASTAL ");
    assert_eq!(coastal[0].name, "Coastal Guard Station");
    assert_eq!(format_phone_number(coastal[0].phone), "(555) 030-3001");

    let shelters = hub.contacts_by_type(ContactType::Shelter);
    assert!(shelters.iter().any(|c| c.region == "national"));
    assert_eq!(format_phone_number("911"), "911");
}

// ==========================================
// 气象监测
// ==========================================

#[test]
fn test_weather_storm_and_flood() {
    let reading = WeatherReading {
        location: Location::coordinates(25.76, -80.19),
        temperature_c: 29.0,
        wind_speed_kmh: 125.0,
        precipitation_mm: 60.0,
        humidity_pct: 95.0,
        observed_at: None,
    };
    let monitor = WeatherMonitor::new();
    let alerts = monitor.assess(&reading).unwrap();

    assert_eq!(alerts.len(), 2);
    assert!(alerts.iter().all(|a| a.severity == AlertSeverity::Warning));
    assert!(alerts[0].message.contains("25.7600, -80.1900"));
    assert_eq!(monitor.highest_severity(&alerts), Some(AlertSeverity::Warning));
}

// ==========================================
// 社区分诊
// ==========================================

fn community_report(category: CommunityCategory, confirmations: i64) -> CommunityReport {
    CommunityReport {
        id: Some(format!("C-{}", confirmations)),
        category: Some(category),
        title: Some("Bridge cracked".to_string()),
        description: Some("Large crack across the river bridge deck.".to_string()),
        location: Some(Location::Address("Old Bridge".to_string())),
        confirmations,
        media_count: 1,
        contact: None,
    }
}

#[test]
fn test_community_triage_flow() {
    let reports = vec![
        community_report(CommunityCategory::InfrastructureDamage, 0),
        community_report(CommunityCategory::InfrastructureDamage, 4),
        community_report(CommunityCategory::MissingPerson, 12),
    ];

    let validator = CommunityReportValidator::new();
    assert!(reports.iter().all(|r| validator.validate(r).is_valid));

    let triage = CommunityTriage::new();
    assert_eq!(triage.urgency(&reports[0]), PriorityLevel::Medium);
    assert_eq!(triage.urgency(&reports[2]), PriorityLevel::Critical);

    let summary = triage.summarize(&reports);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.count_for_status(VerificationStatus::Unverified), 1);
    assert_eq!(summary.count_for_status(VerificationStatus::PartiallyVerified), 1);
    assert_eq!(summary.count_for_status(VerificationStatus::Verified), 1);
}

// ==========================================
// 格式化
// ==========================================

#[test]
fn test_formatters_have_unit_suffixes() {
    assert_eq!(format_temperature(21.5, TemperatureUnit::Celsius), "21.5°C");
    assert_eq!(format_temperature(21.5, TemperatureUnit::Fahrenheit), "70.7°F");
    assert_eq!(format_wind_speed(15.0, WindUnit::Kmh), "15 km/h");
    assert_eq!(format_quantity(1250, "liters"), "1,250 liters");
    assert_eq!(format_distance(0.85), "850 m");
    assert_eq!(format_distance(2.4), "2.4 km");

    let now = Utc.with_ymd_and_hms(2026, 3, 14, 9, 5, 0).unwrap();
    assert_eq!(format_datetime(&now), "2026-03-14 09:05 UTC");
    assert_eq!(format_relative(&(now - Duration::hours(3)), &now), "3 hours ago");
}
