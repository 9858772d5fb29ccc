// ==========================================
// ReportImporter 集成测试
// ==========================================
// 测试目标: JSON / CSV 导入, 空单元格, 错误定位
// ==========================================


use relief_core::domain::report::Location;
use relief_core::error::ReliefError;
use relief_core::importer::{ReportImporter, SourceFormat};
use test_helpers::{create_reports_csv, create_reports_json, create_temp_file};

#[test]
fn test_import_csv_with_all_columns() {
    let file = create_reports_csv(&[
        "F-1,flood,Riverside,,,Water entering ground floors,4,320,Mia,555-010-2000,false",
        "Q-1,earthquake,,35.68,139.69,Several houses collapsed,5,1500,,,true",
        ",,,,,,,,,,",
    ]);

    let batch = ReportImporter::new().import_file(file.path()).unwrap();
    assert_eq!(batch.format, SourceFormat::Csv);
    assert_eq!(batch.reports.len(), 2);

    let flood = &batch.reports[0];
    assert_eq!(flood.location, Some(Location::Address("Riverside".to_string())));
    assert_eq!(flood.severity, Some(4));
    assert!(!flood.is_anonymous());

    let quake = &batch.reports[1];
    assert_eq!(quake.location, Some(Location::coordinates(35.68, 139.69)));
    assert!(quake.is_anonymous());
}

#[test]
fn test_import_csv_quoted_description() {
    let file = create_reports_csv(&[
        r#"C-1,wildfire,"Hill Road, North","","","Smoke seen, flames near houses",3,20,,,"#,
    ]);
    let batch = ReportImporter::new().import_file(file.path()).unwrap();
    let report = &batch.reports[0];
    assert_eq!(report.description.as_deref(), Some("Smoke seen, flames near houses"));
    assert_eq!(report.location, Some(Location::Address("Hill Road, North".to_string())));
    assert_eq!(report.reporter, None);
}

#[test]
fn test_import_json_array() {
    let file = create_reports_json(
        r#"[
            {"id": "J-1", "disasterType": "tornado", "location": "Main St",
             "description": "Roofs torn off", "severity": 4, "affectedPeople": 60,
             "reporter": {"anonymous": true}},
            {"id": "J-2", "disasterType": "drought", "location": {"lat": -1.5, "lng": 36.8},
             "reportedAt": "2026-03-14T09:05:00Z"}
        ]"#,
    );

    let batch = ReportImporter::new().import_file(file.path()).unwrap();
    assert_eq!(batch.format, SourceFormat::Json);
    assert_eq!(batch.reports.len(), 2);
    assert!(batch.reports[0].is_anonymous());
    assert_eq!(batch.reports[1].location, Some(Location::coordinates(-1.5, 36.8)));
    assert!(batch.reports[1].reported_at.is_some());
}

#[test]
fn test_import_errors() {
    let importer = ReportImporter::new();

    let bad_json = create_reports_json("{ not json");
    assert!(matches!(
        importer.import_file(bad_json.path()),
        Err(ReliefError::JsonParseError(_))
    ));

    let bad_lat = create_reports_csv(&["A,flood,,north,10,desc,3,1,,,"]);
    match importer.import_file(bad_lat.path()) {
        Err(ReliefError::TypeConversionError { row, field, .. }) => {
            assert_eq!(row, 1);
            assert_eq!(field, "lat");
        }
        other => panic!("unexpected result: {:?}", other),
    }

    let text = create_temp_file(".txt", "hello");
    assert!(matches!(
        importer.import_file(text.path()),
        Err(ReliefError::UnsupportedFormat(_))
    ));
}
