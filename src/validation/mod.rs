// ==========================================
// 灾害救援决策支持核心 - 校验层
// ==========================================
// 职责: 字段必填 + 数值范围校验, 输出逐条原因
// 级别: Error 阻断 / Warning 仅提示
// ==========================================

pub mod community_validator;
pub mod report_validator;

pub use community_validator::CommunityReportValidator;
pub use report_validator::ReportValidator;

use crate::domain::report::Location;
use serde::{Deserialize, Serialize};

/// 违规级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationLevel {
    Error,
    Warning,
}

/// 单条字段违规
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub level: ViolationLevel,
    pub message: String,
}

/// 校验结果
///
/// `errors` 只包含 Error 级别消息; Warning 不影响 `is_valid`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub violations: Vec<FieldViolation>,
}

impl ValidationResult {
    pub fn from_violations(violations: Vec<FieldViolation>) -> Self {
        let errors: Vec<String> = violations
            .iter()
            .filter(|v| v.level == ViolationLevel::Error)
            .map(|v| v.message.clone())
            .collect();

        Self {
            is_valid: errors.is_empty(),
            errors,
            violations,
        }
    }

    pub fn warnings(&self) -> Vec<String> {
        self.violations
            .iter()
            .filter(|v| v.level == ViolationLevel::Warning)
            .map(|v| v.message.clone())
            .collect()
    }

    /// 是否存在指定字段的 Error
    pub fn has_error_on(&self, field: &str) -> bool {
        self.violations
            .iter()
            .any(|v| v.level == ViolationLevel::Error && v.field == field)
    }
}

pub(crate) fn error(field: &str, message: impl Into<String>) -> FieldViolation {
    FieldViolation {
        field: field.to_string(),
        level: ViolationLevel::Error,
        message: message.into(),
    }
}

pub(crate) fn warning(field: &str, message: impl Into<String>) -> FieldViolation {
    FieldViolation {
        field: field.to_string(),
        level: ViolationLevel::Warning,
        message: message.into(),
    }
}

/// 纬度 [-90, 90], 经度 [-180, 180]
pub fn validate_coordinates(lat: f64, lng: f64) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        violations.push(error(
            "location",
            format!("Latitude must be between -90 and 90 (got {})", lat),
        ));
    }
    if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
        violations.push(error(
            "location",
            format!("Longitude must be between -180 and 180 (got {})", lng),
        ));
    }

    violations
}

/// 位置必填; 地址非空, 坐标在范围内
pub(crate) fn validate_location(location: Option<&Location>) -> Vec<FieldViolation> {
    match location {
        None => vec![error("location", "Location is required")],
        Some(Location::Address(addr)) if addr.trim().is_empty() => {
            vec![error("location", "Location is required")]
        }
        Some(Location::Address(_)) => Vec::new(),
        Some(Location::Coordinates { lat, lng }) => validate_coordinates(*lat, *lng),
    }
}
