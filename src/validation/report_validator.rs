// ==========================================
// 灾害救援决策支持核心 - 灾情报告校验器
// ==========================================
// 规则: 必填字段 / 严重度 1-5 / 坐标范围 / 附件限制 / 报告人联系方式
// ==========================================

use crate::config::scoring_profile::ValidationLimits;
use crate::domain::report::{DisasterReport, Reporter, MAX_SEVERITY, MIN_SEVERITY};
use crate::validation::{error, validate_location, warning, FieldViolation, ValidationResult};

/// 允许的附件类型
pub const ALLOWED_MIME_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "video/mp4",
];

// ==========================================
// ReportValidator - 灾情报告校验器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ReportValidator {
    limits: ValidationLimits,
}

impl ReportValidator {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    /// 校验整份报告
    pub fn validate(&self, report: &DisasterReport) -> ValidationResult {
        let mut violations = Vec::new();

        violations.extend(self.validate_required_fields(report));
        violations.extend(self.validate_ranges(report));
        violations.extend(self.validate_media(report));
        if let Some(reporter) = &report.reporter {
            violations.extend(self.validate_reporter(reporter));
        }

        let result = ValidationResult::from_violations(violations);
        if !result.is_valid {
            tracing::debug!(
                report_id = report.id.as_deref().unwrap_or("-"),
                errors = result.errors.len(),
                "报告校验未通过"
            );
        }
        result
    }

    /// 校验必填字段 (类型/位置/描述/严重度)
    fn validate_required_fields(&self, report: &DisasterReport) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        match report.disaster_type.as_deref().map(str::trim) {
            None | Some("") => violations.push(error("disasterType", "Disaster type is required")),
            Some(_) => {}
        }

        violations.extend(validate_location(report.location.as_ref()));

        match report.description.as_deref().map(str::trim) {
            None | Some("") => violations.push(error("description", "Description is required")),
            Some(text) => {
                let len = text.chars().count();
                if len < self.limits.description_min_len {
                    violations.push(error(
                        "description",
                        format!(
                            "Description must be at least {} characters",
                            self.limits.description_min_len
                        ),
                    ));
                } else if len > self.limits.description_max_len {
                    violations.push(error(
                        "description",
                        format!(
                            "Description must be at most {} characters",
                            self.limits.description_max_len
                        ),
                    ));
                }
            }
        }

        if report.severity.is_none() {
            violations.push(error("severity", "Severity is required"));
        }

        violations
    }

    /// 校验数值范围
    fn validate_ranges(&self, report: &DisasterReport) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        if let Some(severity) = report.severity {
            if severity < MIN_SEVERITY as i64 || severity > MAX_SEVERITY as i64 {
                violations.push(error(
                    "severity",
                    format!(
                        "Severity must be between {} and {} (got {})",
                        MIN_SEVERITY, MAX_SEVERITY, severity
                    ),
                ));
            }
        }

        if let Some(people) = report.affected_people {
            if people < 0 {
                violations.push(error(
                    "affectedPeople",
                    format!("Affected people cannot be negative (got {})", people),
                ));
            } else if people as u64 > self.limits.affected_people_warning {
                violations.push(warning(
                    "affectedPeople",
                    format!(
                        "Affected people count {} is unusually high, please double-check",
                        people
                    ),
                ));
            }
        }

        violations
    }

    /// 校验附件数量/大小/类型
    fn validate_media(&self, report: &DisasterReport) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        if report.media.len() > self.limits.media_max_files {
            violations.push(error(
                "media",
                format!(
                    "At most {} media files can be attached (got {})",
                    self.limits.media_max_files,
                    report.media.len()
                ),
            ));
        }

        for attachment in &report.media {
            if attachment.size_bytes > self.limits.media_max_bytes {
                violations.push(error(
                    "media",
                    format!(
                        "File {} exceeds the {} MB size limit",
                        attachment.file_name,
                        self.limits.media_max_bytes / (1024 * 1024)
                    ),
                ));
            }
            let mime = attachment.mime_type.trim().to_lowercase();
            if !ALLOWED_MIME_TYPES.contains(&mime.as_str()) {
                violations.push(error(
                    "media",
                    format!(
                        "File {} has unsupported type {}",
                        attachment.file_name, attachment.mime_type
                    ),
                ));
            }
        }

        violations
    }

    /// 校验报告人 (匿名时跳过)
    fn validate_reporter(&self, reporter: &Reporter) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        if reporter.anonymous {
            return violations;
        }

        if reporter.name.as_deref().map(str::trim).unwrap_or("").is_empty() {
            violations.push(error("reporter.name", "Reporter name is required"));
        }

        match reporter.contact.as_deref().map(str::trim) {
            None | Some("") => {
                violations.push(error("reporter.contact", "Reporter contact is required"))
            }
            Some(contact) if !is_valid_contact(contact) => violations.push(error(
                "reporter.contact",
                "Reporter contact must be an email address or phone number",
            )),
            Some(_) => {}
        }

        violations
    }
}

/// 联系方式: 邮箱 或 7-15 位数字电话
pub fn is_valid_contact(contact: &str) -> bool {
    is_valid_email(contact) || is_valid_phone(contact)
}

pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.contains(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
                    .unwrap_or(false)
        }
        None => false,
    }
}

pub fn is_valid_phone(value: &str) -> bool {
    let value = value.trim();
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+' | '.'));
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    allowed && (7..=15).contains(&digits)
}
