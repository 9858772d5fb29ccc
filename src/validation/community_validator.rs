// ==========================================
// 灾害救援决策支持核心 - 社区报告校验器
// ==========================================

use crate::domain::community::CommunityReport;
use crate::validation::report_validator::is_valid_contact;
use crate::validation::{error, validate_location, FieldViolation, ValidationResult};

const TITLE_MIN_LEN: usize = 3;
const TITLE_MAX_LEN: usize = 120;
const DESCRIPTION_MIN_LEN: usize = 10;
const MEDIA_MAX_FILES: u32 = 5;

#[derive(Debug, Clone, Copy, Default)]
pub struct CommunityReportValidator;

impl CommunityReportValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, report: &CommunityReport) -> ValidationResult {
        let mut violations: Vec<FieldViolation> = Vec::new();

        match report.title.as_deref().map(str::trim) {
            None | Some("") => violations.push(error("title", "Title is required")),
            Some(title) => {
                let len = title.chars().count();
                if !(TITLE_MIN_LEN..=TITLE_MAX_LEN).contains(&len) {
                    violations.push(error(
                        "title",
                        format!(
                            "Title must be between {} and {} characters",
                            TITLE_MIN_LEN, TITLE_MAX_LEN
                        ),
                    ));
                }
            }
        }

        if report.category.is_none() {
            violations.push(error("category", "Category is required"));
        }

        match report.description.as_deref().map(str::trim) {
            None | Some("") => violations.push(error("description", "Description is required")),
            Some(text) if text.chars().count() < DESCRIPTION_MIN_LEN => violations.push(error(
                "description",
                format!(
                    "Description must be at least {} characters",
                    DESCRIPTION_MIN_LEN
                ),
            )),
            Some(_) => {}
        }

        violations.extend(validate_location(report.location.as_ref()));

        if report.confirmations < 0 {
            violations.push(error("confirmations", "Confirmations cannot be negative"));
        }

        if report.media_count > MEDIA_MAX_FILES {
            violations.push(error(
                "media",
                format!("At most {} media files can be attached", MEDIA_MAX_FILES),
            ));
        }

        if let Some(contact) = report.contact.as_deref().map(str::trim) {
            if !contact.is_empty() && !is_valid_contact(contact) {
                violations.push(error(
                    "contact",
                    "Contact must be an email address or phone number",
                ));
            }
        }

        ValidationResult::from_violations(violations)
    }
}
