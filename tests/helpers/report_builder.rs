// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::{DateTime, TimeZone, Utc};
use relief_core::domain::report::{DisasterReport, Location, MediaAttachment, Reporter};

// ==========================================
// DisasterReport 构建器
// ==========================================
// 默认生成一份可通过校验的报告

pub struct ReportBuilder {
    report: DisasterReport,
}

impl ReportBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            report: DisasterReport {
                id: Some(id.to_string()),
                disaster_type: Some("flood".to_string()),
                location: Some(Location::Address("Riverside District".to_string())),
                description: Some("Water has entered homes along the river bank.".to_string()),
                severity: Some(3),
                affected_people: Some(100),
                media: Vec::new(),
                reporter: Some(Reporter {
                    name: Some("Field Volunteer".to_string()),
                    contact: Some("volunteer@example.org".to_string()),
                    anonymous: false,
                }),
                reported_at: None,
            },
        }
    }

    pub fn disaster_type(mut self, disaster_type: &str) -> Self {
        self.report.disaster_type = Some(disaster_type.to_string());
        self
    }

    pub fn severity(mut self, severity: i64) -> Self {
        self.report.severity = Some(severity);
        self
    }

    pub fn affected_people(mut self, people: i64) -> Self {
        self.report.affected_people = Some(people);
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.report.location = Some(Location::Address(address.to_string()));
        self
    }

    pub fn coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.report.location = Some(Location::coordinates(lat, lng));
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.report.description = Some(description.to_string());
        self
    }

    pub fn media(mut self, file_name: &str, mime_type: &str, size_bytes: u64) -> Self {
        self.report.media.push(MediaAttachment {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            size_bytes,
        });
        self
    }

    pub fn reporter(mut self, name: &str, contact: &str) -> Self {
        self.report.reporter = Some(Reporter {
            name: Some(name.to_string()),
            contact: Some(contact.to_string()),
            anonymous: false,
        });
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.report.reporter = Some(Reporter::anonymous());
        self
    }

    /// 上报时间: 2026-03-01 的第 hour 时
    pub fn reported_at_hour(mut self, hour: u32) -> Self {
        self.report.reported_at = Some(at_hour(hour));
        self
    }

    pub fn without_location(mut self) -> Self {
        self.report.location = None;
        self
    }

    pub fn without_description(mut self) -> Self {
        self.report.description = None;
        self
    }

    pub fn without_severity(mut self) -> Self {
        self.report.severity = None;
        self
    }

    pub fn without_type(mut self) -> Self {
        self.report.disaster_type = None;
        self
    }

    pub fn build(self) -> DisasterReport {
        self.report
    }
}

pub fn at_hour(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0).unwrap()
}
