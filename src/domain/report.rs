// ==========================================
// 灾害救援决策支持核心 - 灾情报告实体
// ==========================================
// 生命周期: 创建 -> 校验 -> 格式化 -> 丢弃 (不持久化)
// 所有用户输入字段均为 Option, 由校验器报告缺失
// ==========================================

use crate::domain::types::DisasterType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 缺省严重度 (中性值)
pub const DEFAULT_SEVERITY: u8 = 3;
pub const MIN_SEVERITY: u8 = 1;
pub const MAX_SEVERITY: u8 = 5;

// ==========================================
// Location - 报告位置
// ==========================================
// 地址文本 或 经纬度
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Location {
    Address(String),
    Coordinates { lat: f64, lng: f64 },
}

impl Location {
    pub fn coordinates(lat: f64, lng: f64) -> Self {
        Location::Coordinates { lat, lng }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Address(addr) => write!(f, "{}", addr.trim()),
            Location::Coordinates { lat, lng } => write!(f, "{:.4}, {:.4}", lat, lng),
        }
    }
}

// ==========================================
// MediaAttachment - 附件描述
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAttachment {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

// ==========================================
// Reporter - 报告人
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reporter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub anonymous: bool,
}

impl Reporter {
    pub fn anonymous() -> Self {
        Self {
            name: None,
            contact: None,
            anonymous: true,
        }
    }
}

// ==========================================
// DisasterReport - 灾情报告 (表单输入)
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisasterReport {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub disaster_type: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub severity: Option<i64>,
    #[serde(default)]
    pub affected_people: Option<i64>,
    #[serde(default)]
    pub media: Vec<MediaAttachment>,
    #[serde(default)]
    pub reporter: Option<Reporter>,
    #[serde(default)]
    pub reported_at: Option<DateTime<Utc>>,
}

impl DisasterReport {
    /// 解析后的灾害类型 (缺失/未知 -> Other)
    pub fn disaster_type(&self) -> DisasterType {
        self.disaster_type
            .as_deref()
            .map(DisasterType::from_str)
            .unwrap_or_default()
    }

    /// 严重度 (缺失 -> 3, 越界 -> 夹到 1..=5)
    pub fn severity_or_default(&self) -> u8 {
        match self.severity {
            Some(s) => s.clamp(MIN_SEVERITY as i64, MAX_SEVERITY as i64) as u8,
            None => DEFAULT_SEVERITY,
        }
    }

    /// 受影响人数 (缺失或负数 -> 0)
    pub fn affected_people_or_default(&self) -> u64 {
        self.affected_people.map(|n| n.max(0) as u64).unwrap_or(0)
    }

    /// 报告人是否匿名 (无报告人视为匿名)
    pub fn is_anonymous(&self) -> bool {
        self.reporter.as_ref().map(|r| r.anonymous).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_fields() {
        let report = DisasterReport::default();
        assert_eq!(report.disaster_type(), DisasterType::Other);
        assert_eq!(report.severity_or_default(), 3);
        assert_eq!(report.affected_people_or_default(), 0);
        assert!(report.is_anonymous());
    }

    #[test]
    fn test_severity_is_clamped() {
        let mut report = DisasterReport::default();
        report.severity = Some(9);
        assert_eq!(report.severity_or_default(), 5);
        report.severity = Some(-2);
        assert_eq!(report.severity_or_default(), 1);
    }

    #[test]
    fn test_deserialize_camel_case_with_coordinates() {
        let json = r#"{
            "disasterType": "Flood",
            "location": {"lat": 29.76, "lng": -95.37},
            "description": "River overflowed into downtown",
            "severity": 4,
            "affectedPeople": 1200,
            "reporter": {"name": "Ana", "contact": "ana@example.org"}
        }"#;
        let report: DisasterReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.disaster_type(), DisasterType::Flood);
        assert_eq!(report.location, Some(Location::coordinates(29.76, -95.37)));
        assert_eq!(report.affected_people_or_default(), 1200);
        assert!(!report.is_anonymous());
        assert!(report.media.is_empty());
    }

    #[test]
    fn test_deserialize_address_location() {
        let json = r#"{"location": "12 Harbour Road"}"#;
        let report: DisasterReport = serde_json::from_str(json).unwrap();
        assert_eq!(
            report.location,
            Some(Location::Address("12 Harbour Road".to_string()))
        );
        assert_eq!(report.location.unwrap().to_string(), "12 Harbour Road");
    }
}
