// ==========================================
// 灾害救援决策支持核心 - 字段映射器
// ==========================================
// 职责: CSV 原始行 -> DisasterReport + 类型转换
// 约定: 空单元格视为缺失
// ==========================================

use crate::domain::report::{DisasterReport, Location, Reporter};
use crate::error::{ReliefError, ReliefResult};
use crate::importer::file_parser::RawRecord;
use chrono::{DateTime, NaiveDateTime, Utc};

pub struct ReportFieldMapper;

impl ReportFieldMapper {
    /// 映射一行记录
    ///
    /// # 参数
    /// - row: 原始记录
    /// - row_number: 数据行号 (从 1 开始, 不含表头)
    pub fn map_to_report(&self, row: &RawRecord, row_number: usize) -> ReliefResult<DisasterReport> {
        let lat = self.parse_f64(row, "lat", row_number)?;
        let lng = self.parse_f64(row, "lng", row_number)?;

        // 经纬度齐全时优先坐标, 否则取地址文本
        let location = match (lat, lng) {
            (Some(lat), Some(lng)) => Some(Location::coordinates(lat, lng)),
            (None, None) => self.get_string(row, "location").map(Location::Address),
            _ => {
                return Err(ReliefError::TypeConversionError {
                    row: row_number,
                    field: if lat.is_none() { "lat" } else { "lng" }.to_string(),
                    message: "lat and lng must be given together".to_string(),
                })
            }
        };

        let reporter_name = self.get_string(row, "reporterName");
        let reporter_contact = self.get_string(row, "reporterContact");
        let anonymous = self.parse_bool(row, "anonymous", row_number)?;

        let reporter = if reporter_name.is_none() && reporter_contact.is_none() && anonymous.is_none()
        {
            None
        } else {
            Some(Reporter {
                name: reporter_name,
                contact: reporter_contact,
                anonymous: anonymous.unwrap_or(false),
            })
        };

        Ok(DisasterReport {
            id: self.get_string(row, "id"),
            disaster_type: self.get_string(row, "disasterType"),
            location,
            description: self.get_string(row, "description"),
            severity: self.parse_i64(row, "severity", row_number)?,
            affected_people: self.parse_i64(row, "affectedPeople", row_number)?,
            media: Vec::new(),
            reporter,
            reported_at: self.parse_datetime(row, "reportedAt", row_number)?,
        })
    }

    /// 提取字符串字段, 支持别名
    fn get_string(&self, row: &RawRecord, key: &str) -> Option<String> {
        let aliases: &[&str] = match key {
            "disasterType" => &["disasterType", "type"],
            "affectedPeople" => &["affectedPeople", "affected"],
            "lat" => &["lat", "latitude"],
            "lng" => &["lng", "lon", "longitude"],
            _ => &[],
        };

        std::iter::once(key)
            .chain(aliases.iter().copied())
            .filter_map(|alias| row.get(alias))
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn parse_f64(&self, row: &RawRecord, key: &str, row_number: usize) -> ReliefResult<Option<f64>> {
        match self.get_string(row, key) {
            None => Ok(None),
            Some(value) => value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Some)
                .ok_or_else(|| ReliefError::TypeConversionError {
                    row: row_number,
                    field: key.to_string(),
                    message: format!("not a number: {}", value),
                }),
        }
    }

    fn parse_i64(&self, row: &RawRecord, key: &str, row_number: usize) -> ReliefResult<Option<i64>> {
        match self.get_string(row, key) {
            None => Ok(None),
            Some(value) => value
                .replace(',', "")
                .parse::<i64>()
                .map(Some)
                .map_err(|_| ReliefError::TypeConversionError {
                    row: row_number,
                    field: key.to_string(),
                    message: format!("not an integer: {}", value),
                }),
        }
    }

    fn parse_bool(&self, row: &RawRecord, key: &str, row_number: usize) -> ReliefResult<Option<bool>> {
        match self.get_string(row, key) {
            None => Ok(None),
            Some(value) => match value.to_lowercase().as_str() {
                "true" | "yes" | "y" | "1" => Ok(Some(true)),
                "false" | "no" | "n" | "0" => Ok(Some(false)),
                _ => Err(ReliefError::TypeConversionError {
                    row: row_number,
                    field: key.to_string(),
                    message: format!("not a boolean: {}", value),
                }),
            },
        }
    }

    /// RFC 3339, 兼容 "YYYY-MM-DD HH:MM:SS" (按 UTC)
    fn parse_datetime(
        &self,
        row: &RawRecord,
        key: &str,
        row_number: usize,
    ) -> ReliefResult<Option<DateTime<Utc>>> {
        match self.get_string(row, key) {
            None => Ok(None),
            Some(value) => DateTime::parse_from_rfc3339(&value)
                .map(|dt| dt.with_timezone(&Utc))
                .or_else(|_| {
                    NaiveDateTime::parse_from_str(&value, "%Y-%m-%d %H:%M:%S")
                        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
                })
                .map(Some)
                .map_err(|_| ReliefError::TypeConversionError {
                    row: row_number,
                    field: key.to_string(),
                    message: format!("invalid timestamp: {}", value),
                }),
        }
    }
}
