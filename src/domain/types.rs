// ==========================================
// 灾害救援决策支持核心 - 领域类型定义
// ==========================================
// 序列化格式: camelCase / lowercase (与前端报告表单一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 灾害类型 (Disaster Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisasterType {
    Earthquake,
    Flood,
    Hurricane,
    Wildfire,
    Tornado,
    Tsunami,
    Landslide,
    Drought,
    Other,
}

impl DisasterType {
    pub const ALL: [DisasterType; 9] = [
        DisasterType::Earthquake,
        DisasterType::Flood,
        DisasterType::Hurricane,
        DisasterType::Wildfire,
        DisasterType::Tornado,
        DisasterType::Tsunami,
        DisasterType::Landslide,
        DisasterType::Drought,
        DisasterType::Other,
    ];

    /// 从字符串解析灾害类型
    ///
    /// 大小写不敏感, 去除首尾空白; 未知类型归入 Other
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "earthquake" => DisasterType::Earthquake,
            "flood" => DisasterType::Flood,
            "hurricane" => DisasterType::Hurricane,
            "wildfire" => DisasterType::Wildfire,
            "tornado" => DisasterType::Tornado,
            "tsunami" => DisasterType::Tsunami,
            "landslide" => DisasterType::Landslide,
            "drought" => DisasterType::Drought,
            _ => DisasterType::Other,
        }
    }

    /// 转换为报告表单中的字符串
    pub fn to_wire_str(&self) -> &'static str {
        match self {
            DisasterType::Earthquake => "earthquake",
            DisasterType::Flood => "flood",
            DisasterType::Hurricane => "hurricane",
            DisasterType::Wildfire => "wildfire",
            DisasterType::Tornado => "tornado",
            DisasterType::Tsunami => "tsunami",
            DisasterType::Landslide => "landslide",
            DisasterType::Drought => "drought",
            DisasterType::Other => "other",
        }
    }

    /// 所属灾害大类
    pub fn category(&self) -> DisasterCategory {
        match self {
            DisasterType::Earthquake | DisasterType::Tsunami | DisasterType::Landslide => {
                DisasterCategory::Geological
            }
            DisasterType::Flood => DisasterCategory::Hydrological,
            DisasterType::Hurricane | DisasterType::Tornado => DisasterCategory::Meteorological,
            DisasterType::Wildfire | DisasterType::Drought => DisasterCategory::Climatological,
            DisasterType::Other => DisasterCategory::Other,
        }
    }

    /// 展示名称 (首字母大写)
    pub fn label(&self) -> &'static str {
        match self {
            DisasterType::Earthquake => "Earthquake",
            DisasterType::Flood => "Flood",
            DisasterType::Hurricane => "Hurricane",
            DisasterType::Wildfire => "Wildfire",
            DisasterType::Tornado => "Tornado",
            DisasterType::Tsunami => "Tsunami",
            DisasterType::Landslide => "Landslide",
            DisasterType::Drought => "Drought",
            DisasterType::Other => "Other",
        }
    }
}

impl Default for DisasterType {
    fn default() -> Self {
        DisasterType::Other
    }
}

impl fmt::Display for DisasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_wire_str())
    }
}

// ==========================================
// 灾害大类 (Disaster Category)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisasterCategory {
    Geological,     // 地质类
    Hydrological,   // 水文类
    Meteorological, // 气象类
    Climatological, // 气候类
    Other,
}

impl fmt::Display for DisasterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisasterCategory::Geological => write!(f, "geological"),
            DisasterCategory::Hydrological => write!(f, "hydrological"),
            DisasterCategory::Meteorological => write!(f, "meteorological"),
            DisasterCategory::Climatological => write!(f, "climatological"),
            DisasterCategory::Other => write!(f, "other"),
        }
    }
}

// ==========================================
// 优先级 (Priority Level)
// ==========================================
// 顺序: Low < Medium < High < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl PriorityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLevel::Low => "low",
            PriorityLevel::Medium => "medium",
            PriorityLevel::High => "high",
            PriorityLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 时间单位 (Time Unit)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Hours,
    Days,
    Weeks,
    Months,
}

impl TimeUnit {
    /// 折算天数 (小时向上取整到天, 周=7天, 月=30天)
    pub fn to_days(&self, amount: u32) -> u32 {
        match self {
            TimeUnit::Hours => (amount + 23) / 24,
            TimeUnit::Days => amount,
            TimeUnit::Weeks => amount * 7,
            TimeUnit::Months => amount * 30,
        }
    }

    /// 带单复数的单位名称
    pub fn label(&self, amount: u32) -> &'static str {
        match (self, amount == 1) {
            (TimeUnit::Hours, true) => "hour",
            (TimeUnit::Hours, false) => "hours",
            (TimeUnit::Days, true) => "day",
            (TimeUnit::Days, false) => "days",
            (TimeUnit::Weeks, true) => "week",
            (TimeUnit::Weeks, false) => "weeks",
            (TimeUnit::Months, true) => "month",
            (TimeUnit::Months, false) => "months",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label(2))
    }
}

// ==========================================
// 恢复阶段 (Recovery Phase)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecoveryPhase {
    Immediate,
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl RecoveryPhase {
    pub const ALL: [RecoveryPhase; 4] = [
        RecoveryPhase::Immediate,
        RecoveryPhase::ShortTerm,
        RecoveryPhase::MediumTerm,
        RecoveryPhase::LongTerm,
    ];

    /// 阶段计时单位
    pub fn unit(&self) -> TimeUnit {
        match self {
            RecoveryPhase::Immediate => TimeUnit::Hours,
            RecoveryPhase::ShortTerm => TimeUnit::Days,
            RecoveryPhase::MediumTerm => TimeUnit::Weeks,
            RecoveryPhase::LongTerm => TimeUnit::Months,
        }
    }
}

impl fmt::Display for RecoveryPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryPhase::Immediate => write!(f, "immediate"),
            RecoveryPhase::ShortTerm => write!(f, "shortTerm"),
            RecoveryPhase::MediumTerm => write!(f, "mediumTerm"),
            RecoveryPhase::LongTerm => write!(f, "longTerm"),
        }
    }
}

// ==========================================
// 联系人类型 (Contact Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    Police,
    Fire,
    Medical,
    Rescue,
    Shelter,
    Utility,
}

impl ContactType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "police" => Some(ContactType::Police),
            "fire" => Some(ContactType::Fire),
            "medical" => Some(ContactType::Medical),
            "rescue" => Some(ContactType::Rescue),
            "shelter" => Some(ContactType::Shelter),
            "utility" => Some(ContactType::Utility),
            _ => None,
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactType::Police => write!(f, "police"),
            ContactType::Fire => write!(f, "fire"),
            ContactType::Medical => write!(f, "medical"),
            ContactType::Rescue => write!(f, "rescue"),
            ContactType::Shelter => write!(f, "shelter"),
            ContactType::Utility => write!(f, "utility"),
        }
    }
}

// ==========================================
// 气象预警级别 (Alert Severity)
// ==========================================
// 顺序: Advisory < Watch < Warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Advisory, // 提示
    Watch,    // 关注
    Warning,  // 警告
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertSeverity::Advisory => write!(f, "advisory"),
            AlertSeverity::Watch => write!(f, "watch"),
            AlertSeverity::Warning => write!(f, "warning"),
        }
    }
}

// ==========================================
// 社区报告核实状态 (Verification Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerificationStatus {
    Unverified,
    PartiallyVerified,
    Verified,
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationStatus::Unverified => write!(f, "unverified"),
            VerificationStatus::PartiallyVerified => write!(f, "partiallyVerified"),
            VerificationStatus::Verified => write!(f, "verified"),
        }
    }
}

// ==========================================
// 社区报告类别 (Community Category)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommunityCategory {
    InfrastructureDamage,
    MissingPerson,
    ResourceNeed,
    Hazard,
    Other,
}

impl fmt::Display for CommunityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommunityCategory::InfrastructureDamage => write!(f, "infrastructureDamage"),
            CommunityCategory::MissingPerson => write!(f, "missingPerson"),
            CommunityCategory::ResourceNeed => write!(f, "resourceNeed"),
            CommunityCategory::Hazard => write!(f, "hazard"),
            CommunityCategory::Other => write!(f, "other"),
        }
    }
}
