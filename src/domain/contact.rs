// ==========================================
// 灾害救援决策支持核心 - 紧急联系人
// ==========================================
// 静态查找表, 只读
// ==========================================

use crate::domain::types::ContactType;
use serde::Serialize;

/// 全国通用联系人所在区域
pub const NATIONAL_REGION: &str = "national";

/// 紧急联系人
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: &'static str,
    pub phone: &'static str,
    pub contact_type: ContactType,
    pub region: &'static str,
}

const fn contact(
    name: &'static str,
    phone: &'static str,
    contact_type: ContactType,
    region: &'static str,
) -> EmergencyContact {
    EmergencyContact {
        name,
        phone,
        contact_type,
        region,
    }
}

/// 紧急联系人表
pub static EMERGENCY_CONTACTS: &[EmergencyContact] = &[
    // 全国
    contact("Emergency Services", "911", ContactType::Police, NATIONAL_REGION),
    contact("National Disaster Relief Line", "18005550100", ContactType::Rescue, NATIONAL_REGION),
    contact("Red Cross Shelter Hotline", "18005550199", ContactType::Shelter, NATIONAL_REGION),
    contact("Poison & Medical Advice Line", "18005550122", ContactType::Medical, NATIONAL_REGION),
    // 北部
    contact("North District Police", "5550101001", ContactType::Police, "north"),
    contact("North Fire & Rescue", "5550101002", ContactType::Fire, "north"),
    contact("North General Hospital", "5550101003", ContactType::Medical, "north"),
    contact("North Power & Water Outages", "5550101004", ContactType::Utility, "north"),
    // 南部
    contact("South District Police", "5550202001", ContactType::Police, "south"),
    contact("South Fire Department", "5550202002", ContactType::Fire, "south"),
    contact("South Coast Search & Rescue", "5550202003", ContactType::Rescue, "south"),
    contact("South Community Shelter", "5550202004", ContactType::Shelter, "south"),
    // 沿海
    contact("Coastal Guard Station", "5550303001", ContactType::Rescue, "coastal"),
    contact("Coastal Medical Center", "5550303002", ContactType::Medical, "coastal"),
    contact("Coastal Utilities Emergency", "5550303003", ContactType::Utility, "coastal"),
];
