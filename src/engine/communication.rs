// ==========================================
// 灾害救援决策支持核心 - 应急通信中心
// ==========================================
// 职责: 紧急联系人查找 + 广播消息编排 + 短信分段
// 数据: 静态联系人表 (只读)
// ==========================================

use crate::domain::contact::{EmergencyContact, EMERGENCY_CONTACTS, NATIONAL_REGION};
use crate::domain::types::{ContactType, DisasterType, PriorityLevel};
use crate::error::{ReliefError, ReliefResult};

/// 广播正文上限
pub const MAX_BROADCAST_BODY_LEN: usize = 1000;
/// 单条短信长度
pub const SMS_SEGMENT_LEN: usize = 160;
/// 多段短信每段正文长度
pub const SMS_MULTIPART_LEN: usize = 153;

/// 灾种对应的优先联络类型
fn relevant_contact_types(disaster_type: DisasterType) -> &'static [ContactType] {
    match disaster_type {
        DisasterType::Earthquake | DisasterType::Landslide => {
            &[ContactType::Rescue, ContactType::Medical, ContactType::Shelter]
        }
        DisasterType::Flood | DisasterType::Tsunami => {
            &[ContactType::Rescue, ContactType::Shelter, ContactType::Utility]
        }
        DisasterType::Hurricane | DisasterType::Tornado => &[
            ContactType::Shelter,
            ContactType::Utility,
            ContactType::Rescue,
        ],
        DisasterType::Wildfire => &[ContactType::Fire, ContactType::Medical, ContactType::Shelter],
        DisasterType::Drought => &[ContactType::Utility, ContactType::Medical],
        DisasterType::Other => &[ContactType::Police, ContactType::Medical],
    }
}

// ==========================================
// CommunicationHub - 应急通信中心
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct CommunicationHub {
    contacts: &'static [EmergencyContact],
}

impl CommunicationHub {
    /// 使用内置联系人表
    pub fn new() -> Self {
        Self {
            contacts: EMERGENCY_CONTACTS,
        }
    }

    pub fn with_contacts(contacts: &'static [EmergencyContact]) -> Self {
        Self { contacts }
    }

    // ==========================================
    // 联系人查找
    // ==========================================

    /// 区域联系人在前, 全国联系人在后; 未知区域仅返回全国联系人
    pub fn contacts_for_region(&self, region: &str) -> Vec<&'static EmergencyContact> {
        let region = region.trim().to_lowercase();
        let contacts = self.contacts;

        let mut result: Vec<&'static EmergencyContact> = contacts
            .iter()
            .filter(|c| c.region != NATIONAL_REGION && c.region == region)
            .collect();
        result.extend(contacts.iter().filter(|c| c.region == NATIONAL_REGION));
        result
    }

    pub fn contacts_by_type(&self, contact_type: ContactType) -> Vec<&'static EmergencyContact> {
        let contacts = self.contacts;
        contacts
            .iter()
            .filter(|c| c.contact_type == contact_type)
            .collect()
    }

    /// 灾种相关联系人 (按灾种优先类型排序, 区域优先于全国)
    pub fn recommended_contacts(
        &self,
        disaster_type: DisasterType,
        region: &str,
    ) -> Vec<&'static EmergencyContact> {
        let candidates = self.contacts_for_region(region);
        let mut result = Vec::new();
        for contact_type in relevant_contact_types(disaster_type) {
            result.extend(
                candidates
                    .iter()
                    .copied()
                    .filter(|c| c.contact_type == *contact_type),
            );
        }
        result
    }

    /// 已知区域 (不含 national), 按字母序去重
    pub fn regions(&self) -> Vec<&'static str> {
        let mut regions: Vec<&'static str> = self
            .contacts
            .iter()
            .map(|c| c.region)
            .filter(|r| *r != NATIONAL_REGION)
            .collect();
        regions.sort_unstable();
        regions.dedup();
        regions
    }

    // ==========================================
    // 广播消息
    // ==========================================

    /// "[CRITICAL] EARTHQUAKE alert for <location>: <body>"
    pub fn compose_broadcast(
        &self,
        priority: PriorityLevel,
        disaster_type: DisasterType,
        location: &str,
        body: &str,
    ) -> ReliefResult<String> {
        let body = body.trim();
        if body.is_empty() {
            return Err(ReliefError::InvalidMessage("message body is empty".to_string()));
        }
        let len = body.chars().count();
        if len > MAX_BROADCAST_BODY_LEN {
            return Err(ReliefError::InvalidMessage(format!(
                "message body has {} characters, limit is {}",
                len, MAX_BROADCAST_BODY_LEN
            )));
        }

        let location = match location.trim() {
            "" => "your area",
            other => other,
        };

        let message = format!(
            "[{}] {} alert for {}: {}",
            priority.as_str().to_uppercase(),
            disaster_type.to_wire_str().to_uppercase(),
            location,
            body
        );
        tracing::info!(priority = %priority, disaster_type = %disaster_type, "广播消息已生成");
        Ok(message)
    }

    /// 短信分段: ≤160 字符单段; 超出时加 "(i/n) " 前缀, 每段含前缀不超过 160 字符
    pub fn to_sms_segments(&self, message: &str) -> Vec<String> {
        let chars: Vec<char> = message.chars().collect();
        if chars.len() <= SMS_SEGMENT_LEN {
            return vec![message.to_string()];
        }

        // 段数位数增加会挤占正文, 重新切分直到段数稳定
        let mut total = chars.len().div_ceil(SMS_MULTIPART_LEN);
        let mut chunks = split_for_total(&chars, total);
        while chunks.len() != total {
            total = chunks.len();
            chunks = split_for_total(&chars, total);
        }

        chunks
            .into_iter()
            .enumerate()
            .map(|(i, chunk)| format!("{}{}", segment_prefix(i + 1, total), chunk))
            .collect()
    }
}

fn segment_prefix(index: usize, total: usize) -> String {
    format!("({}/{}) ", index, total)
}

fn split_for_total(chars: &[char], total: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut rest = chars;
    while !rest.is_empty() {
        let prefix_len = segment_prefix(chunks.len() + 1, total).chars().count();
        let capacity = SMS_MULTIPART_LEN.min(SMS_SEGMENT_LEN - prefix_len);
        let (head, tail) = rest.split_at(capacity.min(rest.len()));
        chunks.push(head.iter().collect::<String>());
        rest = tail;
    }
    chunks
}

impl Default for CommunicationHub {
    fn default() -> Self {
        Self::new()
    }
}
