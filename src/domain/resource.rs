// ==========================================
// 灾害救援决策支持核心 - 资源估算结果
// ==========================================
// 派生记录, 每次由报告重新计算, 不持久化
// ==========================================

use serde::{Deserialize, Serialize};

/// 资源估算 (按日口径)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceEstimate {
    pub personnel: u64,
    pub water_liters: u64,
    pub food_rations: u64,
    pub medical_kits: u64,
    pub shelter_units: u64,
}

impl ResourceEstimate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
