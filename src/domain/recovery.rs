// ==========================================
// 灾害救援决策支持核心 - 恢复时间线
// ==========================================
// 四阶段: immediate / shortTerm / mediumTerm / longTerm
// ==========================================

use crate::domain::types::{RecoveryPhase, TimeUnit};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 阶段时长
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseDuration {
    pub duration: u32,
    pub unit: TimeUnit,
}

impl PhaseDuration {
    pub fn new(duration: u32, unit: TimeUnit) -> Self {
        Self { duration, unit }
    }

    pub fn in_days(&self) -> u32 {
        self.unit.to_days(self.duration)
    }
}

impl fmt::Display for PhaseDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.duration, self.unit.label(self.duration))
    }
}

/// 恢复时间线
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryTimeline {
    pub immediate: PhaseDuration,
    pub short_term: PhaseDuration,
    pub medium_term: PhaseDuration,
    pub long_term: PhaseDuration,
}

impl RecoveryTimeline {
    pub fn phase(&self, phase: RecoveryPhase) -> PhaseDuration {
        match phase {
            RecoveryPhase::Immediate => self.immediate,
            RecoveryPhase::ShortTerm => self.short_term,
            RecoveryPhase::MediumTerm => self.medium_term,
            RecoveryPhase::LongTerm => self.long_term,
        }
    }

    /// 全部阶段首尾相接的总天数
    pub fn total_days(&self) -> u32 {
        RecoveryPhase::ALL
            .iter()
            .map(|p| self.phase(*p).in_days())
            .sum()
    }
}

/// 已排期的恢复阶段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedPhase {
    pub phase: RecoveryPhase,
    pub duration: PhaseDuration,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub tasks: Vec<String>,
}

/// 恢复计划 (时间线 + 阶段排期 + 任务清单)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryPlan {
    pub timeline: RecoveryTimeline,
    pub phases: Vec<PlannedPhase>,
}

impl RecoveryPlan {
    pub fn completion_date(&self) -> Option<NaiveDate> {
        self.phases.last().map(|p| p.ends_on)
    }
}
