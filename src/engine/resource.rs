// ==========================================
// 灾害救援决策支持核心 - 资源估算引擎
// ==========================================
// 公式: ceil(受影响人数 × 人均日需求 × (严重度 / 3) × 灾害类型系数)
// 输出: 人员 / 饮水 / 口粮 / 医疗包 / 安置单元
// ==========================================

use crate::config::scoring_profile::ResourceRates;
use crate::domain::report::{DisasterReport, DEFAULT_SEVERITY};
use crate::domain::resource::ResourceEstimate;

// ==========================================
// ResourceEstimator - 资源估算引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ResourceEstimator {
    rates: ResourceRates,
}

impl ResourceEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rates(rates: ResourceRates) -> Self {
        Self { rates }
    }

    /// 单日资源估算
    pub fn estimate(&self, report: &DisasterReport) -> ResourceEstimate {
        let people = report.affected_people_or_default();
        if people == 0 {
            return ResourceEstimate::default();
        }

        let factor = self.scale_factor(report);
        let people = people as f64;

        let estimate = ResourceEstimate {
            personnel: round_up(people * self.rates.personnel_per_capita * factor),
            water_liters: round_up(people * self.rates.water_liters_per_capita * factor),
            food_rations: round_up(people * self.rates.food_rations_per_capita * factor),
            medical_kits: round_up(people * self.rates.medical_kits_per_capita * factor),
            shelter_units: round_up(people * self.rates.shelter_units_per_capita * factor),
        };

        tracing::debug!(
            people,
            factor,
            personnel = estimate.personnel,
            water_liters = estimate.water_liters,
            "资源估算"
        );
        estimate
    }

    /// 多日资源估算
    ///
    /// 消耗品 (饮水/口粮/医疗包) 按天数放大; 人员与安置单元不随天数累加
    pub fn estimate_for_days(&self, report: &DisasterReport, days: u32) -> ResourceEstimate {
        let daily = self.estimate(report);
        let days = days.max(1) as u64;

        ResourceEstimate {
            personnel: daily.personnel,
            water_liters: daily.water_liters.saturating_mul(days),
            food_rations: daily.food_rations.saturating_mul(days),
            medical_kits: daily.medical_kits.saturating_mul(days),
            shelter_units: daily.shelter_units,
        }
    }

    /// (严重度 / 3) × 灾害类型系数
    fn scale_factor(&self, report: &DisasterReport) -> f64 {
        let severity_ratio = report.severity_or_default() as f64 / DEFAULT_SEVERITY as f64;
        severity_ratio * self.rates.multiplier(report.disaster_type())
    }
}

/// 向上取整, 消除浮点误差 (如 15.000000000000002 -> 15)
fn round_up(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let rounded = (value * 1e6).round() / 1e6;
    rounded.ceil() as u64
}
