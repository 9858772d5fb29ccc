// ==========================================
// 灾害救援决策支持核心 - 气象监测引擎
// ==========================================
// 职责: 气象观测 -> 阈值预警 (风 / 降水 / 高温 / 低温)
// 输出: 预警列表, 按级别降序 (warning 在前)
// ==========================================

use crate::domain::report::Location;
use crate::domain::types::AlertSeverity;
use crate::domain::weather::{WeatherAlert, WeatherAlertKind, WeatherReading};
use crate::error::{ReliefError, ReliefResult};
use crate::format::units::{format_precipitation, format_temperature, format_wind_speed, TemperatureUnit, WindUnit};
use crate::validation::validate_coordinates;

// 风速 (km/h)
const HURRICANE_WIND_KMH: f64 = 118.0;
const STORM_WIND_KMH: f64 = 89.0;
const GALE_WIND_KMH: f64 = 62.0;

// 小时降水 (mm/h)
const FLOOD_WARNING_MM: f64 = 50.0;
const FLOOD_WATCH_MM: f64 = 25.0;

// 温度 (°C)
const EXTREME_HEAT_C: f64 = 40.0;
const HEAT_C: f64 = 35.0;
const EXTREME_COLD_C: f64 = -20.0;
const COLD_C: f64 = -10.0;

// ==========================================
// WeatherMonitor - 气象监测引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherMonitor;

impl WeatherMonitor {
    pub fn new() -> Self {
        Self
    }

    /// 校验观测值 (坐标范围, 数值有限, 湿度 0-100, 风速/降水非负)
    pub fn validate_reading(&self, reading: &WeatherReading) -> ReliefResult<()> {
        if let Location::Coordinates { lat, lng } = reading.location {
            if let Some(violation) = validate_coordinates(lat, lng).into_iter().next() {
                return Err(ReliefError::InvalidInput(violation.message));
            }
        }

        let values = [
            ("temperature", reading.temperature_c),
            ("wind speed", reading.wind_speed_kmh),
            ("precipitation", reading.precipitation_mm),
            ("humidity", reading.humidity_pct),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(ReliefError::InvalidInput(format!("{} is not a number", name)));
            }
        }

        if reading.wind_speed_kmh < 0.0 || reading.precipitation_mm < 0.0 {
            return Err(ReliefError::InvalidInput(
                "wind speed and precipitation cannot be negative".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&reading.humidity_pct) {
            return Err(ReliefError::InvalidInput(format!(
                "humidity must be between 0 and 100 (got {})",
                reading.humidity_pct
            )));
        }

        Ok(())
    }

    /// 评估观测, 生成预警
    pub fn assess(&self, reading: &WeatherReading) -> ReliefResult<Vec<WeatherAlert>> {
        self.validate_reading(reading)?;

        let mut alerts = Vec::new();
        let place = reading.location.to_string();

        if let Some((kind, severity)) = wind_level(reading.wind_speed_kmh) {
            alerts.push(WeatherAlert {
                kind,
                severity,
                message: format!(
                    "{} {} for {}: sustained winds of {}",
                    capitalize(&kind.to_string()),
                    severity,
                    place,
                    format_wind_speed(reading.wind_speed_kmh, WindUnit::Kmh)
                ),
            });
        }

        if let Some(severity) = flood_level(reading.precipitation_mm) {
            alerts.push(WeatherAlert {
                kind: WeatherAlertKind::Flood,
                severity,
                message: format!(
                    "Flood {} for {}: rainfall of {}/h",
                    severity,
                    place,
                    format_precipitation(reading.precipitation_mm)
                ),
            });
        }

        if let Some((kind, severity)) = temperature_level(reading.temperature_c) {
            alerts.push(WeatherAlert {
                kind,
                severity,
                message: format!(
                    "{} {} for {}: temperature {}",
                    capitalize(&kind.to_string()),
                    severity,
                    place,
                    format_temperature(reading.temperature_c, TemperatureUnit::Celsius)
                ),
            });
        }

        // 稳定排序, 同级保持 风 -> 降水 -> 温度
        alerts.sort_by(|a, b| b.severity.cmp(&a.severity));

        if !alerts.is_empty() {
            tracing::info!(place = %place, count = alerts.len(), "气象预警生成");
        }
        Ok(alerts)
    }

    /// 最高预警级别
    pub fn highest_severity(&self, alerts: &[WeatherAlert]) -> Option<AlertSeverity> {
        alerts.iter().map(|a| a.severity).max()
    }
}

fn wind_level(kmh: f64) -> Option<(WeatherAlertKind, AlertSeverity)> {
    if kmh >= HURRICANE_WIND_KMH {
        Some((WeatherAlertKind::HurricaneWind, AlertSeverity::Warning))
    } else if kmh >= STORM_WIND_KMH {
        Some((WeatherAlertKind::Storm, AlertSeverity::Warning))
    } else if kmh >= GALE_WIND_KMH {
        Some((WeatherAlertKind::Gale, AlertSeverity::Watch))
    } else {
        None
    }
}

fn flood_level(mm: f64) -> Option<AlertSeverity> {
    if mm >= FLOOD_WARNING_MM {
        Some(AlertSeverity::Warning)
    } else if mm >= FLOOD_WATCH_MM {
        Some(AlertSeverity::Watch)
    } else {
        None
    }
}

fn temperature_level(celsius: f64) -> Option<(WeatherAlertKind, AlertSeverity)> {
    if celsius >= EXTREME_HEAT_C {
        Some((WeatherAlertKind::ExtremeHeat, AlertSeverity::Warning))
    } else if celsius >= HEAT_C {
        Some((WeatherAlertKind::Heat, AlertSeverity::Advisory))
    } else if celsius <= EXTREME_COLD_C {
        Some((WeatherAlertKind::ExtremeCold, AlertSeverity::Warning))
    } else if celsius <= COLD_C {
        Some((WeatherAlertKind::Cold, AlertSeverity::Advisory))
    } else {
        None
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
