// ==========================================
// 灾害救援决策支持核心 - 气象观测与预警
// ==========================================

use crate::domain::report::Location;
use crate::domain::types::AlertSeverity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 气象观测
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    pub location: Location,
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    /// 小时降水量 (mm/h)
    pub precipitation_mm: f64,
    pub humidity_pct: f64,
    #[serde(default)]
    pub observed_at: Option<DateTime<Utc>>,
}

/// 预警种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeatherAlertKind {
    HurricaneWind,
    Storm,
    Gale,
    Flood,
    ExtremeHeat,
    Heat,
    ExtremeCold,
    Cold,
}

impl fmt::Display for WeatherAlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherAlertKind::HurricaneWind => write!(f, "hurricane-force wind"),
            WeatherAlertKind::Storm => write!(f, "storm"),
            WeatherAlertKind::Gale => write!(f, "gale"),
            WeatherAlertKind::Flood => write!(f, "flood"),
            WeatherAlertKind::ExtremeHeat => write!(f, "extreme heat"),
            WeatherAlertKind::Heat => write!(f, "heat"),
            WeatherAlertKind::ExtremeCold => write!(f, "extreme cold"),
            WeatherAlertKind::Cold => write!(f, "cold"),
        }
    }
}

/// 气象预警
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherAlert {
    pub kind: WeatherAlertKind,
    pub severity: AlertSeverity,
    pub message: String,
}
