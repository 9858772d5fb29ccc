// ==========================================
// 灾害救援决策支持核心 - 单位格式化
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindUnit {
    Kmh,
    Mph,
}

const KM_PER_MILE: f64 = 1.609344;

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// "21.5°C" / "70.7°F"
pub fn format_temperature(celsius: f64, unit: TemperatureUnit) -> String {
    match unit {
        TemperatureUnit::Celsius => format!("{:.1}°C", celsius),
        TemperatureUnit::Fahrenheit => format!("{:.1}°F", celsius_to_fahrenheit(celsius)),
    }
}

/// "15 km/h" / "9.3 mph"
pub fn format_wind_speed(kmh: f64, unit: WindUnit) -> String {
    match unit {
        WindUnit::Kmh => format!("{:.0} km/h", kmh),
        WindUnit::Mph => format!("{:.1} mph", kmh / KM_PER_MILE),
    }
}

/// "12.5 mm"
pub fn format_precipitation(mm: f64) -> String {
    format!("{:.1} mm", mm)
}

/// 千分位数量 + 单位: "1,250 liters"
pub fn format_quantity(amount: u64, unit: &str) -> String {
    let unit = unit.trim();
    if unit.is_empty() {
        group_thousands(amount)
    } else {
        format!("{} {}", group_thousands(amount), unit)
    }
}

/// 不足 1 km 显示米: "850 m" / "2.4 km"
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{:.0} m", km * 1000.0)
    } else {
        format!("{:.1} km", km)
    }
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
