// ==========================================
// 灾害救援决策支持核心 - 日期格式化
// ==========================================

use chrono::{DateTime, Utc};

/// "2026-03-14"
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// "2026-03-14 09:05 UTC"
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// 相对时间: "just now" / "5 minutes ago" / "3 hours ago" / "2 days ago"
///
/// 未来时间按 "just now" 处理
pub fn format_relative(dt: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(*dt);
    let minutes = elapsed.num_minutes();

    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }
    plural(elapsed.num_days(), "day")
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}
