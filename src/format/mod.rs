// ==========================================
// 灾害救援决策支持核心 - 格式化层
// ==========================================
// 纯函数字符串模板: 单位 / 日期 / 电话 / 报告
// ==========================================

pub mod datetime;
pub mod phone;
pub mod report;
pub mod units;

pub use datetime::{format_date, format_datetime, format_relative};
pub use phone::format_phone_number;
pub use report::{format_report, generate_report_id, FormattedReport};
pub use units::{
    format_distance, format_precipitation, format_quantity, format_temperature,
    format_wind_speed, TemperatureUnit, WindUnit,
};
