// 各测试二进制只使用其中一部分
#![allow(dead_code)]

pub mod mock_config;
pub mod report_builder;

pub use mock_config::MockConfig;
pub use report_builder::{at_hour, ReportBuilder};
