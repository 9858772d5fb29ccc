// ==========================================
// 灾害救援决策支持核心 - 导入层
// ==========================================
// 职责: 外部文件 -> 灾情报告
// 支持: JSON, CSV
// ==========================================

pub mod field_mapper;
pub mod file_parser;
pub mod report_importer;

// 重导出核心类型
pub use field_mapper::ReportFieldMapper;
pub use file_parser::{CsvParser, JsonParser, RawRecord, SourceFormat};
pub use report_importer::{ImportBatch, ReportImporter};
