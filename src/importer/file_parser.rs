// ==========================================
// 灾害救援决策支持核心 - 文件解析器
// ==========================================
// 支持: JSON (.json, 报告数组) / CSV (.csv, 首行表头)
// ==========================================

use crate::domain::report::DisasterReport;
use crate::error::{ReliefError, ReliefResult};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// 一行原始记录: 表头 -> 单元格 (已 trim)
pub type RawRecord = HashMap<String, String>;

/// 支持的文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Csv,
}

impl SourceFormat {
    /// 按扩展名识别 (大小写不敏感)
    pub fn from_path(path: &Path) -> ReliefResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => Ok(SourceFormat::Json),
            "csv" => Ok(SourceFormat::Csv),
            _ => Err(ReliefError::UnsupportedFormat(ext)),
        }
    }
}

fn ensure_exists(path: &Path) -> ReliefResult<()> {
    if !path.exists() {
        return Err(ReliefError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// CSV Parser
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// 解析为原始记录, 跳过完全空白的行
    pub fn parse_to_raw_records(&self, path: &Path) -> ReliefResult<Vec<RawRecord>> {
        ensure_exists(path)?;

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row.insert(header.clone(), value.trim().to_string());
                }
            }

            if row.values().all(|v| v.is_empty()) {
                continue;
            }
            records.push(row);
        }

        Ok(records)
    }
}

// ==========================================
// JSON Parser
// ==========================================
pub struct JsonParser;

impl JsonParser {
    /// 解析报告数组; 顶层为单个对象时按一份报告处理
    pub fn parse_reports(&self, path: &Path) -> ReliefResult<Vec<DisasterReport>> {
        ensure_exists(path)?;

        let content = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&content)?;

        if value.is_array() {
            Ok(serde_json::from_value(value)?)
        } else if value.is_object() {
            Ok(vec![serde_json::from_value(value)?])
        } else {
            Err(ReliefError::InvalidInput(format!(
                "expected an array of reports, found {}",
                json_kind(&value)
            )))
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
