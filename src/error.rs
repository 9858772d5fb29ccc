// ==========================================
// 灾害救援决策支持核心 - 统一错误类型
// ==========================================
// 工具: thiserror 派生宏
// 职责: 校验/导入/配置/消息 四类错误统一出口
// ==========================================

use thiserror::Error;

/// 核心库错误类型
/// 所有错误信息必须包含显式原因（可解释性）
#[derive(Error, Debug)]
pub enum ReliefError {
    // ===== 校验错误 =====
    /// 报告校验失败（带逐条原因）
    #[error("invalid report{}: {}", .report_id.as_deref().map(|id| format!(" {}", id)).unwrap_or_default(), .errors.join("; "))]
    InvalidReport {
        report_id: Option<String>,
        errors: Vec<String>,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // ===== 导入错误 =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (only .json/.csv)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("json parse failed: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("csv parse failed: {0}")]
    CsvParseError(#[from] csv::Error),

    #[error("type conversion failed (row {row}, field {field}): {message}")]
    TypeConversionError {
        row: usize,
        field: String,
        message: String,
    },

    // ===== 配置错误 =====
    #[error("config value malformed (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },

    #[error("config file must be a flat JSON object: {0}")]
    ConfigFormatError(String),

    // ===== 消息错误 =====
    #[error("invalid broadcast message: {0}")]
    InvalidMessage(String),
}

/// 核心库 Result 类型别名
pub type ReliefResult<T> = Result<T, ReliefError>;
