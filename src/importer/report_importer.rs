// ==========================================
// 灾害救援决策支持核心 - 报告导入器
// ==========================================
// 职责: 整合导入流程, 从文件到报告列表
// 流程: 识别格式 -> 解析 -> 字段映射 (CSV) -> 批次信息
// 说明: 导入不做业务校验, 校验由评估编排器负责
// ==========================================

use crate::domain::report::DisasterReport;
use crate::error::ReliefResult;
use crate::importer::field_mapper::ReportFieldMapper;
use crate::importer::file_parser::{CsvParser, JsonParser, SourceFormat};
use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// 一次导入的结果
#[derive(Debug, Clone)]
pub struct ImportBatch {
    pub batch_id: String,
    pub source_file: String,
    pub format: SourceFormat,
    pub imported_at: DateTime<Utc>,
    pub reports: Vec<DisasterReport>,
}

// ==========================================
// ReportImporter - 报告导入器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportImporter;

impl ReportImporter {
    pub fn new() -> Self {
        Self
    }

    /// 从文件导入报告
    ///
    /// # 参数
    /// - file_path: .json (报告数组) 或 .csv (首行表头)
    ///
    /// # 返回
    /// - Ok(ImportBatch): 全部报告
    /// - Err: 文件不存在 / 格式不支持 / 解析失败 / 类型转换失败 (首个错误)
    #[instrument(skip(self, file_path), fields(batch_id))]
    pub fn import_file<P: AsRef<Path>>(&self, file_path: P) -> ReliefResult<ImportBatch> {
        let path = file_path.as_ref();
        let format = SourceFormat::from_path(path)?;
        let batch_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());

        info!(file_path = %path.display(), ?format, "开始导入灾情报告");

        let reports = match format {
            SourceFormat::Json => JsonParser.parse_reports(path)?,
            SourceFormat::Csv => {
                let rows = CsvParser.parse_to_raw_records(path)?;
                debug!(rows = rows.len(), "CSV 解析完成");

                let mapper = ReportFieldMapper;
                rows.iter()
                    .enumerate()
                    .map(|(idx, row)| mapper.map_to_report(row, idx + 1))
                    .collect::<ReliefResult<Vec<_>>>()?
            }
        };

        info!(count = reports.len(), "导入完成");

        Ok(ImportBatch {
            batch_id,
            source_file: path.display().to_string(),
            format,
            imported_at: Utc::now(),
            reports,
        })
    }
}
