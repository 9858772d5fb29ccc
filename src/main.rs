// ==========================================
// 灾害救援决策支持核心 - 命令行入口
// ==========================================
// 用法: relief-core <reports.(json|csv)> [config.json]
// 输出: stdout 上的 JSON 数组, 每份报告一项
// ==========================================

use anyhow::{bail, Context, Result};
use relief_core::config::{default_config_path, ConfigManager};
use relief_core::domain::assessment::Assessment;
use relief_core::domain::report::DisasterReport;
use relief_core::error::ReliefResult;
use relief_core::{logging, ReliefError, ReportAssessor, ReportImporter};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (reports_path, config_path) = match args.as_slice() {
        [reports] => (PathBuf::from(reports), None),
        [reports, config] => (PathBuf::from(reports), Some(PathBuf::from(config))),
        _ => bail!("usage: relief-core <reports.(json|csv)> [config.json]"),
    };

    tracing::info!(version = relief_core::VERSION, "relief-core 启动");

    let config = load_config(config_path.as_deref())?;
    let assessor = ReportAssessor::from_config(&config).context("invalid configuration")?;

    let batch = ReportImporter::new()
        .import_file(&reports_path)
        .with_context(|| format!("failed to import {}", reports_path.display()))?;

    let results = assessor.assess_batch(&batch.reports);
    let output = build_output(&batch.reports, results);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// 评估结果 -> 输出条目 `{ reportId, ok, assessment | errors }`
fn build_output(
    reports: &[DisasterReport],
    results: Vec<ReliefResult<Assessment>>,
) -> Vec<Value> {
    reports
        .iter()
        .zip(results)
        .map(|(report, result)| match result {
            Ok(assessment) => json!({
                "reportId": assessment.report_id,
                "ok": true,
                "assessment": assessment,
            }),
            Err(ReliefError::InvalidReport { errors, .. }) => json!({
                "reportId": report.id,
                "ok": false,
                "errors": errors,
            }),
            Err(other) => json!({
                "reportId": report.id,
                "ok": false,
                "errors": [other.to_string()],
            }),
        })
        .collect()
}

/// 显式路径 > 默认路径 (存在时) > 内置默认值
fn load_config(explicit: Option<&Path>) -> Result<ConfigManager> {
    if let Some(path) = explicit {
        return ConfigManager::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    match default_config_path() {
        Some(path) if path.exists() => ConfigManager::from_json_file(&path)
            .with_context(|| format!("failed to load config {}", path.display())),
        _ => Ok(ConfigManager::new()),
    }
}
