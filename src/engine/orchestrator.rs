// ==========================================
// 灾害救援决策支持核心 - 报告评估编排器
// ==========================================
// 用途: 协调校验 / 评分 / 资源估算 / 恢复规划的执行顺序
// 流程: 校验 -> 优先级 -> 资源 -> 时间线 -> 摘要
// ==========================================

use crate::config::AssessmentConfigReader;
use crate::domain::assessment::Assessment;
use crate::domain::recovery::RecoveryPlan;
use crate::domain::report::DisasterReport;
use crate::domain::resource::ResourceEstimate;
use crate::engine::{PriorityScorer, RecoveryPlanner, ResourceEstimator};
use crate::error::{ReliefError, ReliefResult};
use crate::format::format_report;
use crate::validation::ReportValidator;
use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

/// 默认规划周期 (天)
pub const DEFAULT_PLANNING_HORIZON_DAYS: u32 = 7;

// ==========================================
// ReportAssessor - 报告评估编排器
// ==========================================
#[derive(Debug, Clone)]
pub struct ReportAssessor {
    validator: ReportValidator,
    scorer: PriorityScorer,
    estimator: ResourceEstimator,
    planner: RecoveryPlanner,
    planning_horizon_days: u32,
}

impl ReportAssessor {
    /// 使用默认参数
    pub fn new() -> Self {
        Self {
            validator: ReportValidator::default(),
            scorer: PriorityScorer::new(),
            estimator: ResourceEstimator::new(),
            planner: RecoveryPlanner::new(),
            planning_horizon_days: DEFAULT_PLANNING_HORIZON_DAYS,
        }
    }

    /// 从配置读取器构建
    ///
    /// # 参数
    /// - config: 配置读取器 (评分参数 / 资源系数 / 校验阈值 / 规划周期)
    pub fn from_config(config: &dyn AssessmentConfigReader) -> ReliefResult<Self> {
        let profile = config.get_scoring_profile()?;
        let rates = config.get_resource_rates()?;
        let limits = config.get_validation_limits()?;
        let planning_horizon_days = config.get_planning_horizon_days()?;

        debug!(
            severity_weight = profile.severity_weight,
            planning_horizon_days, "评估编排器已按配置构建"
        );

        Ok(Self {
            validator: ReportValidator::new(limits),
            scorer: PriorityScorer::with_profile(profile),
            estimator: ResourceEstimator::with_rates(rates),
            planner: RecoveryPlanner::new(),
            planning_horizon_days,
        })
    }

    pub fn scorer(&self) -> &PriorityScorer {
        &self.scorer
    }

    pub fn planning_horizon_days(&self) -> u32 {
        self.planning_horizon_days
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 评估单份报告
    ///
    /// 校验失败返回 `ReliefError::InvalidReport`, 携带全部错误信息
    pub fn assess(&self, report: &DisasterReport) -> ReliefResult<Assessment> {
        let validation = self.validator.validate(report);
        if !validation.is_valid {
            warn!(
                report_id = report.id.as_deref().unwrap_or("-"),
                errors = ?validation.errors,
                "报告校验失败"
            );
            return Err(ReliefError::InvalidReport {
                report_id: report.id.clone(),
                errors: validation.errors,
            });
        }

        let priority = self.scorer.score(report);
        let resources = self.estimator.estimate(report);
        let timeline = self.planner.generate_timeline(report);

        // 无编号时由格式化生成, 摘要与结果共用同一编号
        let formatted = format_report(report);

        debug!(
            report_id = %formatted.id,
            score = priority.score,
            level = %priority.level,
            "报告评估完成"
        );

        Ok(Assessment {
            summary: formatted.summary(),
            report_id: formatted.id,
            priority: priority.level,
            score: priority.score,
            resources,
            timeline,
            warnings: validation.warnings(),
        })
    }

    /// 批量评估, 单份失败不影响其余报告
    #[instrument(skip(self, reports), fields(count = reports.len()))]
    pub fn assess_batch(&self, reports: &[DisasterReport]) -> Vec<ReliefResult<Assessment>> {
        let results: Vec<ReliefResult<Assessment>> =
            reports.iter().map(|r| self.assess(r)).collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(
            total = results.len(),
            assessed = results.len() - failed,
            failed,
            "批量评估完成"
        );
        results
    }

    /// 规划周期内的资源需求 (消耗品按天数放大)
    pub fn resources_for_horizon(&self, report: &DisasterReport) -> ResourceEstimate {
        self.estimator
            .estimate_for_days(report, self.planning_horizon_days)
    }

    /// 从指定日期开始的恢复计划
    pub fn recovery_plan(&self, report: &DisasterReport, start_date: NaiveDate) -> RecoveryPlan {
        self.planner.plan(report, start_date)
    }
}

impl Default for ReportAssessor {
    fn default() -> Self {
        Self::new()
    }
}
