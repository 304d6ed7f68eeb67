// ==========================================
// 线缆项目排期系统 - 排期业务接口
// ==========================================
// 职责: 校验请求 → 阶段目录 → 排期构建 → 月份覆盖 → 制品渲染
// 红线: 全有或全无,任何错误都返回零制品
// ==========================================

use tracing::instrument;

use crate::api::error::ApiResult;
use crate::api::validator;
use crate::catalog;
use crate::config::ArtifactConfig;
use crate::domain::timeline::{
    TimelineArtifacts, TimelineOutcome, TimelineReport, TimelineRequest,
};
use crate::engine::{derive_month_coverage, TimelineBuilder};
use crate::export::{ChartRenderer, CsvExporter, ExcelRenderer};

// ==========================================
// TimelineApi - 排期业务接口
// ==========================================
pub struct TimelineApi {
    builder: TimelineBuilder,
    csv: CsvExporter,
    excel: ExcelRenderer,
    chart: ChartRenderer,
}

impl TimelineApi {
    /// 创建新的排期业务接口
    pub fn new(config: &ArtifactConfig) -> Self {
        Self {
            builder: TimelineBuilder::new(),
            csv: CsvExporter::new(),
            excel: ExcelRenderer::new(),
            chart: ChartRenderer::new(config.chart_width, config.chart_height),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成一次完整排期
    ///
    /// 流程:
    /// 1. 边界校验 (项目类型 / 日期解析 / 日期窗口)
    /// 2. 阶段目录查表
    /// 3. 排期构建 (左折叠累加)
    /// 4. 月份覆盖推导
    /// 5. 渲染三种制品 (CSV / Excel / 图表) 到内存缓冲
    ///
    /// # 返回
    /// - Ok(TimelineOutcome): 结果视图 + 覆盖 + 全部制品
    /// - Err(ApiError): 人类可读错误,零制品
    #[instrument(skip(self, request), fields(project_type = %request.project_type, project_name = %request.project_name))]
    pub fn generate(&self, request: &TimelineRequest) -> ApiResult<TimelineOutcome> {
        let validated = validator::validate_request(request)?;

        let stages = catalog::stages_for(validated.project_type);
        let timeline = self
            .builder
            .build(stages, validated.start_date, &request.durations)?;
        let coverage = derive_month_coverage(&timeline);

        let spreadsheet_csv = self.csv.render_to_bytes(&timeline)?;
        let workbook_xlsx = self.excel.render_to_bytes(&timeline)?;
        let chart_svg = self.chart.render_to_bytes(&coverage)?;

        tracing::info!(
            project_type = %validated.project_type,
            stage_count = timeline.len(),
            "排期生成完成"
        );

        Ok(TimelineOutcome {
            report: TimelineReport {
                project_type: validated.project_type,
                project_name: validated.project_name,
                start_date: validated.start_date,
                end_date: validated.end_date,
                timeline,
            },
            coverage,
            artifacts: TimelineArtifacts {
                spreadsheet_csv,
                workbook_xlsx,
                chart_svg,
            },
        })
    }
}
