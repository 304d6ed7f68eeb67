// ==========================================
// 线缆项目排期系统 - 日历散点图渲染
// ==========================================
// 职责: 月份覆盖 → (阶段 × 月份) 散点图 SVG 字节缓冲
// 坐标: x 轴 = 阶段名 (类别,按阶段顺序), y 轴 = Jan-Dec 月份缩写
// 工具: plotters SVG 后端 (渲染进内存字符串)
// ==========================================

use plotters::prelude::*;
use plotters::style::FontTransform;

use crate::domain::timeline::MonthCoverage;
use crate::export::error::{ExportError, ExportResult};

/// 月份缩写,y 轴刻度标签 (序号 1-12)
const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// 日历散点图渲染器
pub struct ChartRenderer {
    width: u32,
    height: u32,
}

impl ChartRenderer {
    /// # 参数
    /// - width / height: 输出图像尺寸 (像素)
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// 渲染日历散点图为 SVG 字节
    ///
    /// 每个阶段在其覆盖的每个月份处画一个标记;跨年退化区间为空时
    /// 该阶段没有标记 (与覆盖推导的行为一致)。
    pub fn render_to_bytes(&self, coverage: &[MonthCoverage]) -> ExportResult<Vec<u8>> {
        let stage_count = coverage.len() as i32;
        let stage_names: Vec<&str> = coverage.iter().map(|c| c.stage.as_str()).collect();

        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, (self.width, self.height)).into_drawing_area();
            root.fill(&WHITE)
                .map_err(|e| ExportError::ChartRender(e.to_string()))?;

            // x 轴两端各留一个空档,避免首尾标记贴边
            let mut chart = ChartBuilder::on(&root)
                .caption("Project Timeline", ("sans-serif", 24))
                .margin(12)
                .x_label_area_size(150)
                .y_label_area_size(60)
                .build_cartesian_2d(-1..stage_count, 0..13)
                .map_err(|e| ExportError::ChartRender(e.to_string()))?;

            chart
                .configure_mesh()
                .x_desc("Stage Name")
                .y_desc("Month")
                .x_labels((stage_count + 2) as usize)
                .y_labels(14)
                .x_label_formatter(&|x| {
                    if *x >= 0 && (*x as usize) < stage_names.len() {
                        stage_names[*x as usize].to_string()
                    } else {
                        String::new()
                    }
                })
                .y_label_formatter(&|y| {
                    if (1..=12).contains(y) {
                        MONTH_ABBR[(*y - 1) as usize].to_string()
                    } else {
                        String::new()
                    }
                })
                .x_label_style(
                    ("sans-serif", 11)
                        .into_font()
                        .transform(FontTransform::Rotate90),
                )
                .draw()
                .map_err(|e| ExportError::ChartRender(e.to_string()))?;

            // 每个 (阶段, 月份) 一个标记
            let markers = coverage
                .iter()
                .enumerate()
                .flat_map(|(idx, cov)| cov.months().map(move |m| (idx as i32, m as i32)));

            chart
                .draw_series(markers.map(|(x, y)| Circle::new((x, y), 4, BLUE.filled())))
                .map_err(|e| ExportError::ChartRender(e.to_string()))?;

            root.present()
                .map_err(|e| ExportError::ChartRender(e.to_string()))?;
        }

        Ok(svg.into_bytes())
    }
}
