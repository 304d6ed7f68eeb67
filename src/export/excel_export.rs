// ==========================================
// 线缆项目排期系统 - Excel 工作簿导出
// ==========================================
// 职责: 阶段记录序列 → 单工作表 XLSX 字节缓冲
// 工具: rust_xlsxwriter (Workbook::save_to_buffer)
// ==========================================

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook};

use crate::domain::timeline::StageRecord;
use crate::export::error::ExportResult;

/// Excel 工作簿导出器
pub struct ExcelRenderer;

impl ExcelRenderer {
    pub fn new() -> Self {
        Self {}
    }

    /// 渲染排期工作簿为 XLSX 字节
    ///
    /// 与 CSV 同一张表: 表头行 + 每阶段一行,按阶段顺序
    pub fn render_to_bytes(&self, timeline: &[StageRecord]) -> ExportResult<Vec<u8>> {
        let mut workbook = Workbook::new();

        let header_format = Format::new()
            .set_bold()
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Center);
        let cell_format = Format::new().set_border(FormatBorder::Thin);

        let sheet = workbook.add_worksheet();
        sheet.set_name("Project Timeline")?;

        // 表头
        let headers = ["Stage Name", "Start Date", "End Date", "Duration (weeks)"];
        for (col, title) in headers.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        // 数据行
        for (idx, record) in timeline.iter().enumerate() {
            let row = (idx + 1) as u32;
            sheet.write_string_with_format(row, 0, record.name.as_str(), &cell_format)?;
            sheet.write_string_with_format(
                row,
                1,
                record.start_date.format("%Y-%m-%d").to_string(),
                &cell_format,
            )?;
            sheet.write_string_with_format(
                row,
                2,
                record.end_date.format("%Y-%m-%d").to_string(),
                &cell_format,
            )?;
            sheet.write_string_with_format(row, 3, record.duration_label.as_str(), &cell_format)?;
        }

        // 列宽: 阶段名列放宽,其余适中
        sheet.set_column_width(0, 30)?;
        sheet.set_column_width(1, 14)?;
        sheet.set_column_width(2, 14)?;
        sheet.set_column_width(3, 18)?;

        Ok(workbook.save_to_buffer()?)
    }
}

impl Default for ExcelRenderer {
    fn default() -> Self {
        Self::new()
    }
}
