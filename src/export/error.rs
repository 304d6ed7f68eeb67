// ==========================================
// 线缆项目排期系统 - 导出模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    // ===== 表格导出错误 =====
    #[error("CSV 导出失败: {0}")]
    CsvWrite(String),

    #[error("Excel 导出失败: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    // ===== 图表渲染错误 =====
    #[error("图表渲染失败: {0}")]
    ChartRender(String),
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
