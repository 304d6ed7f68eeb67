// ==========================================
// 线缆项目排期系统 - 导出层
// ==========================================
// 职责: 将排期结果渲染为制品 (CSV / Excel / 图表)
// 红线: 全部渲染进内存缓冲,落盘与命名由应用层负责
// ==========================================

pub mod chart;
pub mod csv_export;
pub mod error;
pub mod excel_export;

// 重导出核心类型
pub use chart::ChartRenderer;
pub use csv_export::CsvExporter;
pub use error::{ExportError, ExportResult};
pub use excel_export::ExcelRenderer;
