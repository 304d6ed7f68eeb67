// ==========================================
// 线缆项目排期系统 - 引擎层
// ==========================================
// 职责: 排期计算与月份覆盖推导,纯同步内存计算
// 红线: 引擎不做 I/O,所有错误必须指明原因
// ==========================================

pub mod error;
pub mod month_coverage;
pub mod timeline_builder;

// 重导出核心引擎
pub use error::{TimelineError, TimelineResult};
pub use month_coverage::derive_month_coverage;
pub use timeline_builder::TimelineBuilder;
