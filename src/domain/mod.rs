// ==========================================
// 线缆项目排期系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、请求/结果视图
// 红线: 不含排期计算逻辑,不含导出逻辑
// ==========================================

pub mod timeline;
pub mod types;

// 重导出核心类型
pub use timeline::{
    MonthCoverage, StageRecord, TimelineArtifacts, TimelineOutcome, TimelineReport,
    TimelineRequest,
};
pub use types::{DurationRange, ProjectType, StageDefinition};
