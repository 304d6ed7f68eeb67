// ==========================================
// 线缆项目排期系统 - 核心库
// ==========================================
// 技术栈: Rust + chrono + plotters
// 系统定位: 决策支持工具 (人工最终控制权)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 阶段目录 - 项目类型到阶段序列的静态映射
pub mod catalog;

// 引擎层 - 排期计算
pub mod engine;

// 导出层 - 制品渲染 (CSV / Excel / 图表)
pub mod export;

// 配置层 - 制品输出配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - CLI 适配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{DurationRange, ProjectType, StageDefinition};

// 领域实体
pub use domain::{
    MonthCoverage, StageRecord, TimelineArtifacts, TimelineOutcome, TimelineReport,
    TimelineRequest,
};

// 引擎
pub use engine::{derive_month_coverage, TimelineBuilder, TimelineError};

// API
pub use api::{ApiError, ApiResult, TimelineApi};

// 配置
pub use config::ArtifactConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "线缆项目排期系统";

// ==========================================
// 预编译检查
// ==========================================
