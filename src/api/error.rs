// ==========================================
// 线缆项目排期系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,转换引擎/导出错误为用户友好的错误消息
// 红线: 所有错误信息必须包含显式原因;出错即零制品
// ==========================================

use chrono::NaiveDate;
use thiserror::Error;

use crate::engine::error::TimelineError;
use crate::export::error::ExportError;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入校验错误
    // ==========================================
    /// 日期字符串不是合法的 ISO-8601 (YYYY-MM-DD) 日期
    #[error("日期解析失败: 字段 {field} 的取值 '{value}' 不是合法的 YYYY-MM-DD 日期")]
    DateParse { field: String, value: String },

    /// 项目类型选择器未识别 (严格模式,不再默认为适配项目)
    #[error("未知的项目类型: '{0}'")]
    UnknownProjectType(String),

    // ==========================================
    // 排期构建错误
    // ==========================================
    #[error("无效的日期区间: 开始日期 {start} 必须早于结束日期 {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("阶段 '{stage}' 的时长区间非法: {detail}")]
    MalformedDuration { stage: String, detail: String },

    // ==========================================
    // 制品错误
    // ==========================================
    #[error("制品导出失败: {0}")]
    ExportFailure(String),

    #[error("制品写入失败: {0}")]
    Io(#[from] std::io::Error),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从引擎层错误转换
// 目的: 将引擎错误原样映射为面向调用方的错误类别
// ==========================================
impl From<TimelineError> for ApiError {
    fn from(err: TimelineError) -> Self {
        match err {
            TimelineError::InvalidDateRange { start, end } => {
                ApiError::InvalidDateRange { start, end }
            }
            TimelineError::MalformedDuration { stage, detail } => {
                ApiError::MalformedDuration { stage, detail }
            }
        }
    }
}

// ==========================================
// 从导出层错误转换
// ==========================================
impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::ExportFailure(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
