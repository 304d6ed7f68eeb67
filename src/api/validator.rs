// ==========================================
// 线缆项目排期系统 - 请求校验器
// ==========================================
// 职责: 传输层原始输入 → 类型化输入
// 校验: 项目类型严格解析、ISO 日期解析、日期窗口检查
// 红线: 任何校验失败都在阶段处理开始之前拒绝请求
// ==========================================

use chrono::NaiveDate;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::timeline::TimelineRequest;
use crate::domain::types::ProjectType;
use crate::engine::timeline_builder::TimelineBuilder;

// ==========================================
// ValidatedRequest - 已校验请求
// ==========================================
/// 通过全部边界校验后的类型化请求头
/// (阶段时长仍以原始字符串交给引擎逐阶段解析)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub project_type: ProjectType,
    pub project_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// 解析 ISO-8601 (YYYY-MM-DD) 日期字符串
pub fn parse_iso_date(field: &str, value: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ApiError::DateParse {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// 严格解析项目类型选择器
pub fn parse_project_type(selector: &str) -> ApiResult<ProjectType> {
    ProjectType::parse(selector)
        .ok_or_else(|| ApiError::UnknownProjectType(selector.to_string()))
}

/// 校验排期请求
///
/// # 返回
/// - Ok(ValidatedRequest): 类型化请求头
/// - Err(ApiError): 未知项目类型 / 日期解析失败 / 开始日期不早于结束日期
pub fn validate_request(request: &TimelineRequest) -> ApiResult<ValidatedRequest> {
    let project_type = parse_project_type(&request.project_type)?;
    let start_date = parse_iso_date("start_date", &request.start_date)?;
    let end_date = parse_iso_date("end_date", &request.end_date)?;

    // 日期窗口检查在任何阶段处理之前完成
    TimelineBuilder::new().validate_date_window(start_date, end_date)?;

    Ok(ValidatedRequest {
        project_type,
        project_name: request.project_name.clone(),
        start_date,
        end_date,
    })
}
