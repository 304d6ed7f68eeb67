// ==========================================
// 线缆项目排期系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 所有错误必须指明原因;构建全有或全无,不产生部分排期
// ==========================================

use chrono::NaiveDate;
use thiserror::Error;

/// 排期引擎错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    // ===== 日期区间错误 =====
    /// 项目开始日期必须严格早于结束日期,构建开始前检查
    #[error("无效的日期区间: 开始日期 {start} 必须早于结束日期 {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    // ===== 时长输入错误 =====
    /// 阶段时长缺失或不符合 "<int>-<int>" 格式,整个构建中止
    #[error("阶段 '{stage}' 的时长区间非法: {detail}")]
    MalformedDuration { stage: String, detail: String },
}

impl TimelineError {
    /// 时长字符串解析失败
    pub fn unparsable_duration(stage: &str, raw: &str) -> Self {
        TimelineError::MalformedDuration {
            stage: stage.to_string(),
            detail: format!("无法解析 '{}'（期望格式 <min>-<max>，如 \"2-4\"）", raw),
        }
    }

    /// 必需阶段的时长输入缺失 (与解析失败同一错误类别)
    pub fn missing_duration(stage: &str, key: &str) -> Self {
        TimelineError::MalformedDuration {
            stage: stage.to_string(),
            detail: format!("缺少时长输入（键 '{}'）", key),
        }
    }
}

/// Result 类型别名
pub type TimelineResult<T> = Result<T, TimelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_stage() {
        let err = TimelineError::unparsable_duration("Prototype", "two-four");
        let msg = err.to_string();
        assert!(msg.contains("Prototype"));
        assert!(msg.contains("two-four"));

        let err = TimelineError::missing_duration("QGC4", "qgc4");
        let msg = err.to_string();
        assert!(msg.contains("QGC4"));
        assert!(msg.contains("qgc4"));
    }
}
