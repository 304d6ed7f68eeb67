// ==========================================
// 线缆项目排期系统 - 排期领域模型
// ==========================================
// 职责: 阶段记录、月份覆盖、请求/结果视图
// 红线: 排期结果只是一次构建的快照,构建后不可变
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::domain::types::ProjectType;

// ==========================================
// StageRecord - 阶段记录
// ==========================================
// 不变式: 第 i 条记录的 start_date == 第 i-1 条的 end_date
//         (i = 0 时等于项目开始日期)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRecord {
    pub name: String,           // 阶段名称
    pub start_date: NaiveDate,  // 阶段开始日期
    pub end_date: NaiveDate,    // 阶段结束日期 (= start + max_weeks 周)
    pub duration_label: String, // 时长标签 "<min>-<max>"
}

// ==========================================
// MonthCoverage - 月份覆盖
// ==========================================
// 派生只读数据,仅用于图表渲染;顺序与排期一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCoverage {
    pub stage: String,    // 阶段名称
    pub start_month: u32, // 开始月份 (1-12,不含年份)
    pub end_month: u32,   // 结束月份 (1-12,不含年份)
}

impl MonthCoverage {
    /// 覆盖的月份序号区间 (闭区间)
    ///
    /// 跨年阶段 end_month < start_month 时迭代为空,属已知退化行为,
    /// 图表上该阶段不显示标记。
    pub fn months(&self) -> RangeInclusive<u32> {
        self.start_month..=self.end_month
    }
}

// ==========================================
// TimelineRequest - 排期请求
// ==========================================
// API 层输入视图: 字段均为传输层原始字符串,由校验器解析
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineRequest {
    pub project_type: String, // 项目类型选择器 (严格解析)
    pub project_name: String, // 项目名称 (仅用于展示,不参与计算)
    pub start_date: String,   // 项目开始日期 (ISO-8601)
    pub end_date: String,     // 项目结束日期 (ISO-8601)
    /// 阶段时长输入,键为归一化阶段名 (小写,空格→下划线)
    pub durations: HashMap<String, String>,
}

// ==========================================
// TimelineReport - 结构化结果视图
// ==========================================
// 回显输入 + 完整阶段记录序列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineReport {
    pub project_type: ProjectType,  // 项目类型 (已解析)
    pub project_name: String,       // 项目名称
    pub start_date: NaiveDate,      // 项目开始日期 (已校验)
    pub end_date: NaiveDate,        // 项目结束日期 (已校验)
    pub timeline: Vec<StageRecord>, // 阶段记录序列 (按阶段顺序)
}

// ==========================================
// TimelineArtifacts - 渲染制品
// ==========================================
// 全部渲染进调用方持有的内存缓冲区,不落共享固定路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineArtifacts {
    pub spreadsheet_csv: Vec<u8>, // CSV 表格
    pub workbook_xlsx: Vec<u8>,   // Excel 工作簿
    pub chart_svg: Vec<u8>,       // 日历散点图 (SVG)
}

// ==========================================
// TimelineOutcome - 一次构建的完整产出
// ==========================================
// 全有或全无: 任何错误都不会产生部分制品
#[derive(Debug, Clone)]
pub struct TimelineOutcome {
    pub report: TimelineReport,
    pub coverage: Vec<MonthCoverage>,
    pub artifacts: TimelineArtifacts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_coverage_range() {
        let coverage = MonthCoverage {
            stage: "Prototype".to_string(),
            start_month: 1,
            end_month: 3,
        };
        let months: Vec<u32> = coverage.months().collect();
        assert_eq!(months, vec![1, 2, 3]);
    }

    #[test]
    fn test_month_coverage_single_month() {
        let coverage = MonthCoverage {
            stage: "SOP".to_string(),
            start_month: 7,
            end_month: 7,
        };
        let months: Vec<u32> = coverage.months().collect();
        assert_eq!(months, vec![7]);
    }

    #[test]
    fn test_month_coverage_year_boundary_is_empty() {
        // 跨年阶段 (11月→2月): 月份不含年份,闭区间迭代为空
        let coverage = MonthCoverage {
            stage: "Cable PPAP".to_string(),
            start_month: 11,
            end_month: 2,
        };
        assert_eq!(coverage.months().count(), 0);
    }
}
