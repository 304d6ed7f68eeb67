// ==========================================
// 线缆项目排期系统 - 月份覆盖推导
// ==========================================
// 职责: 从阶段记录推导每阶段触及的日历月份区间
// 输出: 与排期同序的 Vec<MonthCoverage>,仅供图表渲染使用
// ==========================================

use chrono::Datelike;

use crate::domain::timeline::{MonthCoverage, StageRecord};

/// 推导每个阶段覆盖的日历月份区间
///
/// 取 start_date / end_date 的月份序号 (1-12,不含年份) 构成闭区间。
/// 跨年阶段的 end 月份数值小于 start 月份时,区间迭代为空。
/// 已知退化行为,刻意保留,不做环绕修正。
pub fn derive_month_coverage(timeline: &[StageRecord]) -> Vec<MonthCoverage> {
    timeline
        .iter()
        .map(|record| MonthCoverage {
            stage: record.name.clone(),
            start_month: record.start_date.month(),
            end_month: record.end_date.month(),
        })
        .collect()
}
