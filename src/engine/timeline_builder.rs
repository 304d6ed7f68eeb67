// ==========================================
// 线缆项目排期系统 - 排期构建引擎
// ==========================================
// 职责: 按阶段顺序左折叠累加时长,生成阶段记录序列
// 输入: 有序阶段定义 + 项目开始日期 + 每阶段时长区间
// 输出: Vec<StageRecord> (与输入同长同序)
// 红线: 失败即中止,不产生部分排期;仅用 max_weeks 推进日期
// ==========================================

use chrono::{Duration, NaiveDate};
use std::collections::HashMap;
use tracing::instrument;

use crate::domain::timeline::StageRecord;
use crate::domain::types::{DurationRange, StageDefinition};
use crate::engine::error::{TimelineError, TimelineResult};

// ==========================================
// TimelineBuilder - 排期构建引擎
// ==========================================
pub struct TimelineBuilder;

impl TimelineBuilder {
    /// 创建新的排期构建引擎
    pub fn new() -> Self {
        Self {}
    }

    /// 校验项目日期窗口
    ///
    /// 规则: 开始日期必须严格早于结束日期,在任何阶段处理之前检查
    pub fn validate_date_window(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> TimelineResult<()> {
        if start >= end {
            return Err(TimelineError::InvalidDateRange { start, end });
        }
        Ok(())
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 构建阶段排期
    ///
    /// 算法 (严格左折叠,阶段不可乱序处理):
    /// 1. 游标初始化为项目开始日期
    /// 2. 逐阶段解析时长区间 "<min>-<max>"
    /// 3. 阶段结束 = 游标 + max_weeks 周 (1 周 = 7 天,普通日历加法,
    ///    无工作日逻辑,无时区)
    /// 4. 产出记录后游标推进到阶段结束
    ///
    /// min_weeks 仅保留在展示标签中,不参与日期推进。
    ///
    /// # 参数
    /// - stages: 有序阶段定义
    /// - project_start: 项目开始日期
    /// - durations: 归一化阶段名 → 时长字符串
    ///
    /// # 返回
    /// - Ok(Vec<StageRecord>): 与 stages 同长同序的记录序列
    /// - Err(TimelineError::MalformedDuration): 任一阶段时长缺失或
    ///   解析失败,整个构建中止
    #[instrument(skip(self, stages, durations), fields(stage_count = stages.len(), start = %project_start))]
    pub fn build(
        &self,
        stages: &[StageDefinition],
        project_start: NaiveDate,
        durations: &HashMap<String, String>,
    ) -> TimelineResult<Vec<StageRecord>> {
        let mut timeline = Vec::with_capacity(stages.len());
        let mut cursor = project_start;

        for stage in stages {
            let range = self.duration_for(stage, durations)?;

            let stage_end = cursor + Duration::weeks(i64::from(range.max_weeks));

            timeline.push(StageRecord {
                name: stage.name.to_string(),
                start_date: cursor,
                end_date: stage_end,
                duration_label: range.label(),
            });

            cursor = stage_end;
        }

        tracing::debug!(
            stage_count = timeline.len(),
            project_end = %cursor,
            "排期构建完成"
        );

        Ok(timeline)
    }

    /// 取出并解析单个阶段的时长区间
    fn duration_for(
        &self,
        stage: &StageDefinition,
        durations: &HashMap<String, String>,
    ) -> TimelineResult<DurationRange> {
        let key = stage.duration_key();

        let raw = durations
            .get(&key)
            .ok_or_else(|| TimelineError::missing_duration(stage.name, &key))?;

        DurationRange::parse(raw)
            .ok_or_else(|| TimelineError::unparsable_duration(stage.name, raw))
    }
}

impl Default for TimelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
