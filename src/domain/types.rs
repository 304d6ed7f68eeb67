// ==========================================
// 线缆项目排期系统 - 领域类型定义
// ==========================================
// 职责: 项目类型、阶段定义、时长区间
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 项目类型 (Project Type)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与表单数据一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectType {
    MinorChange,  // 小改动项目 (11 阶段)
    AdaptProject, // 适配项目 (7 阶段)
}

impl ProjectType {
    /// 解析项目类型选择器
    ///
    /// 严格解析: 未识别的取值返回 None,由 API 层转换为校验错误。
    /// 兼容旧表单的数字选择器 ("1"/"2")。
    pub fn parse(selector: &str) -> Option<ProjectType> {
        match selector.trim() {
            "1" | "MINOR_CHANGE" | "MinorChange" => Some(ProjectType::MinorChange),
            "2" | "ADAPT_PROJECT" | "AdaptProject" => Some(ProjectType::AdaptProject),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectType::MinorChange => write!(f, "MINOR_CHANGE"),
            ProjectType::AdaptProject => write!(f, "ADAPT_PROJECT"),
        }
    }
}

// ==========================================
// 阶段定义 (Stage Definition)
// ==========================================
// 不可变,进程启动即固定;名称在目录内唯一,顺序即执行顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageDefinition {
    pub name: &'static str, // 阶段名称 (展示用,顺序有业务含义)
}

impl StageDefinition {
    /// 阶段时长输入的归一化键
    ///
    /// 规则: 全小写,空格替换为下划线
    /// 例如: "Design and Specification" → "design_and_specification"
    pub fn duration_key(&self) -> String {
        self.name.to_lowercase().replace(' ', "_")
    }
}

// ==========================================
// 时长区间 (Duration Range)
// ==========================================
// 来源: 每阶段一条用户输入,格式 "<min>-<max>" (周)
// 注意: 不强制 min <= max (保持既有行为)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationRange {
    pub min_weeks: u32, // 乐观周数 (仅用于展示标签)
    pub max_weeks: u32, // 悲观周数 (用于日期推进)
}

impl DurationRange {
    /// 解析 "<min>-<max>" 形式的时长区间
    ///
    /// # 返回
    /// - Some(DurationRange): 解析成功
    /// - None: 非两段、或任一段不是非负整数
    pub fn parse(raw: &str) -> Option<DurationRange> {
        let parts: Vec<&str> = raw.split('-').collect();
        if parts.len() != 2 {
            return None;
        }

        let min_weeks = parts[0].trim().parse::<u32>().ok()?;
        let max_weeks = parts[1].trim().parse::<u32>().ok()?;

        Some(DurationRange {
            min_weeks,
            max_weeks,
        })
    }

    /// 展示标签,格式与输入一致: "<min>-<max>"
    pub fn label(&self) -> String {
        format!("{}-{}", self.min_weeks, self.max_weeks)
    }
}

impl fmt::Display for DurationRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min_weeks, self.max_weeks)
    }
}
