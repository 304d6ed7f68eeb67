// ==========================================
// 线缆项目排期系统 - 阶段目录
// ==========================================
// 职责: 项目类型 → 有序阶段序列的静态映射
// 红线: 纯静态查表,无状态,无错误分支
// ==========================================

use crate::domain::types::{ProjectType, StageDefinition};

// ==========================================
// 固定阶段目录
// ==========================================
// 顺序即执行顺序,不可在运行期变更

/// 小改动项目阶段目录 (11 阶段)
static MINOR_CHANGE_STAGES: [StageDefinition; 11] = [
    StageDefinition { name: "Project kickoff" },
    StageDefinition { name: "Drawing and BOM" },
    StageDefinition { name: "QGCO" },
    StageDefinition { name: "Cable Sourcing" },
    StageDefinition { name: "Air gap analysis" },
    StageDefinition { name: "Customer C sample" },
    StageDefinition { name: "Customer approval for drawing" },
    StageDefinition { name: "D sample Production Release" },
    StageDefinition { name: "Cable PPAP" },
    StageDefinition { name: "QGC4" },
    StageDefinition { name: "SOP" },
];

/// 适配项目阶段目录 (7 阶段)
static ADAPT_PROJECT_STAGES: [StageDefinition; 7] = [
    StageDefinition { name: "Project kickoff" },
    StageDefinition { name: "Design and Specification" },
    StageDefinition { name: "Prototype" },
    StageDefinition { name: "Production" },
    StageDefinition { name: "Testing" },
    StageDefinition { name: "Implementation" },
    StageDefinition { name: "Finalization" },
];

/// 按项目类型返回有序阶段序列
///
/// ProjectType 是封闭枚举,查表总是成功;未识别选择器在 API 层
/// 解析时即被拒绝,不会流到这里。
pub fn stages_for(project_type: ProjectType) -> &'static [StageDefinition] {
    match project_type {
        ProjectType::MinorChange => &MINOR_CHANGE_STAGES,
        ProjectType::AdaptProject => &ADAPT_PROJECT_STAGES,
    }
}
