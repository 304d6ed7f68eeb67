// ==========================================
// 线缆项目排期系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的配置与API实例
// ==========================================

use crate::api::TimelineApi;
use crate::config::ArtifactConfig;

/// 应用状态
///
/// 包含制品配置与排期API实例,CLI 入口构建一次后复用
pub struct AppState {
    /// 制品配置
    pub config: ArtifactConfig,

    /// 排期API
    pub timeline_api: TimelineApi,
}

impl AppState {
    /// 创建应用状态
    pub fn new(config: ArtifactConfig) -> Self {
        let timeline_api = TimelineApi::new(&config);
        Self {
            config,
            timeline_api,
        }
    }
}
