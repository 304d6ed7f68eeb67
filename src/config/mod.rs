// ==========================================
// 线缆项目排期系统 - 制品输出配置
// ==========================================
// 职责: 输出目录与图表尺寸配置,支持环境变量覆写
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 输出目录环境变量
const ENV_OUTPUT_DIR: &str = "CABLE_PLANNER_OUTPUT_DIR";
/// 图表尺寸环境变量,格式 "<宽>x<高>",如 "1200x600"
const ENV_CHART_SIZE: &str = "CABLE_PLANNER_CHART_SIZE";

// ==========================================
// ArtifactConfig - 制品配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    pub output_dir: PathBuf, // 制品输出目录 (CLI 适配层使用)
    pub chart_width: u32,    // 图表宽度 (像素)
    pub chart_height: u32,   // 图表高度 (像素)
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("artifacts"),
            chart_width: 1200,
            chart_height: 600,
        }
    }
}

impl ArtifactConfig {
    /// 从环境变量构建配置,缺失或非法时回退默认值
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var(ENV_OUTPUT_DIR) {
            if !dir.trim().is_empty() {
                config.output_dir = PathBuf::from(dir.trim());
            }
        }

        if let Ok(size) = std::env::var(ENV_CHART_SIZE) {
            match parse_chart_size(&size) {
                Some((width, height)) => {
                    config.chart_width = width;
                    config.chart_height = height;
                }
                None => {
                    tracing::warn!(value = %size, "图表尺寸配置非法,使用默认值");
                }
            }
        }

        config
    }
}

/// 解析 "<宽>x<高>" 形式的尺寸,两段均须为正整数
fn parse_chart_size(raw: &str) -> Option<(u32, u32)> {
    let (w, h) = raw.trim().split_once('x')?;
    let width = w.trim().parse::<u32>().ok()?;
    let height = h.trim().parse::<u32>().ok()?;
    if width == 0 || height == 0 {
        return None;
    }
    Some((width, height))
}
