// ==========================================
// 线缆项目排期系统 - 应用层
// ==========================================
// 职责: CLI 适配,制品落盘 (唯一文件名)
// 红线: 不使用共享固定路径,并发调用互不覆盖
// ==========================================

use std::fs;
use std::path::PathBuf;

use uuid::Uuid;

use crate::api::ApiResult;
use crate::config::ArtifactConfig;
use crate::domain::timeline::TimelineArtifacts;

pub mod state;

pub use state::AppState;

// ==========================================
// ArtifactPaths - 落盘制品路径
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub spreadsheet: PathBuf, // CSV 表格
    pub workbook: PathBuf,    // Excel 工作簿
    pub chart: PathBuf,       // 日历散点图 (SVG)
}

/// 将制品写入输出目录,文件名带 UUID 后缀保证唯一
///
/// # 参数
/// - config: 制品配置 (输出目录)
/// - project_name: 项目名称,用于文件名前缀
/// - artifacts: 内存中的已渲染制品
///
/// # 返回
/// - Ok(ArtifactPaths): 三个制品的落盘路径
/// - Err(ApiError::Io): 目录创建或文件写入失败
pub fn write_artifacts(
    config: &ArtifactConfig,
    project_name: &str,
    artifacts: &TimelineArtifacts,
) -> ApiResult<ArtifactPaths> {
    fs::create_dir_all(&config.output_dir)?;

    let stem = artifact_stem(project_name);
    let token = Uuid::new_v4();

    let paths = ArtifactPaths {
        spreadsheet: config.output_dir.join(format!("{stem}-{token}.csv")),
        workbook: config.output_dir.join(format!("{stem}-{token}.xlsx")),
        chart: config.output_dir.join(format!("{stem}-{token}.svg")),
    };

    fs::write(&paths.spreadsheet, &artifacts.spreadsheet_csv)?;
    fs::write(&paths.workbook, &artifacts.workbook_xlsx)?;
    fs::write(&paths.chart, &artifacts.chart_svg)?;

    Ok(paths)
}

/// 项目名称 → 文件名前缀 (字母数字保留,其余替换为下划线)
fn artifact_stem(project_name: &str) -> String {
    let cleaned: String = project_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "project_timeline".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_stem() {
        assert_eq!(artifact_stem("Harness X12"), "harness_x12");
        assert_eq!(artifact_stem("  "), "project_timeline");
        assert_eq!(artifact_stem("A/B:C"), "a_b_c");
    }

    #[test]
    fn test_write_artifacts_uses_unique_names() {
        let dir = tempfile::tempdir().unwrap();
        let config = ArtifactConfig {
            output_dir: dir.path().to_path_buf(),
            ..ArtifactConfig::default()
        };
        let artifacts = TimelineArtifacts {
            spreadsheet_csv: b"csv".to_vec(),
            workbook_xlsx: b"PK".to_vec(),
            chart_svg: b"<svg/>".to_vec(),
        };

        let first = write_artifacts(&config, "Harness X12", &artifacts).unwrap();
        let second = write_artifacts(&config, "Harness X12", &artifacts).unwrap();

        // 同名项目重复写出不会互相覆盖
        assert_ne!(first.spreadsheet, second.spreadsheet);
        assert!(first.spreadsheet.exists());
        assert!(second.spreadsheet.exists());
        assert_eq!(fs::read(&first.chart).unwrap(), b"<svg/>".to_vec());
    }
}
