// ==========================================
// 线缆项目排期系统 - CLI 主入口
// ==========================================
// 技术栈: Rust + chrono + plotters
// 系统定位: 决策支持工具
// ==========================================
// 用法: cable-project-planner <request.json>
// 输入: TimelineRequest JSON 文件
// 输出: 结果视图 JSON (stdout) + 三种制品 (输出目录,唯一文件名)
// ==========================================

use anyhow::Context;

use cable_project_planner::app::{self, AppState};
use cable_project_planner::config::ArtifactConfig;
use cable_project_planner::domain::TimelineRequest;
use cable_project_planner::logging;

fn main() {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("线缆项目排期系统 - 决策支持工具");
    tracing::info!("系统版本: {}", cable_project_planner::VERSION);
    tracing::info!("==================================================");

    if let Err(err) = run() {
        // 出错即零制品,向使用者返回人类可读消息
        tracing::error!(error = %err, "排期生成失败");
        eprintln!("错误: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let request_path = std::env::args()
        .nth(1)
        .context("用法: cable-project-planner <request.json>")?;

    let raw = std::fs::read_to_string(&request_path)
        .with_context(|| format!("无法读取请求文件: {}", request_path))?;
    let request: TimelineRequest =
        serde_json::from_str(&raw).context("请求文件不是合法的排期请求 JSON")?;

    let config = ArtifactConfig::from_env();
    tracing::info!(output_dir = %config.output_dir.display(), "使用输出目录");

    let state = AppState::new(config);

    let outcome = state.timeline_api.generate(&request)?;
    let paths = app::write_artifacts(
        &state.config,
        &outcome.report.project_name,
        &outcome.artifacts,
    )?;

    tracing::info!(
        spreadsheet = %paths.spreadsheet.display(),
        workbook = %paths.workbook.display(),
        chart = %paths.chart.display(),
        "制品已写出"
    );

    // 结果视图: 回显项目信息 + 完整阶段记录序列
    println!("{}", serde_json::to_string_pretty(&outcome.report)?);

    Ok(())
}
