// ==========================================
// 排期API端到端测试
// ==========================================
// 职责: 验证 TimelineApi 从原始请求到结果视图与制品的完整流程
// 红线: 全有或全无,任何校验失败都不产生制品
// ==========================================

use std::collections::HashMap;

use chrono::NaiveDate;

use cable_project_planner::api::{ApiError, TimelineApi};
use cable_project_planner::config::ArtifactConfig;
use cable_project_planner::domain::types::ProjectType;
use cable_project_planner::domain::TimelineRequest;

// ==========================================
// 测试辅助函数
// ==========================================

fn api() -> TimelineApi {
    TimelineApi::new(&ArtifactConfig::default())
}

fn adapt_project_durations() -> HashMap<String, String> {
    [
        ("project_kickoff", "1-1"),
        ("design_and_specification", "2-3"),
        ("prototype", "4-6"),
        ("production", "2-2"),
        ("testing", "1-2"),
        ("implementation", "3-4"),
        ("finalization", "1-1"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn minor_change_durations() -> HashMap<String, String> {
    [
        "project_kickoff",
        "drawing_and_bom",
        "qgco",
        "cable_sourcing",
        "air_gap_analysis",
        "customer_c_sample",
        "customer_approval_for_drawing",
        "d_sample_production_release",
        "cable_ppap",
        "qgc4",
        "sop",
    ]
    .iter()
    .map(|k| (k.to_string(), "1-2".to_string()))
    .collect()
}

fn adapt_request() -> TimelineRequest {
    TimelineRequest {
        project_type: "ADAPT_PROJECT".to_string(),
        project_name: "Harness X12".to_string(),
        start_date: "2024-01-01".to_string(),
        end_date: "2024-12-31".to_string(),
        durations: adapt_project_durations(),
    }
}

// ==========================================
// 正常流程
// ==========================================

#[test]
fn test_generate_full_outcome() {
    let outcome = api().generate(&adapt_request()).unwrap();

    // 结果视图回显输入
    assert_eq!(outcome.report.project_type, ProjectType::AdaptProject);
    assert_eq!(outcome.report.project_name, "Harness X12");
    assert_eq!(
        outcome.report.start_date,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    );
    assert_eq!(
        outcome.report.end_date,
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    );

    // 阶段记录序列完整有序
    assert_eq!(outcome.report.timeline.len(), 7);
    assert_eq!(outcome.report.timeline[0].name, "Project kickoff");
    assert_eq!(
        outcome.report.timeline.last().unwrap().end_date,
        NaiveDate::from_ymd_opt(2024, 5, 13).unwrap()
    );

    // 覆盖与排期同长同序
    assert_eq!(outcome.coverage.len(), 7);
    assert_eq!(outcome.coverage[0].stage, "Project kickoff");

    // 三种制品全部渲染
    assert!(!outcome.artifacts.spreadsheet_csv.is_empty());
    assert!(!outcome.artifacts.workbook_xlsx.is_empty());
    assert!(!outcome.artifacts.chart_svg.is_empty());
    assert_eq!(&outcome.artifacts.workbook_xlsx[..2], b"PK");
}

#[test]
fn test_generate_minor_change_with_numeric_selector() {
    // 旧表单数字选择器 "1" = 小改动项目 (11 阶段)
    let request = TimelineRequest {
        project_type: "1".to_string(),
        project_name: "Connector rev B".to_string(),
        start_date: "2024-03-04".to_string(),
        end_date: "2024-12-02".to_string(),
        durations: minor_change_durations(),
    };

    let outcome = api().generate(&request).unwrap();

    assert_eq!(outcome.report.project_type, ProjectType::MinorChange);
    assert_eq!(outcome.report.timeline.len(), 11);
    assert_eq!(outcome.report.timeline[10].name, "SOP");

    // 11 阶段 × 2 周,每阶段首尾相接
    let timeline = &outcome.report.timeline;
    for i in 1..timeline.len() {
        assert_eq!(timeline[i].start_date, timeline[i - 1].end_date);
    }
    assert_eq!(
        timeline.last().unwrap().end_date,
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap() + chrono::Duration::weeks(22)
    );
}

// ==========================================
// 边界拒绝: 日期窗口
// ==========================================

#[test]
fn test_generate_rejects_equal_dates() {
    let mut request = adapt_request();
    request.start_date = "2024-05-01".to_string();
    request.end_date = "2024-05-01".to_string();

    let err = api().generate(&request).unwrap_err();
    assert!(matches!(err, ApiError::InvalidDateRange { .. }));
}

#[test]
fn test_generate_rejects_end_before_start() {
    let mut request = adapt_request();
    request.start_date = "2024-06-01".to_string();
    request.end_date = "2024-01-01".to_string();

    let err = api().generate(&request).unwrap_err();
    assert!(matches!(err, ApiError::InvalidDateRange { .. }));
}

#[test]
fn test_generate_rejects_malformed_date_string() {
    let mut request = adapt_request();
    request.end_date = "soon".to_string();

    let err = api().generate(&request).unwrap_err();
    match err {
        ApiError::DateParse { field, value } => {
            assert_eq!(field, "end_date");
            assert_eq!(value, "soon");
        }
        other => panic!("期望 DateParse,实际 {:?}", other),
    }
}

// ==========================================
// 边界拒绝: 项目类型与时长
// ==========================================

#[test]
fn test_generate_rejects_unknown_project_type() {
    let mut request = adapt_request();
    request.project_type = "MAJOR_OVERHAUL".to_string();

    let err = api().generate(&request).unwrap_err();
    match err {
        ApiError::UnknownProjectType(selector) => assert_eq!(selector, "MAJOR_OVERHAUL"),
        other => panic!("期望 UnknownProjectType,实际 {:?}", other),
    }
}

#[test]
fn test_generate_rejects_malformed_duration_and_names_stage() {
    let mut request = adapt_request();
    request
        .durations
        .insert("implementation".to_string(), "two-four".to_string());

    let err = api().generate(&request).unwrap_err();
    match err {
        ApiError::MalformedDuration { stage, .. } => assert_eq!(stage, "Implementation"),
        other => panic!("期望 MalformedDuration,实际 {:?}", other),
    }
}

#[test]
fn test_generate_rejects_missing_duration_with_same_kind() {
    let mut request = adapt_request();
    request.durations.remove("finalization");

    let err = api().generate(&request).unwrap_err();
    match err {
        ApiError::MalformedDuration { stage, .. } => assert_eq!(stage, "Finalization"),
        other => panic!("期望 MalformedDuration,实际 {:?}", other),
    }
}

#[test]
fn test_report_serializes_to_json() {
    let outcome = api().generate(&adapt_request()).unwrap();

    let json = serde_json::to_string(&outcome.report).unwrap();
    assert!(json.contains("\"ADAPT_PROJECT\""));
    assert!(json.contains("Harness X12"));
    assert!(json.contains("2024-01-01"));
    assert!(json.contains("Prototype"));
}
