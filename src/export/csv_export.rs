// ==========================================
// 线缆项目排期系统 - CSV 表格导出
// ==========================================
// 职责: 阶段记录序列 → CSV 字节缓冲
// 列: Stage Name, Start Date, End Date, Duration (weeks)
// 红线: 渲染进调用方持有的内存缓冲,不写共享固定路径
// ==========================================

use csv::Writer;

use crate::domain::timeline::StageRecord;
use crate::export::error::{ExportError, ExportResult};

/// CSV 表格导出器
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self {}
    }

    /// 渲染排期表格为 CSV 字节
    ///
    /// 一行表头 + 每阶段一行,按阶段顺序;日期格式 YYYY-MM-DD
    pub fn render_to_bytes(&self, timeline: &[StageRecord]) -> ExportResult<Vec<u8>> {
        let mut writer = Writer::from_writer(Vec::new());

        writer
            .write_record(["Stage Name", "Start Date", "End Date", "Duration (weeks)"])
            .map_err(|e| ExportError::CsvWrite(e.to_string()))?;

        for record in timeline {
            let start = record.start_date.format("%Y-%m-%d").to_string();
            let end = record.end_date.format("%Y-%m-%d").to_string();
            writer
                .write_record([
                    record.name.as_str(),
                    start.as_str(),
                    end.as_str(),
                    record.duration_label.as_str(),
                ])
                .map_err(|e| ExportError::CsvWrite(e.to_string()))?;
        }

        writer
            .into_inner()
            .map_err(|e| ExportError::CsvWrite(e.to_string()))
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_csv_rows_match_timeline() {
        let timeline = vec![StageRecord {
            name: "Project kickoff".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            duration_label: "1-1".to_string(),
        }];

        let bytes = CsvExporter::new().render_to_bytes(&timeline).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Stage Name,Start Date,End Date,Duration (weeks)"
        );
        assert_eq!(lines[1], "Project kickoff,2024-01-01,2024-01-08,1-1");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_csv_empty_timeline_is_header_only() {
        let bytes = CsvExporter::new().render_to_bytes(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
