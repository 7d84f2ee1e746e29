pub mod excel;
pub mod json;

use crate::cli::ExportFormat;
use crate::error::Result;
use crate::session::BatchReport;
use cv_match_common::{HistoryLog, SuggestionRecord};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// 出力内容（ランキング・未マッチ・失敗・アシスタント履歴）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload<'a> {
    pub report: &'a BatchReport,
    /// 最新が先頭
    pub history: Vec<&'a SuggestionRecord>,
}

impl<'a> ExportPayload<'a> {
    pub fn new(report: &'a BatchReport, history: &'a HistoryLog) -> Self {
        Self {
            report,
            history: history.iter().collect(),
        }
    }
}

/// 既定のファイル名（拡張子なし）
pub fn default_file_stem() -> String {
    format!("cv-match-{}", chrono::Local::now().format("%Y%m%d-%H%M%S"))
}

fn output_path_for_format(output: &Path, stem: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", stem, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, stem: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let json_path = output.join(format!("{}.json", stem));
        let excel_path = output.join(format!("{}.xlsx", stem));
        (json_path, excel_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(stem);
        let json_path = parent.join(format!("{}.json", stem));
        let excel_path = parent.join(format!("{}.xlsx", stem));
        (json_path, excel_path)
    }
}

/// 指定形式で書き出し、作成したファイルのパスを返す
pub fn export_results(
    payload: &ExportPayload,
    format: &ExportFormat,
    output: &Path,
    stem: &str,
) -> Result<Vec<PathBuf>> {
    if output.extension().is_none() {
        std::fs::create_dir_all(output)?;
    } else if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let written = match format {
        ExportFormat::Json => {
            let output_path = output_path_for_format(output, stem, "json");
            json::generate_json(payload, &output_path)?;
            vec![output_path]
        }
        ExportFormat::Excel => {
            let output_path = output_path_for_format(output, stem, "xlsx");
            excel::generate_excel(payload, &output_path)?;
            vec![output_path]
        }
        ExportFormat::Both => {
            let (json_path, excel_path) = output_paths_for_both(output, stem);
            json::generate_json(payload, &json_path)?;
            excel::generate_excel(payload, &excel_path)?;
            vec![json_path, excel_path]
        }
    };

    for path in &written {
        tracing::info!(path = %path.display(), "エクスポート完了");
    }
    Ok(written)
}
