//! 照合結果・アシスタント履歴の表示用整形

use crate::session::BatchReport;
use cv_match_common::{HistoryLog, SuggestionRecord};

/// ランキング表（CV名・一致数・一致キーワード）
pub fn format_ranked_table(report: &BatchReport) -> String {
    let name_width = report
        .ranked
        .iter()
        .map(|r| r.document_name.chars().count())
        .chain(std::iter::once("CV Name".len()))
        .max()
        .unwrap_or(0);

    let mut lines = vec![format!(
        "{:<width$}  {:>11}  {}",
        "CV Name",
        "Match Count",
        "Matched Keywords",
        width = name_width
    )];

    for result in &report.ranked {
        lines.push(format!(
            "{:<width$}  {:>11}  {}",
            result.document_name,
            result.match_count,
            result.matched_joined(),
            width = name_width
        ));
    }

    lines.join("\n")
}

/// 抽出失敗の一覧
pub fn format_failures(report: &BatchReport) -> Option<String> {
    if report.failures.is_empty() {
        return None;
    }

    let lines: Vec<String> = report
        .failures
        .iter()
        .map(|f| format!("  ✘ {}: {}", f.document_name, f.reason))
        .collect();
    Some(lines.join("\n"))
}

/// 履歴1件分
pub fn format_record(record: &SuggestionRecord) -> String {
    let matched = if record.matched_keywords.is_empty() {
        "None".to_string()
    } else {
        record.matched_keywords.join(", ")
    };

    let mut lines = vec![
        format!("CV: {}", record.document_name),
        format!("💬 Question: {}", record.question),
        format!("🔍 Matched Keywords: {}", matched),
        format!("❌ Missing Skills: {}...", record.missing_keywords.join(", ")),
        format!("✅ Suggested Roles: {}", record.suggested_roles.join(", ")),
        "📌 Reasoning:".to_string(),
    ];
    lines.extend(record.reasoning.iter().map(|reason| format!("- {}", reason)));
    lines.join("\n")
}

/// 履歴全体（最新が先頭）
pub fn format_history(history: &HistoryLog) -> String {
    history
        .iter()
        .map(format_record)
        .collect::<Vec<_>>()
        .join("\n---\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::ExtractionFailure;
    use cv_match_common::MatchResult;

    fn record() -> SuggestionRecord {
        SuggestionRecord {
            document_name: "painter.pdf".into(),
            question: "other roles?".into(),
            matched_keywords: vec![],
            missing_keywords: vec!["excel".into(), "python".into()],
            suggested_roles: vec!["General Office Support".into()],
            reasoning: vec!["No strong keyword matches; general support role may be appropriate.".into()],
        }
    }

    #[test]
    fn test_format_record_shows_none_for_no_matches() {
        let text = format_record(&record());
        assert!(text.contains("🔍 Matched Keywords: None"));
        assert!(text.contains("❌ Missing Skills: excel, python..."));
        assert!(text.contains("✅ Suggested Roles: General Office Support"));
        assert!(text.ends_with("- No strong keyword matches; general support role may be appropriate."));
    }

    #[test]
    fn test_format_ranked_table() {
        let report = BatchReport {
            ranked: vec![MatchResult {
                document_name: "a.pdf".into(),
                match_count: 2,
                matched_keywords: vec!["excel".into(), "customer".into()],
            }],
            ..Default::default()
        };
        let table = format_ranked_table(&report);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("CV Name"));
        assert!(lines[1].contains("excel, customer"));
    }

    #[test]
    fn test_format_failures() {
        let mut report = BatchReport::default();
        assert!(format_failures(&report).is_none());

        report.failures.push(ExtractionFailure {
            document_name: "bad.pdf".into(),
            reason: "PDFファイルではありません".into(),
        });
        let text = format_failures(&report).unwrap();
        assert!(text.contains("bad.pdf"));
    }
}
