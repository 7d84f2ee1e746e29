//! 履歴書テキスト抽出モジュール
//!
//! - PDFの全ページのテキストをページ順に区切りなしで連結し、小文字化する
//! - 文書ごとに独立して並列抽出し、全件そろってから結果を返す
//! - 抽出に失敗した文書はバッチを止めずに失敗として報告する

pub mod cache;

use cache::{content_hash, ContentCache};
use crate::scanner::CvFile;
use cv_match_common::Document;
use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

/// 1文書分の抽出エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ExtractionError(pub String);

impl From<ExtractionError> for crate::error::CvMatchError {
    fn from(err: ExtractionError) -> Self {
        crate::error::CvMatchError::Extraction(err.0)
    }
}

/// ページ単位のテキスト抽出
pub trait TextExtractor: Send + Sync {
    /// キャッシュキーに含める識別子
    fn cache_tag(&self) -> &str;

    /// ページ順のテキスト
    fn extract_pages(&self, bytes: &[u8]) -> std::result::Result<Vec<String>, ExtractionError>;
}

/// pdf-extract によるPDF抽出
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

fn looks_like_pdf(data: &[u8]) -> bool {
    data.starts_with(b"%PDF-")
}

impl TextExtractor for PdfTextExtractor {
    fn cache_tag(&self) -> &str {
        "pdf-extract"
    }

    fn extract_pages(&self, bytes: &[u8]) -> std::result::Result<Vec<String>, ExtractionError> {
        if !looks_like_pdf(bytes) {
            return Err(ExtractionError("PDFファイルではありません".into()));
        }

        // pdf-extract は壊れたPDFで panic することがある
        match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes)) {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(ExtractionError(format!("PDFを読み込めません: {}", e))),
            Err(_) => Err(ExtractionError("PDFの解析中に異常終了しました".into())),
        }
    }
}

/// 全ページを連結して小文字化
pub fn extract_text<E: TextExtractor + ?Sized>(
    extractor: &E,
    bytes: &[u8],
) -> std::result::Result<String, ExtractionError> {
    let pages = extractor.extract_pages(bytes)?;
    Ok(pages.concat().to_lowercase())
}

/// 読み込み済みの文書バイト列
#[derive(Debug, Clone)]
pub struct DocumentSource {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl DocumentSource {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// 抽出に失敗した文書
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionFailure {
    pub document_name: String,
    pub reason: String,
}

/// 履歴書ファイルを読み込む（読めないファイルは失敗として返す）
pub fn read_sources(files: &[CvFile]) -> (Vec<DocumentSource>, Vec<ExtractionFailure>) {
    let mut sources = Vec::new();
    let mut failures = Vec::new();

    for file in files {
        match std::fs::read(&file.path) {
            Ok(bytes) => sources.push(DocumentSource::new(file.file_name.clone(), bytes)),
            Err(e) => {
                tracing::warn!(file = %file.path.display(), error = %e, "履歴書を読み込めません");
                failures.push(ExtractionFailure {
                    document_name: file.file_name.clone(),
                    reason: format!("ファイルを読み込めません: {}", e),
                });
            }
        }
    }

    (sources, failures)
}

/// 抽出結果（入力順）
pub type ExtractionOutcome = std::result::Result<Document, ExtractionFailure>;

/// キャッシュを使いながら全文書を並列抽出
///
/// キャッシュへの書き込みは並列処理がすべて終わってから行う。
pub fn extract_all<E: TextExtractor + ?Sized>(
    extractor: &E,
    cache: &mut ContentCache<String>,
    sources: &[DocumentSource],
    progress: &ProgressBar,
) -> Vec<ExtractionOutcome> {
    let keys: Vec<String> = sources
        .iter()
        .map(|s| content_hash(&s.bytes, extractor.cache_tag()))
        .collect();

    let mut texts: Vec<Option<std::result::Result<String, ExtractionError>>> = keys
        .iter()
        .map(|key| cache.get(key).cloned().map(Ok))
        .collect();

    let pending: Vec<usize> = texts
        .iter()
        .enumerate()
        .filter(|(_, text)| text.is_none())
        .map(|(i, _)| i)
        .collect();

    let hits = sources.len() - pending.len();
    progress.inc(hits as u64);
    tracing::debug!(total = sources.len(), cache_hits = hits, "テキスト抽出開始");

    let extracted: Vec<(usize, std::result::Result<String, ExtractionError>)> = pending
        .par_iter()
        .map(|&i| {
            let result = extract_text(extractor, &sources[i].bytes);
            progress.inc(1);
            (i, result)
        })
        .collect();

    for (i, result) in extracted {
        if let Ok(text) = &result {
            cache.insert(keys[i].clone(), text.clone());
        }
        texts[i] = Some(result);
    }

    sources
        .iter()
        .zip(texts)
        .map(|(source, text)| match text {
            Some(Ok(raw_text)) => Ok(Document::new(source.name.clone(), raw_text)),
            Some(Err(e)) => {
                tracing::warn!(document = %source.name, error = %e, "テキスト抽出に失敗");
                Err(ExtractionFailure {
                    document_name: source.name.clone(),
                    reason: e.to_string(),
                })
            }
            None => Err(ExtractionFailure {
                document_name: source.name.clone(),
                reason: "抽出結果がありません".into(),
            }),
        })
        .collect()
}
