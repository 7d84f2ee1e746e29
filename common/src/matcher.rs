//! キーワード照合
//!
//! 部分文字列の包含のみで判定する（単語境界は見ない）。

use crate::keywords::KeywordSet;
use crate::types::{Document, MatchResult};

/// 1文書をキーワードセットと照合
pub fn match_document(document: &Document, keywords: &KeywordSet) -> MatchResult {
    let matched_keywords: Vec<String> = keywords
        .iter()
        .filter(|keyword| document.raw_text.contains(keyword))
        .map(str::to_string)
        .collect();

    MatchResult {
        document_name: document.name.clone(),
        match_count: matched_keywords.len(),
        matched_keywords,
    }
}

/// 複数文書を照合（入力順で返す）
pub fn match_documents(documents: &[Document], keywords: &KeywordSet) -> Vec<MatchResult> {
    documents
        .iter()
        .map(|document| match_document(document, keywords))
        .collect()
}
