//! ランキングと閾値判定
//!
//! - 一致数の降順で並べる（同数は元の順序を維持）
//! - 一致数が `max(1, キーワード数 / 4)` 未満の文書を「未マッチ」とする

use crate::types::{Document, MatchResult, UnmatchedEntry};

/// 未マッチ判定の閾値
pub fn unmatched_threshold(keyword_count: usize) -> usize {
    (keyword_count / 4).max(1)
}

/// 一致数の降順に並べ替え（安定ソート）
pub fn rank_results(results: &[MatchResult]) -> Vec<MatchResult> {
    let mut ranked = results.to_vec();
    ranked.sort_by(|a, b| b.match_count.cmp(&a.match_count));
    ranked
}

/// 分類結果
#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub threshold: usize,
    pub ranked: Vec<MatchResult>,
    /// 照合時の文書順
    pub unmatched: Vec<UnmatchedEntry>,
}

/// ランキング表と未マッチ文書を作る
///
/// `documents` と `results` は同じ順序で対応していること。
pub fn classify(
    documents: &[Document],
    results: &[MatchResult],
    keyword_count: usize,
) -> Classification {
    let threshold = unmatched_threshold(keyword_count);

    let unmatched = documents
        .iter()
        .zip(results)
        .filter(|(_, r)| r.match_count < threshold)
        .map(|(d, r)| UnmatchedEntry {
            document_name: r.document_name.clone(),
            raw_text: d.raw_text.clone(),
            matched_keywords: r.matched_keywords.clone(),
        })
        .collect();

    Classification {
        threshold,
        ranked: rank_results(results),
        unmatched,
    }
}
