//! 照合・提案の共通型定義

use serde::{Deserialize, Serialize};

/// 抽出済みの履歴書テキスト
///
/// `raw_text` は小文字化済み。抽出後に変更しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub name: String,
    pub raw_text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_text: raw_text.into(),
        }
    }
}

/// 1文書分の照合結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub document_name: String,
    pub match_count: usize,
    /// キーワードセットの反復順
    pub matched_keywords: Vec<String>,
}

impl MatchResult {
    /// 表示用のカンマ区切り文字列
    pub fn matched_joined(&self) -> String {
        self.matched_keywords.join(", ")
    }
}

/// 閾値未満の文書（職種提案の対象）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmatchedEntry {
    pub document_name: String,
    pub raw_text: String,
    pub matched_keywords: Vec<String>,
}

/// アシスタント履歴の1エントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRecord {
    pub document_name: String,
    pub question: String,
    pub matched_keywords: Vec<String>,
    /// 最大10件
    pub missing_keywords: Vec<String>,
    pub suggested_roles: Vec<String>,
    /// `suggested_roles` と同じ順序・同じ件数
    pub reasoning: Vec<String>,
}
