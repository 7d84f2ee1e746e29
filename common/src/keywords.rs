//! キーワードセット構築
//!
//! スプレッドシート由来のスキルと、ユーザー入力のカンマ区切りキーワードを
//! 小文字化・重複除去して1つのセットにまとめる。
//!
//! 反復順は挿入順で固定（スキル列の行順 → 追加キーワードの入力順）。
//! 「不足スキル上位10件」の切り出しはこの順序に依存する。

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 小文字・重複なし・空文字なしのキーワード集合
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    keywords: Vec<String>,
    /// スプレッドシート由来のスキル数（重複除去後）
    #[serde(default)]
    job_skill_count: usize,
}

impl KeywordSet {
    /// 職種スキルと追加キーワード文字列からセットを構築
    pub fn build<I, S>(job_skills: I, custom_input: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for skill in job_skills {
            set.insert(skill.as_ref());
        }
        set.job_skill_count = set.keywords.len();

        for keyword in parse_custom_keywords(custom_input) {
            set.insert(&keyword);
        }
        set
    }

    /// 順序付きのキーワード列から構築（スキル数は0扱い）
    pub fn from_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for keyword in keywords {
            set.insert(keyword.as_ref());
        }
        set
    }

    fn insert(&mut self, raw: &str) -> bool {
        let keyword = raw.trim().to_lowercase();
        if keyword.is_empty() || self.keywords.contains(&keyword) {
            return false;
        }
        self.keywords.push(keyword);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    /// スプレッドシートから得たスキル数
    pub fn job_skill_count(&self) -> usize {
        self.job_skill_count
    }
}

/// カンマ区切り文字列をキーワード列に分解
///
/// 前後の空白を除去して小文字化し、空トークンは捨てる。
/// 入力内の重複はそのまま残る（セット側で除去）。
pub fn parse_custom_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// 小文字化した重複なしリスト（出現順）
pub fn dedup_lowercase<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .map(|v| v.as_ref().trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(v.clone()))
        .collect()
}
