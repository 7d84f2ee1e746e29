//! セッションコンテキスト
//!
//! キャッシュ・直近のキーワードセット・未マッチ文書・アシスタント履歴を保持する。
//! 並列処理が終わったあと、メインの制御フローだけが更新する。

use crate::error::Result;
use crate::extractor::cache::{content_hash, ContentCache};
use crate::extractor::{extract_all, DocumentSource, ExtractionFailure, TextExtractor};
use crate::skills::{SheetLayout, SkillsTable};
use cv_match_common::{
    classify, match_document, missing_keywords, Document, HistoryLog, KeywordSet, MatchResult,
    RuleSet, SuggestionRecord, UnmatchedEntry,
};
use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::Serialize;

/// 1回の照合バッチの結果
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub keyword_count: usize,
    pub job_skill_count: usize,
    pub threshold: usize,
    /// 一致数の降順
    pub ranked: Vec<MatchResult>,
    pub unmatched: Vec<String>,
    pub failures: Vec<ExtractionFailure>,
}

pub struct Session<E: TextExtractor> {
    extractor: E,
    rules: RuleSet,
    text_cache: ContentCache<String>,
    skills_cache: ContentCache<SkillsTable>,
    keywords: Option<KeywordSet>,
    unmatched: Vec<UnmatchedEntry>,
    history: HistoryLog,
}

impl<E: TextExtractor> Session<E> {
    pub fn new(extractor: E, rules: RuleSet) -> Self {
        Self {
            extractor,
            rules,
            text_cache: ContentCache::new(),
            skills_cache: ContentCache::new(),
            keywords: None,
            unmatched: Vec::new(),
            history: HistoryLog::new(),
        }
    }

    /// スキルマスタを読み込む（同じ内容・同じレイアウトならキャッシュを返す）
    pub fn load_skills(&mut self, bytes: &[u8], layout: &SheetLayout) -> Result<&SkillsTable> {
        let key = content_hash(bytes, &layout.cache_tag());
        self.skills_cache.get_or_try_insert_with(key, || {
            let table = SkillsTable::from_bytes(bytes, layout)?;
            tracing::debug!(rows = table.row_count(), sheet = %layout.sheet_name, "スキルマスタ読み込み");
            Ok(table)
        })
    }

    /// 文書を抽出・照合・ランキングし、未マッチ文書を記録する
    pub fn process(&mut self, keywords: KeywordSet, sources: &[DocumentSource]) -> BatchReport {
        self.process_with_progress(keywords, sources, &ProgressBar::hidden())
    }

    pub fn process_with_progress(
        &mut self,
        keywords: KeywordSet,
        sources: &[DocumentSource],
        progress: &ProgressBar,
    ) -> BatchReport {
        let outcomes = extract_all(&self.extractor, &mut self.text_cache, sources, progress);

        let mut documents: Vec<Document> = Vec::new();
        let mut failures: Vec<ExtractionFailure> = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(document) => documents.push(document),
                Err(failure) => failures.push(failure),
            }
        }

        let results: Vec<MatchResult> = documents
            .par_iter()
            .map(|document| match_document(document, &keywords))
            .collect();

        let classification = classify(&documents, &results, keywords.len());
        tracing::info!(
            documents = documents.len(),
            failures = failures.len(),
            keywords = keywords.len(),
            threshold = classification.threshold,
            unmatched = classification.unmatched.len(),
            "照合完了"
        );

        let report = BatchReport {
            keyword_count: keywords.len(),
            job_skill_count: keywords.job_skill_count(),
            threshold: classification.threshold,
            ranked: classification.ranked,
            unmatched: classification
                .unmatched
                .iter()
                .map(|u| u.document_name.clone())
                .collect(),
            failures,
        };

        self.unmatched = classification.unmatched;
        self.keywords = Some(keywords);
        report
    }

    /// 未マッチ文書ごとに職種提案を作り、履歴の先頭に追加する
    ///
    /// 質問が空、または未処理の場合は何もしない。追加した件数を返す。
    pub fn ask(&mut self, question: &str) -> usize {
        let question = question.trim();
        let Some(keywords) = self.keywords.as_ref() else {
            tracing::debug!("照合前の質問は無視");
            return 0;
        };
        if question.is_empty() {
            return 0;
        }

        for entry in &self.unmatched {
            let suggestion = self.rules.suggest(&entry.raw_text);
            self.history.prepend(SuggestionRecord {
                document_name: entry.document_name.clone(),
                question: question.to_string(),
                matched_keywords: entry.matched_keywords.clone(),
                missing_keywords: missing_keywords(&entry.raw_text, keywords),
                suggested_roles: suggestion.roles,
                reasoning: suggestion.reasoning,
            });
        }

        tracing::debug!(records = self.unmatched.len(), "アシスタント履歴に追加");
        self.unmatched.len()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn unmatched(&self) -> &[UnmatchedEntry] {
        &self.unmatched
    }

    pub fn keywords(&self) -> Option<&KeywordSet> {
        self.keywords.as_ref()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}
