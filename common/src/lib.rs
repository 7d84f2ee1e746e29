//! CV Skill Match Common Library
//!
//! キーワード照合・ランキング・職種提案のコアロジック（I/Oなし）

pub mod types;
pub mod error;
pub mod keywords;
pub mod matcher;
pub mod ranking;
pub mod suggest;
pub mod history;

pub use types::{Document, MatchResult, UnmatchedEntry, SuggestionRecord};
pub use error::{Error, Result};
pub use keywords::{KeywordSet, parse_custom_keywords, dedup_lowercase};
pub use matcher::{match_document, match_documents};
pub use ranking::{unmatched_threshold, rank_results, classify, Classification};
pub use suggest::{RoleRule, RuleSet, Fallback, Suggestion, missing_keywords, MISSING_KEYWORD_LIMIT};
pub use history::HistoryLog;
