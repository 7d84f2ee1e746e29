//! アシスタント履歴
//!
//! 新しいエントリを先頭に追加する（最新が先頭）。更新・削除はしない。

use crate::types::SuggestionRecord;
use serde::Serialize;
use std::collections::VecDeque;

#[derive(Debug, Clone, Default, Serialize)]
pub struct HistoryLog {
    entries: VecDeque<SuggestionRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 先頭に追加
    pub fn prepend(&mut self, record: SuggestionRecord) {
        self.entries.push_front(record);
    }

    /// 保存順（最新が先頭）
    pub fn iter(&self) -> impl Iterator<Item = &SuggestionRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
