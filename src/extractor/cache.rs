//! 内容アドレス型キャッシュ
//!
//! 入力バイト列とパラメータのSHA-256をキーにして結果を保持する。
//! 有効期間はセッション（プロセス内のみ、ファイルには保存しない）。

use sha2::{Digest, Sha256};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// バイト列 + パラメータタグのハッシュ（16進）
pub fn content_hash(bytes: &[u8], tag: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.update([0u8]);
    hasher.update(tag.as_bytes());
    hex::encode(hasher.finalize())
}

#[derive(Debug, Clone)]
pub struct ContentCache<T> {
    entries: HashMap<String, T>,
}

impl<T> Default for ContentCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> ContentCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// キャッシュをルックアップ
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    /// キャッシュに追加（同じキーは上書き）
    pub fn insert(&mut self, key: String, value: T) {
        self.entries.insert(key, value);
    }

    /// 無ければ `f` で作って追加し、参照を返す
    pub fn get_or_try_insert_with<F, E>(&mut self, key: String, f: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(f()?)),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
