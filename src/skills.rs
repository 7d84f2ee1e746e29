//! スキルマスタ（スプレッドシート）読み込み
//!
//! 1行目をヘッダーとして扱い、空のヘッダーは `Unnamed: {列番号}` と命名する。
//! 職種列・スキル列が無ければ照合前にエラーにする。

use crate::error::{CvMatchError, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use cv_match_common::dedup_lowercase;
use std::collections::BTreeSet;
use std::io::Cursor;

/// シート名と列の指定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    pub sheet_name: String,
    pub job_title_column: String,
    pub skill_column: String,
}

impl SheetLayout {
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self {
            sheet_name: config.sheet_name.clone(),
            job_title_column: config.job_title_column.clone(),
            skill_column: config.skill_column.clone(),
        }
    }

    /// キャッシュキー用のタグ
    pub fn cache_tag(&self) -> String {
        format!("{}\u{1f}{}\u{1f}{}", self.sheet_name, self.job_title_column, self.skill_column)
    }
}

/// 職種とスキルの2列だけを保持する表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillsTable {
    /// (職種, スキル) 行順。欠損セルは None
    rows: Vec<(Option<String>, Option<String>)>,
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        _ => cell.to_string().trim().to_string(),
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// ヘッダー名（空欄は `Unnamed: N`）
fn header_label(index: usize, value: &str) -> String {
    if value.is_empty() {
        format!("Unnamed: {}", index)
    } else {
        value.to_string()
    }
}

impl SkillsTable {
    /// xlsx/xls/ods のバイト列から読み込み
    pub fn from_bytes(bytes: &[u8], layout: &SheetLayout) -> Result<Self> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

        let sheet_names = workbook.sheet_names();
        if !sheet_names.iter().any(|name| name == &layout.sheet_name) {
            return Err(CvMatchError::SheetNotFound {
                sheet: layout.sheet_name.clone(),
                available: sheet_names.join(", "),
            });
        }

        let range = workbook.worksheet_range(&layout.sheet_name)?;
        // 範囲の開始列をずらして絶対列番号に合わせる
        let start_col = range.start().map(|(_, col)| col as usize).unwrap_or(0);

        let mut rows = range.rows().map(|row| {
            let mut values = vec![String::new(); start_col];
            values.extend(row.iter().map(cell_to_string));
            values
        });

        let header = rows
            .next()
            .ok_or_else(|| CvMatchError::EmptySheet(layout.sheet_name.clone()))?;
        let headers: Vec<String> = header
            .iter()
            .enumerate()
            .map(|(i, v)| header_label(i, v))
            .collect();

        Self::from_rows(&headers, rows, layout)
    }

    /// ヘッダーとデータ行から構築
    pub fn from_rows<I>(headers: &[String], rows: I, layout: &SheetLayout) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let column_index = |label: &str| {
            headers
                .iter()
                .position(|h| h == label)
                .ok_or_else(|| CvMatchError::MissingColumn(label.to_string()))
        };
        let title_index = column_index(&layout.job_title_column)?;
        let skill_index = column_index(&layout.skill_column)?;

        let rows = rows
            .into_iter()
            .map(|row| (non_empty(row.get(title_index)), non_empty(row.get(skill_index))))
            .filter(|(title, skill)| title.is_some() || skill.is_some())
            .collect();

        Ok(Self { rows })
    }

    /// 職種の一覧（重複なし・昇順）
    pub fn job_titles(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|(title, _)| title.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// 指定職種のスキル（小文字・重複なし・行順）
    ///
    /// 職種名は大文字小文字を区別して完全一致で比較する。
    pub fn skills_for(&self, job_title: &str) -> Result<Vec<String>> {
        let skills = dedup_lowercase(
            self.rows
                .iter()
                .filter(|(title, _)| title.as_deref() == Some(job_title))
                .filter_map(|(_, skill)| skill.as_deref()),
        );

        if skills.is_empty() {
            return Err(CvMatchError::NoSkillsFound(job_title.to_string()));
        }
        Ok(skills)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
