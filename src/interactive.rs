//! 対話入力（職種選択・アシスタントへの質問）

use crate::error::{CvMatchError, Result};
use dialoguer::{Input, Select};

/// 職種一覧から1つ選択
pub fn select_job_title(titles: &[String], sheet_name: &str) -> Result<String> {
    if titles.is_empty() {
        return Err(CvMatchError::EmptySheet(sheet_name.to_string()));
    }

    let index = Select::new()
        .with_prompt("🎯 職種を選択してください")
        .items(titles)
        .default(0)
        .interact()?;

    Ok(titles[index].clone())
}

/// 質問を1件入力（空入力で終了）
pub fn read_question() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("💬 質問（空Enterで終了）")
        .allow_empty(true)
        .interact_text()?;

    let question = input.trim().to_string();
    Ok((!question.is_empty()).then_some(question))
}
