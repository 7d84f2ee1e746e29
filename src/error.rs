use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("テキスト抽出に失敗: {0}")]
    Extraction(String),

    #[error("シートが見つかりません: {sheet} (存在するシート: {available})")]
    SheetNotFound { sheet: String, available: String },

    #[error("列が見つかりません: {0}")]
    MissingColumn(String),

    #[error("シートが空です: {0}")]
    EmptySheet(String),

    #[error("職種が見つかりません: {0}")]
    UnknownJobTitle(String),

    #[error("職種 {0} のスキルが見つかりません")]
    NoSkillsFound(String),

    #[error("履歴書PDFが見つかりません: {0}")]
    NoDocumentsFound(String),

    #[error("スプレッドシート読み込みエラー: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("対話入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Common(#[from] cv_match_common::Error),
}

pub type Result<T> = std::result::Result<T, CvMatchError>;
