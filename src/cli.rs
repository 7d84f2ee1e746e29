use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cv-match")]
#[command(about = "履歴書PDFのスキルキーワード照合・職種提案ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// スキルマスタの職種一覧を表示
    Titles {
        /// スキルマスタ（xlsx）
        #[arg(required = true)]
        spreadsheet: PathBuf,

        /// シート名（省略時は設定値）
        #[arg(long)]
        sheet: Option<String>,
    },

    /// 履歴書をスキルと照合してランキングを表示
    Match {
        /// スキルマスタ（xlsx）
        #[arg(short, long, required = true)]
        spreadsheet: PathBuf,

        /// 職種（省略時は対話的に選択）
        #[arg(short, long)]
        job: Option<String>,

        /// 追加キーワード（カンマ区切り）
        #[arg(short, long, default_value = "")]
        keywords: String,

        /// 履歴書PDFまたはフォルダ
        #[arg(required = true)]
        cvs: Vec<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,

        /// 未マッチの履歴書についてアシスタントに質問（複数可）
        #[arg(short, long)]
        ask: Vec<String>,

        /// 照合後に対話的に質問する
        #[arg(short, long)]
        interactive: bool,

        /// 職種提案ルールのJSONファイル
        #[arg(long)]
        rules: Option<PathBuf>,

        /// シート名（省略時は設定値）
        #[arg(long)]
        sheet: Option<String>,

        /// 出力ファイル/ディレクトリ（指定時のみ書き出し）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (json/excel/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,
    },

    /// 職種提案ルールを表示
    Rules {
        /// ルールJSONファイル（省略時は設定値または組み込み）
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// シート名を設定
        #[arg(long)]
        set_sheet: Option<String>,

        /// 職種列を設定
        #[arg(long)]
        set_job_column: Option<String>,

        /// スキル列を設定
        #[arg(long)]
        set_skill_column: Option<String>,

        /// ルールファイルを設定
        #[arg(long)]
        set_rules: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Excel,
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, excel, or both", s)),
        }
    }
}
