use clap::Parser;
use cv_match_common::{KeywordSet, RuleSet};
use cv_skill_match::{cli, config, error, export, extractor, interactive, logging, report, scanner, session, skills};
use cli::{Cli, Commands};
use config::Config;
use error::{CvMatchError, Result};
use extractor::PdfTextExtractor;
use indicatif::{ProgressBar, ProgressStyle};
use session::Session;
use skills::SheetLayout;
use std::path::Path;

fn load_rules(path: Option<&Path>) -> Result<RuleSet> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(CvMatchError::FileNotFound(path.display().to_string()));
            }
            Ok(RuleSet::from_file(path)?)
        }
        None => Ok(RuleSet::builtin()),
    }
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template("  {bar:40.cyan/blue} {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Titles { spreadsheet, sheet } => {
            let mut layout = SheetLayout::from_config(&config);
            if let Some(sheet) = sheet {
                layout.sheet_name = sheet;
            }

            if !spreadsheet.exists() {
                return Err(CvMatchError::FileNotFound(spreadsheet.display().to_string()));
            }
            let bytes = std::fs::read(&spreadsheet)?;
            let table = skills::SkillsTable::from_bytes(&bytes, &layout)?;

            for title in table.job_titles() {
                println!("{}", title);
            }
        }

        Commands::Match {
            spreadsheet,
            job,
            keywords,
            cvs,
            recursive,
            ask,
            interactive: interactive_mode,
            rules,
            sheet,
            output,
            format,
        } => {
            println!("📄 cv-match - スキル照合\n");

            let mut layout = SheetLayout::from_config(&config);
            if let Some(sheet) = sheet {
                layout.sheet_name = sheet;
            }
            let rules = load_rules(rules.as_deref().or(config.rules_file.as_deref()))?;
            let mut session = Session::new(PdfTextExtractor, rules);

            // 1. スキルマスタ
            println!("[1/3] スキルマスタを読み込み中...");
            if !spreadsheet.exists() {
                return Err(CvMatchError::FileNotFound(spreadsheet.display().to_string()));
            }
            let bytes = std::fs::read(&spreadsheet)?;
            let (job, job_skills) = {
                let table = session.load_skills(&bytes, &layout)?;
                let titles = table.job_titles();

                let job = match job {
                    Some(job) if titles.contains(&job) => job,
                    Some(job) => return Err(CvMatchError::UnknownJobTitle(job)),
                    None => interactive::select_job_title(&titles, &layout.sheet_name)?,
                };

                let job_skills = match table.skills_for(&job) {
                    Ok(skills) => skills,
                    Err(CvMatchError::NoSkillsFound(title)) => {
                        tracing::warn!(job = %title, "職種スキルなし、追加キーワードのみで照合");
                        Vec::new()
                    }
                    Err(e) => return Err(e),
                };
                (job, job_skills)
            };

            let keyword_set = KeywordSet::build(&job_skills, &keywords);
            println!("✔ {} のスキルを{}件検出", job, keyword_set.job_skill_count());
            println!("🔗 合計{}件のキーワードで照合\n", keyword_set.len());

            // 2. 履歴書の抽出・照合
            println!("[2/3] 履歴書を照合中...");
            let files = scanner::collect_cv_files(&cvs, recursive)?;
            if files.is_empty() {
                return Err(CvMatchError::NoDocumentsFound(
                    cvs.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", "),
                ));
            }

            let (sources, read_failures) = extractor::read_sources(&files);
            let bar = progress_bar(sources.len(), config.show_progress);
            let mut batch = session.process_with_progress(keyword_set, &sources, &bar);
            bar.finish_and_clear();
            batch.failures.extend(read_failures);

            println!("✔ {}件を照合（閾値: {}）\n", batch.ranked.len(), batch.threshold);
            println!("📊 照合結果");
            println!("{}\n", report::format_ranked_table(&batch));

            if let Some(failures) = report::format_failures(&batch) {
                println!("⚠ 読み込めなかった履歴書:");
                println!("{}\n", failures);
            }

            println!("未マッチ: {}件", batch.unmatched.len());

            // 3. アシスタント
            println!("\n[3/3] アシスタント...");
            for question in &ask {
                session.ask(question);
            }

            if interactive_mode {
                while let Some(question) = interactive::read_question()? {
                    let added = session.ask(&question);
                    if added == 0 {
                        println!("未マッチの履歴書はありません");
                        continue;
                    }
                    for record in session.history().iter().take(added) {
                        println!("{}\n---", report::format_record(record));
                    }
                }
            }

            if !session.history().is_empty() {
                println!("\n🧠 アシスタントの回答");
                println!("{}", report::format_history(session.history()));
            }

            if let Some(output) = output {
                let payload = export::ExportPayload::new(&batch, session.history());
                let stem = export::default_file_stem();
                for path in export::export_results(&payload, &format, &output, &stem)? {
                    println!("✔ 出力: {}", path.display());
                }
            }

            println!("\n✅ 完了");
        }

        Commands::Rules { rules } => {
            let rules = load_rules(rules.as_deref().or(config.rules_file.as_deref()))?;

            for (i, rule) in rules.rules.iter().enumerate() {
                println!("{}. {} ← {}", i + 1, rule.role, rule.triggers.join(" | "));
                println!("   {}", rule.reasoning);
            }
            println!("*. {} (該当なし)", rules.fallback.role);
            println!("   {}", rules.fallback.reasoning);
        }

        Commands::Config { set_sheet, set_job_column, set_skill_column, set_rules, show } => {
            let mut config = config;
            let changed = set_sheet.is_some()
                || set_job_column.is_some()
                || set_skill_column.is_some()
                || set_rules.is_some();

            if let Some(sheet) = set_sheet {
                config.sheet_name = sheet;
            }
            if let Some(column) = set_job_column {
                config.job_title_column = column;
            }
            if let Some(column) = set_skill_column {
                config.skill_column = column;
            }
            if let Some(rules) = set_rules {
                config.rules_file = Some(rules);
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  シート名: {}", config.sheet_name);
                println!("  職種列: {}", config.job_title_column);
                println!("  スキル列: {}", config.skill_column);
                println!(
                    "  ルール: {}",
                    config
                        .rules_file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込み".into())
                );
                println!("  進捗表示: {}", if config.show_progress { "有効" } else { "無効" });
            }
        }
    }

    Ok(())
}
