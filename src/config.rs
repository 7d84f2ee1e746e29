use crate::error::{CvMatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// スキルマスタのシート名
    pub sheet_name: String,
    /// 職種列（空ヘッダーは "Unnamed: N"）
    pub job_title_column: String,
    /// スキル列
    pub skill_column: String,
    /// 職種提案ルールのJSONファイル（未指定なら組み込みルール）
    pub rules_file: Option<PathBuf>,
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_name: "Skills Master JIE".into(),
            job_title_column: "Unnamed: 1".into(),
            skill_column: "Unnamed: 3".into(),
            rules_file: None,
            show_progress: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CvMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("cv-skill-match").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_columns() {
        let config = Config::default();
        assert_eq!(config.sheet_name, "Skills Master JIE");
        assert_eq!(config.job_title_column, "Unnamed: 1");
        assert_eq!(config.skill_column, "Unnamed: 3");
        assert!(config.rules_file.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"sheet_name": "Skills"}"#).unwrap();
        assert_eq!(config.sheet_name, "Skills");
        assert_eq!(config.skill_column, "Unnamed: 3");
        assert!(config.show_progress);
    }
}
