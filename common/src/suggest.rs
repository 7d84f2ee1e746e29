//! 職種提案ルールエンジン
//!
//! (トリガー, 職種, 理由) の順序付きテーブルを本文に対して上から評価する。
//! トリガーはいずれかの部分文字列を含めば成立（OR）。
//! 成立したルールはすべて提案に加わり、1つも成立しなければフォールバックを1件返す。
//!
//! 一致キーワードとは独立に、本文だけを見て判定する。

use crate::error::{Error, Result};
use crate::keywords::KeywordSet;
use serde::{Deserialize, Serialize};

/// 不足キーワードとして表示する最大件数
pub const MISSING_KEYWORD_LIMIT: usize = 10;

/// 1件のルール
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRule {
    pub triggers: Vec<String>,
    pub role: String,
    pub reasoning: String,
}

impl RoleRule {
    pub fn new(triggers: &[&str], role: &str, reasoning: &str) -> Self {
        Self {
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
            role: role.to_string(),
            reasoning: reasoning.to_string(),
        }
    }

    /// 小文字化済みテキストに対してトリガーを評価
    pub fn fires(&self, text: &str) -> bool {
        self.triggers.iter().any(|trigger| text.contains(trigger.as_str()))
    }
}

/// フォールバック提案
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fallback {
    pub role: String,
    pub reasoning: String,
}

/// 提案結果（`roles[i]` の理由が `reasoning[i]`）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestion {
    pub roles: Vec<String>,
    pub reasoning: Vec<String>,
}

impl Suggestion {
    fn push(&mut self, role: &str, reasoning: &str) {
        self.roles.push(role.to_string());
        self.reasoning.push(reasoning.to_string());
    }
}

/// ルールテーブル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub rules: Vec<RoleRule>,
    pub fallback: Fallback,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleSet {
    /// 組み込みルール
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                RoleRule::new(
                    &["excel", "spreadsheet"],
                    "Data Entry Clerk",
                    "Mentions Excel/spreadsheet skills suitable for data entry roles.",
                ),
                RoleRule::new(
                    &["project", "timeline"],
                    "Project Coordinator",
                    "Mentions project-related terms indicating coordination experience.",
                ),
                RoleRule::new(
                    &["customer", "client"],
                    "Customer Support Representative",
                    "Mentions customer/client interactions suitable for support roles.",
                ),
                RoleRule::new(
                    &["python", "sql", "data analysis"],
                    "Junior Data Analyst",
                    "Mentions programming or data analysis skills.",
                ),
                RoleRule::new(
                    &["marketing", "campaign"],
                    "Marketing Assistant",
                    "Mentions marketing-related terms suitable for assistant roles.",
                ),
                RoleRule::new(
                    &["design", "autocad", "revit"],
                    "Design Technician",
                    "Mentions design tools indicating suitability for technical design roles.",
                ),
            ],
            fallback: Fallback {
                role: "General Office Support".to_string(),
                reasoning: "No strong keyword matches; general support role may be appropriate."
                    .to_string(),
            },
        }
    }

    /// JSON文字列から読み込み
    ///
    /// トリガーは小文字化する。空トリガーのみのルール、空の職種名はエラー。
    pub fn from_json(json: &str) -> Result<Self> {
        let mut rule_set: Self = serde_json::from_str(json)?;
        rule_set.normalize()?;
        Ok(rule_set)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn normalize(&mut self) -> Result<()> {
        for (index, rule) in self.rules.iter_mut().enumerate() {
            rule.triggers = rule
                .triggers
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect();

            if rule.triggers.is_empty() {
                return Err(Error::InvalidRule(format!(
                    "rule #{} ({}) has no triggers",
                    index + 1,
                    rule.role
                )));
            }
            if rule.role.trim().is_empty() {
                return Err(Error::InvalidRule(format!("rule #{} has an empty role", index + 1)));
            }
        }

        if self.fallback.role.trim().is_empty() {
            return Err(Error::InvalidRule("fallback role is empty".into()));
        }
        Ok(())
    }

    /// 本文から職種を提案
    pub fn suggest(&self, text: &str) -> Suggestion {
        let mut suggestion = Suggestion::default();

        for rule in self.rules.iter().filter(|rule| rule.fires(text)) {
            suggestion.push(&rule.role, &rule.reasoning);
        }

        if suggestion.roles.is_empty() {
            suggestion.push(&self.fallback.role, &self.fallback.reasoning);
        }
        suggestion
    }
}

/// 本文に含まれないキーワード（セット順で先頭10件）
pub fn missing_keywords(text: &str, keywords: &KeywordSet) -> Vec<String> {
    keywords
        .iter()
        .filter(|keyword| !text.contains(keyword))
        .take(MISSING_KEYWORD_LIMIT)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rule_order() {
        let roles: Vec<_> = RuleSet::builtin().rules.into_iter().map(|r| r.role).collect();
        assert_eq!(
            roles,
            vec![
                "Data Entry Clerk",
                "Project Coordinator",
                "Customer Support Representative",
                "Junior Data Analyst",
                "Marketing Assistant",
                "Design Technician",
            ]
        );
    }

    #[test]
    fn test_independent_rules_fire_together() {
        let suggestion = RuleSet::builtin().suggest("advanced excel user, handled customer calls");
        assert_eq!(
            suggestion.roles,
            vec!["Data Entry Clerk", "Customer Support Representative"]
        );
        assert_eq!(
            suggestion.reasoning,
            vec![
                "Mentions Excel/spreadsheet skills suitable for data entry roles.",
                "Mentions customer/client interactions suitable for support roles.",
            ]
        );
    }

    #[test]
    fn test_fallback_when_nothing_fires() {
        let suggestion = RuleSet::builtin().suggest("enjoys painting");
        assert_eq!(suggestion.roles, vec!["General Office Support"]);
        assert_eq!(suggestion.reasoning.len(), 1);
    }

    #[test]
    fn test_any_trigger_fires_rule() {
        let rules = RuleSet::builtin();
        assert_eq!(rules.suggest("revit models").roles, vec!["Design Technician"]);
        assert_eq!(rules.suggest("wrote sql queries").roles, vec!["Junior Data Analyst"]);
        assert_eq!(rules.suggest("ran a campaign").roles, vec!["Marketing Assistant"]);
        assert_eq!(rules.suggest("met every timeline").roles, vec!["Project Coordinator"]);
    }

    #[test]
    fn test_all_rules_fire_in_declared_order() {
        let text = "spreadsheet project client python marketing autocad";
        let suggestion = RuleSet::builtin().suggest(text);
        assert_eq!(suggestion.roles.len(), 6);
        assert_eq!(suggestion.roles.len(), suggestion.reasoning.len());
        assert_eq!(suggestion.roles[0], "Data Entry Clerk");
        assert_eq!(suggestion.roles[5], "Design Technician");
    }

    #[test]
    fn test_rules_are_not_deduplicated() {
        let rules = RuleSet {
            rules: vec![
                RoleRule::new(&["a"], "Same", "first"),
                RoleRule::new(&["b"], "Same", "second"),
            ],
            fallback: Fallback { role: "F".into(), reasoning: "f".into() },
        };
        let suggestion = rules.suggest("a b");
        assert_eq!(suggestion.roles, vec!["Same", "Same"]);
        assert_eq!(suggestion.reasoning, vec!["first", "second"]);
    }

    #[test]
    fn test_missing_keywords_truncated_to_ten() {
        let keywords = KeywordSet::from_keywords((1..=15).map(|i| format!("skill{:02}", i)));
        let missing = missing_keywords("nothing relevant", &keywords);
        assert_eq!(missing.len(), MISSING_KEYWORD_LIMIT);
        assert_eq!(missing.first().map(String::as_str), Some("skill01"));
        assert_eq!(missing.last().map(String::as_str), Some("skill10"));
    }

    #[test]
    fn test_missing_keywords_skips_matched() {
        let keywords = KeywordSet::from_keywords(["excel", "python", "customer"]);
        let missing = missing_keywords("excel only", &keywords);
        assert_eq!(missing, vec!["python", "customer"]);
    }

    #[test]
    fn test_from_json_lowercases_triggers() {
        let json = r#"{
            "rules": [{"triggers": ["Welding", " "], "role": "Welder", "reasoning": "Mentions welding."}],
            "fallback": {"role": "Generalist", "reasoning": "Nothing specific."}
        }"#;
        let rules = RuleSet::from_json(json).unwrap();
        assert_eq!(rules.rules[0].triggers, vec!["welding"]);
        assert_eq!(rules.suggest("certified welding").roles, vec!["Welder"]);
        assert_eq!(rules.suggest("other").roles, vec!["Generalist"]);
    }

    #[test]
    fn test_from_json_rejects_rule_without_triggers() {
        let json = r#"{
            "rules": [{"triggers": [""], "role": "Empty", "reasoning": ""}],
            "fallback": {"role": "F", "reasoning": "f"}
        }"#;
        assert!(matches!(RuleSet::from_json(json), Err(Error::InvalidRule(_))));
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(RuleSet::from_json("{ invalid }"), Err(Error::Json(_))));
    }

    #[test]
    fn test_builtin_roundtrips_through_json() {
        let json = serde_json::to_string(&RuleSet::builtin()).unwrap();
        assert_eq!(RuleSet::from_json(&json).unwrap(), RuleSet::builtin());
    }
}
