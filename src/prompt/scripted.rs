use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};

use super::Prompter;

/// Prompter that replays a pre-recorded list of answers in prompt order.
/// Backs the `--answers` non-interactive mode and the interview tests.
///
/// Answer files are a YAML list consumed top to bottom. An empty entry means
/// "accept the default" for text prompts, and terminates a free-list prompt
/// (findings entry). Once the list is exhausted, text prompts with a default
/// keep answering with that default.
#[derive(Debug, Clone)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Load answers from a YAML list. Scalars of any type are accepted and
    /// stringified, so `- 5` and `- "5"` behave the same.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read answers file at {}", path.display()))?;
        let values: Vec<serde_json::Value> = serde_saphyr::from_str(&content)
            .with_context(|| format!("Answers file {} is not a YAML list", path.display()))?;
        Ok(Self::new(values.into_iter().map(stringify)))
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self) -> Option<String> {
        self.answers.pop_front().map(|s| s.trim().to_string())
    }
}

fn stringify(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_text(&mut self, label: &str, default: Option<&str>) -> Result<String> {
        match self.next() {
            Some(ans) if !ans.is_empty() => Ok(ans),
            Some(_) => Ok(default.unwrap_or("").to_string()),
            None => match default {
                Some(d) => Ok(d.to_string()),
                None => bail!("Ran out of scripted answers at prompt '{label}'"),
            },
        }
    }

    fn ask_choice(&mut self, label: &str, options: &[&str]) -> Result<usize> {
        let ans = self
            .next()
            .ok_or_else(|| anyhow!("Ran out of scripted answers at menu '{label}'"))?;
        let n: usize = ans
            .parse()
            .with_context(|| format!("Scripted answer '{ans}' for menu '{label}' is not a number"))?;
        if n < 1 || n > options.len() {
            bail!("Scripted answer {n} out of range for menu '{label}'");
        }
        Ok(n)
    }

    fn ask_lines(&mut self, _prompt: &str) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        while let Some(line) = self.next() {
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_answer_used_verbatim() {
        let mut p = ScriptedPrompter::new(["Joe's Garage"]);
        assert_eq!(p.ask_text("Business name", None).unwrap(), "Joe's Garage");
    }

    #[test]
    fn test_empty_answer_falls_back_to_default() {
        let mut p = ScriptedPrompter::new([""]);
        assert_eq!(p.ask_text("Rating", Some("none")).unwrap(), "none");
    }

    #[test]
    fn test_exhausted_with_default_keeps_answering() {
        let mut p = ScriptedPrompter::new(Vec::<String>::new());
        assert_eq!(p.ask_text("Competitor name", Some("N/A")).unwrap(), "N/A");
        assert_eq!(p.remaining(), 0);
    }

    #[test]
    fn test_exhausted_without_default_errors() {
        let mut p = ScriptedPrompter::new(Vec::<String>::new());
        assert!(p.ask_text("Business name", None).is_err());
    }

    #[test]
    fn test_choice_parses_and_bounds() {
        let options = ["a", "b", "c"];
        let mut p = ScriptedPrompter::new(["2", "9", "x"]);
        assert_eq!(p.ask_choice("Pick", &options).unwrap(), 2);
        assert!(p.ask_choice("Pick", &options).is_err());
        assert!(p.ask_choice("Pick", &options).is_err());
    }

    #[test]
    fn test_lines_stop_at_blank() {
        let mut p = ScriptedPrompter::new(["first", "second", "", "after"]);
        let lines = p.ask_lines("Findings").unwrap();
        assert_eq!(lines, vec!["first".to_string(), "second".to_string()]);
        assert_eq!(p.remaining(), 1);
    }

    #[test]
    fn test_lines_stop_at_exhaustion() {
        let mut p = ScriptedPrompter::new(["only"]);
        let lines = p.ask_lines("Findings").unwrap();
        assert_eq!(lines, vec!["only".to_string()]);
    }

    #[test]
    fn test_from_yaml_values_stringified() {
        let yaml = "- Joe's Garage\n- 5\n- \"\"\n";
        let values: Vec<serde_json::Value> = serde_saphyr::from_str(yaml).unwrap();
        let mut p = ScriptedPrompter::new(values.into_iter().map(super::stringify));
        assert_eq!(p.ask_text("name", None).unwrap(), "Joe's Garage");
        assert_eq!(p.ask_choice("score", &["1", "2", "3", "4", "5"]).unwrap(), 5);
    }
}
