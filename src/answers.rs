use crate::error::{AqError, Result};
use crate::types::answers::AnswerSet;
use crate::types::question::QuestionBank;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct AnswersFile {
    answers: BTreeMap<String, String>,
}

// Unlike the interactive session, file input is not constrained by
// construction, so question keys and option keys are validated here.
pub fn load_answers(path: &Path, bank: &QuestionBank) -> Result<AnswerSet> {
    if !path.exists() {
        return Err(AqError::AnswersNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let file: AnswersFile = toml::from_str(&content)
        .map_err(|e| AqError::AnswersParse(format!("{}: {}", path.display(), e)))?;

    let mut set = AnswerSet::new();
    for (question_key, option_key) in &file.answers {
        let number = question_key
            .strip_prefix('q')
            .and_then(|raw| raw.parse::<usize>().ok())
            .ok_or_else(|| {
                AqError::AnswersParse(format!(
                    "unrecognized question key: {question_key} (expected q1..q{})",
                    bank.len()
                ))
            })?;
        if number == 0 || number > bank.len() {
            return Err(AqError::AnswersParse(format!(
                "question key {question_key} is out of range (bank has {} questions)",
                bank.len()
            )));
        }
        let index = number - 1;

        let mut chars = option_key.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(key), None) => key.to_ascii_lowercase(),
            _ => {
                return Err(AqError::AnswersParse(format!(
                    "option for {question_key} must be a single key, got: {option_key}"
                )));
            }
        };
        let question = bank.get(index).ok_or_else(|| {
            AqError::AnswersParse(format!("question key {question_key} is out of range"))
        })?;
        if !question.has_key(key) {
            return Err(AqError::AnswersParse(format!(
                "unknown option '{option_key}' for {question_key}"
            )));
        }
        set.select(index, key);
    }

    tracing::debug!(answered = set.len(), "answers file loaded");
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank;
    use std::fs;
    use tempfile::TempDir;

    fn write_answers(dir: &TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("answers.toml");
        fs::write(&path, body).expect("answers should write");
        path
    }

    #[test]
    fn load_answers_fails_when_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_answers(&dir.path().join("answers.toml"), &bank::builtin())
            .expect_err("load should fail");
        assert!(matches!(err, AqError::AnswersNotFound(_)));
    }

    #[test]
    fn load_answers_parses_partial_set() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = write_answers(
            &dir,
            r#"
[answers]
q1 = "c"
q12 = "a"
"#,
        );

        let set = load_answers(&path, &bank::builtin()).expect("load should succeed");
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0), Some('c'));
        assert_eq!(set.get(11), Some('a'));
    }

    #[test]
    fn load_answers_rejects_unknown_question_key() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = write_answers(&dir, "[answers]\nx1 = \"a\"\n");

        let err = load_answers(&path, &bank::builtin()).expect_err("load should fail");
        assert!(err.to_string().contains("unrecognized question key"));
    }

    #[test]
    fn load_answers_rejects_out_of_range_question() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = write_answers(&dir, "[answers]\nq13 = \"a\"\n");

        let err = load_answers(&path, &bank::builtin()).expect_err("load should fail");
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn load_answers_rejects_unknown_option_key() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = write_answers(&dir, "[answers]\nq1 = \"e\"\n");

        let err = load_answers(&path, &bank::builtin()).expect_err("load should fail");
        assert!(err.to_string().contains("unknown option 'e' for q1"));
    }

    #[test]
    fn load_answers_accepts_uppercase_option_keys() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = write_answers(&dir, "[answers]\nq1 = \"C\"\n");

        let set = load_answers(&path, &bank::builtin()).expect("load should succeed");
        assert_eq!(set.get(0), Some('c'));
    }
}
