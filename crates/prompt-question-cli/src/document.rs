use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use prompt_question::Question;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// On-disk shapes: a bare list of definitions or `{ "questions": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDocument {
    List(Vec<Value>),
    Wrapped { questions: Vec<Value> },
}

/// Questions loaded from a definitions file, in file order.
#[derive(Debug)]
pub struct QuestionDocument {
    pub questions: Vec<Question>,
}

impl QuestionDocument {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let document: RawDocument = if is_toml {
            toml::from_str(&raw).with_context(|| format!("invalid TOML in {}", path.display()))?
        } else {
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid JSON in {}", path.display()))?
        };
        Self::from_definitions(match document {
            RawDocument::List(items) => items,
            RawDocument::Wrapped { questions } => questions,
        })
    }

    pub fn from_definitions(definitions: Vec<Value>) -> Result<Self> {
        let questions = definitions
            .iter()
            .enumerate()
            .map(|(idx, definition)| {
                Question::from_value(definition)
                    .with_context(|| format!("question #{} is invalid", idx + 1))
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(count = questions.len(), "question definitions loaded");
        Ok(Self { questions })
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Question> {
        self.questions
            .iter_mut()
            .find(|question| question.name() == name)
            .ok_or_else(|| anyhow!("no question named '{name}'"))
    }
}
