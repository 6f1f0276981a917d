use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use prompt_question::ChoiceKey;
use serde_json::Value;
use tracing::debug;

use crate::document::QuestionDocument;

#[derive(Args, Debug, Clone)]
pub struct AnswerArgs {
    /// Question definitions file (JSON or TOML)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Name of the question to answer
    #[arg(long = "question", short = 'q', value_name = "NAME")]
    pub question: String,
    /// Candidate answer; parsed as JSON, otherwise taken as a plain string
    #[arg(long = "value", value_name = "VALUE")]
    pub value: Option<String>,
    /// Choice to toggle before resolving, by name or position (repeatable)
    #[arg(long = "check", value_name = "KEY")]
    pub check: Vec<String>,
}

pub fn run(args: &AnswerArgs) -> Result<Value> {
    let mut document = QuestionDocument::load(&args.file)?;
    let question = document.find_mut(&args.question)?;
    for key in &args.check {
        question.toggle_choice(parse_key(key));
    }
    let candidate = args.value.as_deref().map(parse_value);
    debug!(question = %args.question, ?candidate, "resolving answer");
    Ok(question.get_answer(candidate))
}

fn parse_key(raw: &str) -> ChoiceKey<'_> {
    raw.parse::<usize>()
        .map(ChoiceKey::Index)
        .unwrap_or(ChoiceKey::Name(raw))
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
