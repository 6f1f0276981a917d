use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde_json::{Value, json};

use crate::document::QuestionDocument;

#[derive(Args, Debug, Clone)]
pub struct ChoicesArgs {
    /// Question definitions file (JSON or TOML)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Name of the question whose choices are printed
    #[arg(long = "question", short = 'q', value_name = "NAME")]
    pub question: String,
}

pub fn run(args: &ChoicesArgs) -> Result<Value> {
    let mut document = QuestionDocument::load(&args.file)?;
    let question = document.find_mut(&args.question)?;
    let choices = question.ensure_choices();
    Ok(json!({
        "keys": choices.keys(),
        "items": choices.items(),
    }))
}
