use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde_json::Value;

use crate::document::QuestionDocument;

#[derive(Args, Debug, Clone)]
pub struct NormalizeArgs {
    /// Question definitions file (JSON or TOML)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

pub fn run(args: &NormalizeArgs) -> Result<Value> {
    let document = QuestionDocument::load(&args.file)?;
    Ok(Value::Array(
        document.questions.iter().map(|question| question.to_value()).collect(),
    ))
}
