use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde_json::Value;

use crate::cmd::{self, answer::AnswerArgs, choices::ChoicesArgs, normalize::NormalizeArgs};
use crate::logging;

#[derive(Parser, Debug)]
#[command(
    name = "prompt-question",
    about = "Inspect prompt question definitions",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every question in normalized form
    Normalize(NormalizeArgs),
    /// Print the normalized choices of one question
    Choices(ChoicesArgs),
    /// Resolve the answer of one question
    Answer(AnswerArgs),
}

pub fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let output = run(cli.command)?;
    emit(&output)
}

fn run(command: Commands) -> Result<Value> {
    match command {
        Commands::Normalize(args) => cmd::normalize::run(&args),
        Commands::Choices(args) => cmd::choices::run(&args),
        Commands::Answer(args) => cmd::answer::run(&args),
    }
}

fn emit(output: &Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(output).context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_answer_command() {
        let cli = Cli::try_parse_from([
            "prompt-question",
            "-vv",
            "answer",
            "questions.json",
            "--question",
            "color",
            "--value",
            "0",
            "--check",
            "red",
            "--check",
            "2",
        ])
        .expect("expected CLI to parse");
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Answer(args) => {
                assert_eq!(args.file.to_str(), Some("questions.json"));
                assert_eq!(args.question, "color");
                assert_eq!(args.value.as_deref(), Some("0"));
                assert_eq!(args.check, vec!["red".to_string(), "2".to_string()]);
            }
            _ => panic!("expected answer args"),
        }
    }

    #[test]
    fn choices_requires_a_question_name() {
        let err = Cli::try_parse_from(["prompt-question", "choices", "questions.json"])
            .expect_err("missing --question");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn verbose_flag_is_global() {
        let cli = Cli::try_parse_from(["prompt-question", "normalize", "q.toml", "-v"])
            .expect("expected CLI to parse");
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Commands::Normalize(_)));
    }
}
