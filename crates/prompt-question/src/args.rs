use prompt_choices::ChoiceInput;
use serde_json::{Map, Value};

use crate::question::Question;

/// Second construction argument: prompt text, or a choices list in its place.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageArg {
    Text(String),
    /// Used as the question's choices; the message falls back to the name.
    Choices(Vec<ChoiceInput>),
}

impl From<&str> for MessageArg {
    fn from(text: &str) -> Self {
        MessageArg::Text(text.to_string())
    }
}

impl From<String> for MessageArg {
    fn from(text: String) -> Self {
        MessageArg::Text(text)
    }
}

impl From<Vec<ChoiceInput>> for MessageArg {
    fn from(list: Vec<ChoiceInput>) -> Self {
        MessageArg::Choices(list)
    }
}

/// Third construction argument: question fields to merge, or a bare choices list.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigArg {
    /// Keys are merged into the question (`default`, `choices`, `type`, `options`, ...).
    Map(Map<String, Value>),
    /// Shorthand for `{ "choices": list }`.
    Choices(Vec<ChoiceInput>),
}

impl From<Map<String, Value>> for ConfigArg {
    fn from(map: Map<String, Value>) -> Self {
        ConfigArg::Map(map)
    }
}

impl From<Vec<ChoiceInput>> for ConfigArg {
    fn from(list: Vec<ChoiceInput>) -> Self {
        ConfigArg::Choices(list)
    }
}

/// Typed construction arguments for a [`Question`].
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionArgs {
    pub name: String,
    pub message: Option<MessageArg>,
    pub config: Option<ConfigArg>,
}

impl QuestionArgs {
    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: None,
            config: None,
        }
    }

    pub fn from_name_and_message(name: impl Into<String>, message: impl Into<MessageArg>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::from_name(name)
        }
    }

    pub fn from_full(
        name: impl Into<String>,
        message: impl Into<MessageArg>,
        config: impl Into<ConfigArg>,
    ) -> Self {
        Self {
            config: Some(config.into()),
            ..Self::from_name_and_message(name, message)
        }
    }

    pub fn with_config(mut self, config: impl Into<ConfigArg>) -> Self {
        self.config = Some(config.into());
        self
    }
}

/// Input accepted by [`Question::adopt`]: either arguments to build from or a
/// question that is passed through unchanged.
#[derive(Debug)]
pub enum QuestionSource {
    Question(Box<Question>),
    Args(QuestionArgs),
}

impl From<Question> for QuestionSource {
    fn from(question: Question) -> Self {
        QuestionSource::Question(Box::new(question))
    }
}

impl From<QuestionArgs> for QuestionSource {
    fn from(args: QuestionArgs) -> Self {
        QuestionSource::Args(args)
    }
}
