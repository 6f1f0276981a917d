#![allow(missing_docs)]

pub mod args;
pub mod error;
mod normalize;
pub mod question;

pub use args::{ConfigArg, MessageArg, QuestionArgs, QuestionSource};
pub use error::QuestionError;
pub use question::{DEFAULT_TYPE, Question};

pub use prompt_choices::{
    Choice, ChoiceInput, ChoiceItem, ChoiceKey, Choices, ChoicesCollection, ChoicesFactory,
    DefaultChoicesFactory, Options, Separator,
};
