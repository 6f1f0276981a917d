#![allow(missing_docs)]

pub mod choice;
pub mod choices;
pub mod collection;
pub mod separator;

pub use choice::{Choice, ChoiceInput, ChoiceItem, ChoiceKey};
pub use choices::{Choices, DefaultChoicesFactory};
pub use collection::{ChoicesCollection, ChoicesFactory, Options};
pub use separator::{DEFAULT_LINE, Separator};
