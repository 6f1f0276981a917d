use std::fmt;

use serde_json::{Map, Value};

use crate::choice::{Choice, ChoiceInput, ChoiceItem, ChoiceKey};
use crate::separator::Separator;

/// Question options handed to a collection when it is created.
pub type Options = Map<String, Value>;

/// Normalized list of selectable items backing a question.
///
/// Toggling is optional: collections that do not support selection keep the
/// default no-op implementations of [`toggle`](Self::toggle) and
/// [`toggle_all`](Self::toggle_all).
pub trait ChoicesCollection: fmt::Debug + Send + Sync {
    /// Every entry in order, separators included.
    fn items(&self) -> &[ChoiceItem];

    fn add_choice(&mut self, choice: ChoiceInput);

    fn add_choices(&mut self, choices: Vec<ChoiceInput>) {
        for choice in choices {
            self.add_choice(choice);
        }
    }

    /// Names of the selectable choices in order.
    fn keys(&self) -> Vec<&str> {
        self.items()
            .iter()
            .filter_map(ChoiceItem::as_choice)
            .map(|choice| choice.name.as_str())
            .collect()
    }

    /// Looks a choice up by its position among selectable choices or by name.
    fn get(&self, key: ChoiceKey<'_>) -> Option<&Choice> {
        let mut choices = self.items().iter().filter_map(ChoiceItem::as_choice);
        match key {
            ChoiceKey::Index(index) => choices.nth(index),
            ChoiceKey::Name(name) => choices.find(|choice| choice.name == name),
        }
    }

    fn toggle(&mut self, _key: ChoiceKey<'_>) {}

    fn toggle_all(&mut self) {}

    /// Values of the checked choices in order.
    fn checked(&self) -> Vec<Value> {
        self.items()
            .iter()
            .filter_map(ChoiceItem::as_choice)
            .filter(|choice| choice.checked)
            .map(|choice| choice.value.clone())
            .collect()
    }

    fn separator(&self, text: Option<&str>) -> Separator {
        Separator::new(text)
    }
}

/// Builds collections from a raw list and the owning question's options.
pub trait ChoicesFactory: fmt::Debug + Send + Sync {
    fn create(&self, list: Vec<ChoiceInput>, options: &Options) -> Box<dyn ChoicesCollection>;
}
