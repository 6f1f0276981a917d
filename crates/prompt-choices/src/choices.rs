use serde_json::Value;
use tracing::{debug, trace};

use crate::choice::{ChoiceInput, ChoiceItem, ChoiceKey};
use crate::collection::{ChoicesCollection, ChoicesFactory, Options};

/// Default choices collection.
///
/// Names are unique (the first occurrence wins). When the options carry
/// `radio: true`, at most one choice is checked at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Choices {
    items: Vec<ChoiceItem>,
    radio: bool,
}

impl Choices {
    pub fn new(list: Vec<ChoiceInput>, options: &Options) -> Self {
        let mut choices = Self {
            items: Vec::with_capacity(list.len()),
            radio: options
                .get("radio")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        };
        for input in list {
            choices.push(input);
        }
        trace!(
            count = choices.items.len(),
            radio = choices.radio,
            "choices normalized"
        );
        choices
    }

    pub fn is_radio(&self) -> bool {
        self.radio
    }

    /// Number of selectable choices.
    pub fn len(&self) -> usize {
        self.items.iter().filter(|item| !item.is_separator()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, input: ChoiceInput) {
        let Some(mut item) = input.normalize() else {
            trace!("skipping empty choice");
            return;
        };
        if let ChoiceItem::Choice(choice) = &mut item {
            if self.position(ChoiceKey::Name(&choice.name)).is_some() {
                debug!(name = %choice.name, "ignoring duplicate choice");
                return;
            }
            if choice.disabled {
                choice.checked = false;
            }
            if self.radio && choice.checked {
                self.uncheck_all_except(None);
            }
        }
        self.items.push(item);
    }

    /// Index into `items` of the choice matching `key`.
    fn position(&self, key: ChoiceKey<'_>) -> Option<usize> {
        let mut choices = self
            .items
            .iter()
            .enumerate()
            .filter_map(|(idx, item)| item.as_choice().map(|choice| (idx, choice)));
        match key {
            ChoiceKey::Index(index) => choices.nth(index).map(|(idx, _)| idx),
            ChoiceKey::Name(name) => choices
                .find(|(_, choice)| choice.name == name)
                .map(|(idx, _)| idx),
        }
    }

    fn uncheck_all_except(&mut self, keep: Option<usize>) {
        for (idx, item) in self.items.iter_mut().enumerate() {
            if Some(idx) == keep {
                continue;
            }
            if let Some(choice) = item.as_choice_mut() {
                choice.checked = false;
            }
        }
    }
}

impl ChoicesCollection for Choices {
    fn items(&self) -> &[ChoiceItem] {
        &self.items
    }

    fn add_choice(&mut self, choice: ChoiceInput) {
        self.push(choice);
    }

    fn toggle(&mut self, key: ChoiceKey<'_>) {
        let Some(idx) = self.position(key) else {
            debug!(?key, "toggle ignored for unknown choice");
            return;
        };
        let Some(choice) = self.items[idx].as_choice_mut() else {
            return;
        };
        if choice.disabled {
            debug!(name = %choice.name, "toggle ignored for disabled choice");
            return;
        }
        choice.checked = !choice.checked;
        if self.radio && choice.checked {
            self.uncheck_all_except(Some(idx));
        }
    }

    fn toggle_all(&mut self) {
        if self.radio {
            debug!("toggle_all ignored for radio choices");
            return;
        }
        let all_checked = self
            .items
            .iter()
            .filter_map(ChoiceItem::as_choice)
            .filter(|choice| choice.is_enabled())
            .all(|choice| choice.checked);
        for choice in self.items.iter_mut().filter_map(ChoiceItem::as_choice_mut) {
            if choice.is_enabled() {
                choice.checked = !all_checked;
            }
        }
    }
}

/// Factory producing [`Choices`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultChoicesFactory;

impl ChoicesFactory for DefaultChoicesFactory {
    fn create(&self, list: Vec<ChoiceInput>, options: &Options) -> Box<dyn ChoicesCollection> {
        Box::new(Choices::new(list, options))
    }
}
