use std::sync::Arc;

use prompt_choices::{
    Choice, ChoiceInput, ChoiceKey, ChoicesCollection, ChoicesFactory, DefaultChoicesFactory,
    Options, Separator,
};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::args::{QuestionArgs, QuestionSource};
use crate::error::QuestionError;
use crate::normalize::{cache_from_args, cache_from_value};

/// Question type used when none is given.
pub const DEFAULT_TYPE: &str = "input";

const RESERVED_FIELDS: [&str; 6] = ["name", "message", "type", "options", "default", "choices"];

/// Normalized description of a single prompt.
///
/// The choices collection is created lazily by the injected
/// [`ChoicesFactory`] from the question's choice list and its `options`.
#[derive(Debug)]
pub struct Question {
    name: String,
    message: String,
    kind: String,
    options: Options,
    default: Option<Value>,
    extra: Map<String, Value>,
    cache: Map<String, Value>,
    choice_source: Option<Vec<ChoiceInput>>,
    choices_assigned: bool,
    choices: Option<Box<dyn ChoicesCollection>>,
    factory: Arc<dyn ChoicesFactory>,
}

impl Question {
    pub fn new(args: QuestionArgs) -> Result<Self, QuestionError> {
        Self::with_factory(args, default_factory())
    }

    pub fn with_factory(
        args: QuestionArgs,
        factory: Arc<dyn ChoicesFactory>,
    ) -> Result<Self, QuestionError> {
        let cache = cache_from_args(args)?;
        Ok(Self::from_cache(cache, factory))
    }

    /// Builds a question from a dynamic definition: a positional array
    /// `[name, message?, options?]`, an object of question fields, or a name.
    pub fn from_value(value: &Value) -> Result<Self, QuestionError> {
        Self::from_value_with_factory(value, default_factory())
    }

    pub fn from_value_with_factory(
        value: &Value,
        factory: Arc<dyn ChoicesFactory>,
    ) -> Result<Self, QuestionError> {
        let cache = cache_from_value(value)?;
        Ok(Self::from_cache(cache, factory))
    }

    /// Returns an existing question unchanged, or builds one from arguments.
    pub fn adopt(source: impl Into<QuestionSource>) -> Result<Self, QuestionError> {
        Self::adopt_with_factory(source, default_factory())
    }

    pub fn adopt_with_factory(
        source: impl Into<QuestionSource>,
        factory: Arc<dyn ChoicesFactory>,
    ) -> Result<Self, QuestionError> {
        match source.into() {
            QuestionSource::Question(question) => {
                trace!(name = %question.name, "adopting existing question");
                Ok(*question)
            }
            QuestionSource::Args(args) => Self::with_factory(args, factory),
        }
    }

    fn from_cache(cache: Map<String, Value>, factory: Arc<dyn ChoicesFactory>) -> Self {
        let name = cache
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let message = match cache.get("message") {
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => name.clone(),
        };
        let kind = cache
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_TYPE)
            .to_string();
        let options = cache
            .get("options")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        let default = cache.get("default").filter(|value| !value.is_null()).cloned();
        let choice_source = cache.get("choices").map(ChoiceInput::list_from_value);
        let extra = cache
            .iter()
            .filter(|(key, _)| !RESERVED_FIELDS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        debug!(%name, %kind, "question created");
        Self {
            name,
            message,
            kind,
            options,
            default,
            extra,
            cache,
            choice_source,
            choices_assigned: false,
            choices: None,
            factory,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = message.into();
        self
    }

    /// The question type, `"input"` unless given.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Sets the default; `null` clears it.
    pub fn set_default(&mut self, value: Value) -> &mut Self {
        self.default = Some(value).filter(|value| !value.is_null());
        self
    }

    /// True unless the default is missing or `null`. `0`, `false` and `""` count.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub fn is_radio(&self) -> bool {
        self.options.get("radio").and_then(Value::as_bool) == Some(true)
    }

    /// Additional top-level field, either supplied at construction or inserted later.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Stores an additional field. Names of built-in fields are ignored; use
    /// the dedicated setters for those.
    pub fn insert_field(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        let key = key.into();
        if RESERVED_FIELDS.contains(&key.as_str()) {
            debug!(name = %self.name, %key, "ignoring insert of built-in field");
            return self;
        }
        self.extra.insert(key, value);
        self
    }

    /// Resolves the answer for this question.
    ///
    /// When choices have been materialized and some are checked, the checked
    /// values win (a single value for radio questions). A numeric default
    /// pre-checks that index if nothing is checked yet. Otherwise a non-null
    /// `candidate` is returned, then the default, then `""`.
    pub fn get_answer(&mut self, candidate: Option<Value>) -> Value {
        let radio = self.is_radio();
        if let Some(choices) = self.choices.as_deref_mut() {
            if choices.checked().is_empty()
                && let Some(index) = self
                    .default
                    .as_ref()
                    .and_then(Value::as_u64)
                    .and_then(|index| usize::try_from(index).ok())
            {
                trace!(name = %self.name, index, "checking default choice");
                choices.toggle(ChoiceKey::Index(index));
            }

            let mut checked = choices.checked();
            if !checked.is_empty() {
                return if radio && checked.len() == 1 {
                    checked.remove(0)
                } else {
                    Value::Array(checked)
                };
            }
        }

        match candidate {
            Some(value) if !value.is_null() => value,
            _ => self
                .default
                .clone()
                .unwrap_or_else(|| Value::String(String::new())),
        }
    }

    /// The choices collection, if it has been materialized.
    pub fn choices(&self) -> Option<&dyn ChoicesCollection> {
        self.choices.as_deref()
    }

    /// Materializes the choices collection on first use and returns it.
    pub fn ensure_choices(&mut self) -> &mut dyn ChoicesCollection {
        let Self {
            name,
            options,
            choice_source,
            choices,
            factory,
            ..
        } = self;
        choices
            .get_or_insert_with(|| {
                let list = choice_source
                    .clone()
                    .or_else(|| options.get("choices").map(ChoiceInput::list_from_value))
                    .unwrap_or_default();
                debug!(%name, count = list.len(), "materializing choices");
                factory.create(list, options)
            })
            .as_mut()
    }

    /// Replaces the collection with one built from `list` and the current options.
    pub fn set_choices<I, T>(&mut self, list: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ChoiceInput>,
    {
        let list = ChoiceInput::list(list);
        debug!(name = %self.name, count = list.len(), "assigning choices");
        self.choices = Some(self.factory.create(list.clone(), &self.options));
        self.choice_source = Some(list);
        self.choices_assigned = true;
        self
    }

    pub fn add_choice(&mut self, choice: impl Into<ChoiceInput>) -> &mut Self {
        let choice = choice.into();
        self.ensure_choices().add_choice(choice.clone());
        self.record_choices(vec![choice]);
        self
    }

    pub fn add_choices<I, T>(&mut self, choices: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ChoiceInput>,
    {
        let choices = ChoiceInput::list(choices);
        self.ensure_choices().add_choices(choices.clone());
        self.record_choices(choices);
        self
    }

    /// Appends added choices to the question's own list so they survive
    /// serialization and cloning.
    fn record_choices(&mut self, added: Vec<ChoiceInput>) {
        self.choices_assigned = true;
        let Self {
            options,
            choice_source,
            ..
        } = self;
        choice_source
            .get_or_insert_with(|| {
                options
                    .get("choices")
                    .map(ChoiceInput::list_from_value)
                    .unwrap_or_default()
            })
            .extend(added);
    }

    pub fn get_choice<'a>(&mut self, key: impl Into<ChoiceKey<'a>>) -> Option<&Choice> {
        let key = key.into();
        self.ensure_choices().get(key)
    }

    pub fn toggle_choice<'a>(&mut self, key: impl Into<ChoiceKey<'a>>) -> &mut Self {
        let key = key.into();
        self.ensure_choices().toggle(key);
        self
    }

    pub fn toggle_choices(&mut self) -> &mut Self {
        self.ensure_choices().toggle_all();
        self
    }

    pub fn separator(&mut self, text: Option<&str>) -> Separator {
        self.ensure_choices().separator(text)
    }

    /// Normalized fields as a JSON object.
    pub fn to_value(&self) -> Value {
        let mut map = self.extra.clone();
        map.insert("type".into(), Value::String(self.kind.clone()));
        map.insert("name".into(), Value::String(self.name.clone()));
        map.insert("message".into(), Value::String(self.message.clone()));
        map.insert("options".into(), Value::Object(self.options.clone()));
        if let Some(default) = &self.default {
            map.insert("default".into(), default.clone());
        }
        if let Some(list) = &self.choice_source {
            map.insert(
                "choices".into(),
                Value::Array(list.iter().cloned().map(Value::from).collect()),
            );
        }
        Value::Object(map)
    }
}

/// Rebuilds from a deep copy of the normalized arguments with the current
/// options, then carries over fields inserted after construction and any
/// assigned or added choices.
/// The materialized collection is not shared; the clone builds its own.
impl Clone for Question {
    fn clone(&self) -> Self {
        let mut cache = self.cache.clone();
        cache.insert("options".into(), Value::Object(self.options.clone()));
        let mut copy = Self::from_cache(cache, Arc::clone(&self.factory));
        for (key, value) in &self.extra {
            if !copy.extra.contains_key(key) {
                copy.extra.insert(key.clone(), value.clone());
            }
        }
        if self.choices_assigned {
            copy.choice_source = self.choice_source.clone();
            copy.choices_assigned = true;
        }
        copy
    }
}

impl Serialize for Question {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

fn default_factory() -> Arc<dyn ChoicesFactory> {
    Arc::new(DefaultChoicesFactory)
}
