use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::separator::Separator;

/// A normalized selectable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub name: String,
    pub value: Value,
    pub short: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl Choice {
    /// Creates an unchecked, enabled choice whose value and short form equal `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: Value::String(name.clone()),
            short: name.clone(),
            name,
            checked: false,
            disabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }
}

/// Entry of a normalized choices list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChoiceItem {
    Choice(Choice),
    Separator(Separator),
}

impl ChoiceItem {
    pub fn as_choice(&self) -> Option<&Choice> {
        match self {
            ChoiceItem::Choice(choice) => Some(choice),
            ChoiceItem::Separator(_) => None,
        }
    }

    pub fn as_choice_mut(&mut self) -> Option<&mut Choice> {
        match self {
            ChoiceItem::Choice(choice) => Some(choice),
            ChoiceItem::Separator(_) => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, ChoiceItem::Separator(_))
    }
}

/// Raw choice definition as supplied by callers, before normalization.
///
/// Any JSON value converts into an input: strings become names, objects become
/// records (or separators when they carry `"type": "separator"` or only a
/// `line`), and other scalars keep their original value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ChoiceInput {
    Name(String),
    Scalar(Value),
    Record(Map<String, Value>),
    Separator(Separator),
}

impl ChoiceInput {
    /// Converts every element of a JSON array; non-array values yield an empty list.
    pub fn list_from_value(value: &Value) -> Vec<ChoiceInput> {
        value
            .as_array()
            .map(|items| items.iter().cloned().map(ChoiceInput::from).collect())
            .unwrap_or_default()
    }

    pub fn list<I, T>(items: I) -> Vec<ChoiceInput>
    where
        I: IntoIterator<Item = T>,
        T: Into<ChoiceInput>,
    {
        items.into_iter().map(Into::into).collect()
    }

    /// Normalizes the input into a list entry. `null` and nameless records yield `None`.
    pub fn normalize(self) -> Option<ChoiceItem> {
        match self {
            ChoiceInput::Name(name) => Some(ChoiceItem::Choice(Choice::new(name))),
            ChoiceInput::Scalar(Value::Null) => None,
            ChoiceInput::Scalar(value) => {
                let name = scalar_name(&value)?;
                Some(ChoiceItem::Choice(Choice {
                    short: name.clone(),
                    name,
                    value,
                    checked: false,
                    disabled: false,
                }))
            }
            ChoiceInput::Record(record) => normalize_record(record).map(ChoiceItem::Choice),
            ChoiceInput::Separator(separator) => Some(ChoiceItem::Separator(separator)),
        }
    }
}

fn normalize_record(record: Map<String, Value>) -> Option<Choice> {
    let value = record.get("value").filter(|value| !value.is_null()).cloned();
    let name = record
        .get("name")
        .and_then(scalar_name)
        .or_else(|| value.as_ref().and_then(scalar_name))?;
    let short = record
        .get("short")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| name.clone());
    let disabled = match record.get("disabled") {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(reason)) => !reason.is_empty(),
        _ => false,
    };

    Some(Choice {
        value: value.unwrap_or_else(|| Value::String(name.clone())),
        short,
        checked: record
            .get("checked")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        disabled,
        name,
    })
}

fn scalar_name(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

impl From<Value> for ChoiceInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => ChoiceInput::Name(name),
            Value::Object(map) => {
                let tagged = map.get("type").and_then(Value::as_str) == Some("separator");
                let bare_line = map.contains_key("line") && !map.contains_key("name");
                if tagged || bare_line {
                    ChoiceInput::Separator(Separator::new(
                        map.get("line").and_then(Value::as_str),
                    ))
                } else {
                    ChoiceInput::Record(map)
                }
            }
            other => ChoiceInput::Scalar(other),
        }
    }
}

impl From<ChoiceInput> for Value {
    fn from(input: ChoiceInput) -> Self {
        match input {
            ChoiceInput::Name(name) => Value::String(name),
            ChoiceInput::Scalar(value) => value,
            ChoiceInput::Record(map) => Value::Object(map),
            ChoiceInput::Separator(separator) => {
                json!({ "type": "separator", "line": separator.line })
            }
        }
    }
}

impl From<&str> for ChoiceInput {
    fn from(name: &str) -> Self {
        ChoiceInput::Name(name.to_string())
    }
}

impl From<String> for ChoiceInput {
    fn from(name: String) -> Self {
        ChoiceInput::Name(name)
    }
}

impl From<Separator> for ChoiceInput {
    fn from(separator: Separator) -> Self {
        ChoiceInput::Separator(separator)
    }
}

impl From<Choice> for ChoiceInput {
    fn from(choice: Choice) -> Self {
        let mut record = Map::new();
        record.insert("name".into(), Value::String(choice.name));
        record.insert("value".into(), choice.value);
        record.insert("short".into(), Value::String(choice.short));
        record.insert("checked".into(), Value::Bool(choice.checked));
        record.insert("disabled".into(), Value::Bool(choice.disabled));
        ChoiceInput::Record(record)
    }
}

/// Lookup key for a choice: a position among selectable choices or a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKey<'a> {
    Index(usize),
    Name(&'a str),
}

impl From<usize> for ChoiceKey<'_> {
    fn from(index: usize) -> Self {
        ChoiceKey::Index(index)
    }
}

impl<'a> From<&'a str> for ChoiceKey<'a> {
    fn from(name: &'a str) -> Self {
        ChoiceKey::Name(name)
    }
}

impl<'a> From<&'a String> for ChoiceKey<'a> {
    fn from(name: &'a String) -> Self {
        ChoiceKey::Name(name.as_str())
    }
}
