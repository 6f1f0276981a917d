//! Builds the normalized argument cache a [`Question`](crate::Question) is assigned from.

use prompt_choices::ChoiceInput;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::args::{ConfigArg, MessageArg, QuestionArgs};
use crate::error::QuestionError;

const POSITIONAL_KEYS: [&str; 3] = ["name", "message", "options"];

pub(crate) fn cache_from_args(args: QuestionArgs) -> Result<Map<String, Value>, QuestionError> {
    let mut cache = Map::new();
    cache.insert("name".into(), Value::String(args.name));

    match args.message {
        Some(MessageArg::Text(text)) => {
            cache.insert("message".into(), Value::String(text));
        }
        Some(MessageArg::Choices(list)) => {
            cache.insert("choices".into(), choices_value(list));
        }
        None => {}
    }

    match args.config {
        Some(ConfigArg::Map(map)) => cache.extend(map),
        Some(ConfigArg::Choices(list)) => {
            cache.insert("choices".into(), choices_value(list));
        }
        None => {}
    }

    finish(cache)
}

/// Accepts a positional array `[name, message?, options?]`, an object of
/// question fields, or a bare name.
pub(crate) fn cache_from_value(value: &Value) -> Result<Map<String, Value>, QuestionError> {
    match value {
        Value::Null => Err(no_arguments()),
        Value::Array(items) if items.is_empty() => Err(no_arguments()),
        Value::Array(items) if items.len() > POSITIONAL_KEYS.len() => {
            Err(QuestionError::InvalidArgument(format!(
                "expected at most {} positional arguments, got {}",
                POSITIONAL_KEYS.len(),
                items.len()
            )))
        }
        Value::Array(items) => finish(positional(items)),
        Value::Object(map) => finish(map.clone()),
        Value::String(_) => finish(positional(std::slice::from_ref(value))),
        other => Err(QuestionError::InvalidArgument(format!(
            "unsupported question definition: {other}"
        ))),
    }
}

fn positional(items: &[Value]) -> Map<String, Value> {
    let mut cache = Map::new();
    for (key, item) in POSITIONAL_KEYS.iter().zip(items) {
        match item {
            Value::Object(map) => cache.extend(map.clone()),
            Value::Array(list) if *key != "name" => {
                cache.insert("choices".into(), Value::Array(list.clone()));
            }
            Value::Null => {}
            other => {
                cache.insert((*key).to_string(), other.clone());
            }
        }
    }
    cache
}

fn finish(mut cache: Map<String, Value>) -> Result<Map<String, Value>, QuestionError> {
    let name = match cache.get("name") {
        Some(Value::String(name)) if !name.is_empty() => name.clone(),
        _ => {
            return Err(QuestionError::InvalidArgument(
                "expected `name` to be a non-empty string".into(),
            ));
        }
    };

    let missing_message = match cache.get("message") {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    };
    if missing_message {
        cache.insert("message".into(), Value::String(name.clone()));
    }

    if !matches!(cache.get("options"), Some(Value::Object(_))) {
        cache.insert("options".into(), Value::Object(Map::new()));
    }

    if let Some(radio) = cache.remove("radio")
        && let Some(Value::Object(options)) = cache.get_mut("options")
    {
        debug!(%name, %radio, "moving radio flag into options");
        options.insert("radio".into(), radio);
    }

    trace!(%name, keys = cache.len(), "question arguments normalized");
    Ok(cache)
}

fn choices_value(list: Vec<ChoiceInput>) -> Value {
    Value::Array(list.into_iter().map(Value::from).collect())
}

fn no_arguments() -> QuestionError {
    QuestionError::InvalidArgument("no question arguments were supplied".into())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn message_defaults_to_name() {
        let cache = cache_from_args(QuestionArgs::from_name("color")).expect("normalize");
        assert_eq!(
            Value::Object(cache),
            json!({ "name": "color", "message": "color", "options": {} })
        );
    }

    #[test]
    fn empty_message_falls_back_to_name() {
        let cache =
            cache_from_args(QuestionArgs::from_name_and_message("color", "")).expect("normalize");
        assert_eq!(cache["message"], json!("color"));
    }

    #[test]
    fn config_keys_override_earlier_arguments() {
        let config = json!({ "message": "Pick one", "default": "blue" });
        let Value::Object(config) = config else {
            unreachable!()
        };
        let cache = cache_from_args(QuestionArgs::from_full("color", "ignored", config))
            .expect("normalize");
        assert_eq!(cache["message"], json!("Pick one"));
        assert_eq!(cache["default"], json!("blue"));
    }

    #[test]
    fn radio_moves_into_options() {
        let cache = cache_from_value(&json!(["color", "Color?", { "radio": true }]))
            .expect("normalize");
        assert!(!cache.contains_key("radio"));
        assert_eq!(cache["options"], json!({ "radio": true }));
    }

    #[test]
    fn radio_merges_with_existing_options() {
        let cache = cache_from_value(&json!({
            "name": "size",
            "radio": false,
            "options": { "pageSize": 5 }
        }))
        .expect("normalize");
        assert_eq!(cache["options"], json!({ "pageSize": 5, "radio": false }));
    }

    #[test]
    fn non_boolean_radio_moves_as_is() {
        let cache = cache_from_value(&json!({ "name": "size", "radio": "yes" }))
            .expect("normalize");
        assert!(!cache.contains_key("radio"));
        assert_eq!(cache["options"], json!({ "radio": "yes" }));
    }

    #[test]
    fn positional_array_arguments_become_choices() {
        let cache = cache_from_value(&json!(["color", ["red", "blue"]])).expect("normalize");
        assert_eq!(cache["message"], json!("color"));
        assert_eq!(cache["choices"], json!(["red", "blue"]));

        let cache =
            cache_from_value(&json!(["color", "Color?", ["red", "blue"]])).expect("normalize");
        assert_eq!(cache["message"], json!("Color?"));
        assert_eq!(cache["choices"], json!(["red", "blue"]));
    }

    #[test]
    fn non_object_options_are_replaced() {
        let cache = cache_from_value(&json!({ "name": "color", "options": "nope" }))
            .expect("normalize");
        assert_eq!(cache["options"], json!({}));
    }

    #[test]
    fn rejects_missing_or_empty_names() {
        for value in [
            json!(null),
            json!([]),
            json!(""),
            json!([""]),
            json!([42]),
            json!({ "message": "no name" }),
            json!({ "name": ["a"] }),
            json!(true),
            json!(["a", "b", {}, "extra"]),
        ] {
            let err = cache_from_value(&value).expect_err("invalid arguments");
            assert!(matches!(err, QuestionError::InvalidArgument(_)), "{value}");
        }
    }
}
