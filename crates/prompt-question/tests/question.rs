use serde_json::{Map, Value, json};

use prompt_question::{
    ChoiceInput, ChoiceKey, ConfigArg, Question, QuestionArgs, QuestionError, QuestionSource,
};

fn config(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object config, got {other}"),
    }
}

#[test]
fn question_from_name() {
    let question = Question::new(QuestionArgs::from_name("color")).expect("question");
    assert_eq!(
        question.to_value(),
        json!({ "type": "input", "name": "color", "message": "color", "options": {} })
    );
    assert_eq!(question.kind(), "input");
    assert_eq!(question.message(), "color");
}

#[test]
fn question_from_name_and_message() {
    let question = Question::new(QuestionArgs::from_name_and_message(
        "color",
        "Favorite color?",
    ))
    .expect("question");
    assert_eq!(
        question.to_value(),
        json!({
            "type": "input",
            "name": "color",
            "message": "Favorite color?",
            "options": {}
        })
    );
}

#[test]
fn question_from_name_message_and_options() {
    let question = Question::new(QuestionArgs::from_full(
        "color",
        "Favorite color?",
        config(json!({ "default": "blue" })),
    ))
    .expect("question");
    assert_eq!(
        question.to_value(),
        json!({
            "type": "input",
            "name": "color",
            "message": "Favorite color?",
            "default": "blue",
            "options": {}
        })
    );
}

#[test]
fn config_can_set_type_and_extra_fields() {
    let question = Question::new(QuestionArgs::from_full(
        "toppings",
        "Pick toppings",
        config(json!({ "type": "checkbox", "when": "hungry", "options": { "pageSize": 4 } })),
    ))
    .expect("question");
    assert_eq!(question.kind(), "checkbox");
    assert_eq!(question.field("when"), Some(&json!("hungry")));
    assert_eq!(question.options().get("pageSize"), Some(&json!(4)));
}

#[test]
fn empty_name_is_rejected() {
    let err = Question::new(QuestionArgs::from_name("")).expect_err("empty name");
    assert!(matches!(err, QuestionError::InvalidArgument(_)));
    assert!(err.to_string().starts_with("invalid argument"));
}

#[test]
fn config_cannot_blank_out_the_name() {
    let err = Question::new(QuestionArgs::from_name("color").with_config(config(json!({
        "name": null
    }))))
    .expect_err("name cleared by config");
    assert!(matches!(err, QuestionError::InvalidArgument(_)));
}

#[test]
fn zero_arguments_are_rejected() {
    for value in [json!(null), json!([])] {
        let err = Question::from_value(&value).expect_err("no arguments");
        assert_eq!(
            err,
            QuestionError::InvalidArgument("no question arguments were supplied".into())
        );
    }
}

#[test]
fn dynamic_definitions_accept_every_shape() {
    let positional =
        Question::from_value(&json!(["color", "Favorite color?", { "default": "blue" }]))
            .expect("positional");
    let object = Question::from_value(&json!({
        "name": "color",
        "message": "Favorite color?",
        "default": "blue"
    }))
    .expect("object");
    assert_eq!(positional.to_value(), object.to_value());

    let bare = Question::from_value(&json!("color")).expect("bare name");
    assert_eq!(bare.message(), "color");
}

#[test]
fn message_list_becomes_choices() {
    let mut question = Question::new(QuestionArgs::from_name_and_message(
        "color",
        ChoiceInput::list(["red", "blue"]),
    ))
    .expect("question");
    assert_eq!(question.message(), "color");
    assert_eq!(question.ensure_choices().keys(), vec!["red", "blue"]);
}

#[test]
fn options_list_is_wrapped_as_choices() {
    let mut question = Question::new(QuestionArgs::from_full(
        "color",
        "Favorite color?",
        ConfigArg::Choices(ChoiceInput::list(["red", "blue"])),
    ))
    .expect("question");
    assert_eq!(question.message(), "Favorite color?");
    assert_eq!(question.ensure_choices().keys(), vec!["red", "blue"]);
}

#[test]
fn radio_flag_is_hoisted_into_options() {
    let question = Question::new(QuestionArgs::from_full(
        "size",
        "Size?",
        config(json!({ "radio": true })),
    ))
    .expect("question");
    assert!(question.is_radio());
    assert_eq!(question.options(), &config(json!({ "radio": true })));
    assert!(question.field("radio").is_none());
    assert!(question.to_value().get("radio").is_none());
}

#[test]
fn adopting_a_question_returns_it_unchanged() {
    let mut question = Question::new(QuestionArgs::from_full(
        "color",
        "Favorite color?",
        config(json!({ "choices": ["red", "blue"] })),
    ))
    .expect("question");
    question.insert_field("asked", json!(true));
    question.toggle_choice(ChoiceKey::Name("blue"));

    let adopted = Question::adopt(question).expect("adopt");
    assert_eq!(adopted.field("asked"), Some(&json!(true)));
    let choices = adopted.choices().expect("choices stay materialized");
    assert_eq!(choices.checked(), vec![json!("blue")]);
}

#[test]
fn adopting_arguments_builds_a_question() {
    let source = QuestionSource::from(QuestionArgs::from_name("color"));
    let question = Question::adopt(source).expect("adopt args");
    assert_eq!(question.name(), "color");
    assert!(question.choices().is_none());
}

#[test]
fn built_in_fields_are_not_inserted_as_extras() {
    let mut question = Question::new(QuestionArgs::from_name("color")).expect("question");
    question.insert_field("message", json!("other"));
    assert_eq!(question.message(), "color");
    assert!(question.extra().is_empty());
}

#[test]
fn question_serializes_through_normalized_form() {
    let question = Question::new(QuestionArgs::from_full(
        "color",
        "Favorite color?",
        config(json!({ "choices": ["red"], "default": "red" })),
    ))
    .expect("question");
    let value = serde_json::to_value(&question).expect("serialize question");
    assert_eq!(value, question.to_value());
    assert_eq!(value["choices"], json!(["red"]));
}

#[test]
fn non_boolean_radio_is_hoisted_unchanged() {
    let question = Question::from_value(&json!({ "name": "s", "radio": "yes" })).expect("question");
    assert_eq!(question.options(), &config(json!({ "radio": "yes" })));
    assert!(question.field("radio").is_none());
    assert!(!question.is_radio());
}
