//! End-to-end rendering tests through `Engine`.

use std::sync::Arc;

use chrono::{FixedOffset, TimeZone};
use glossa::interpreter::FormatError;
use glossa::{Engine, EvalError, Record, Value, args, to_value};
use serde::Serialize;

#[test]
fn plain_text_renders_unchanged() {
    let engine = Engine::new();
    assert_eq!(engine.render("plain text", &args! {}).unwrap(), "plain text");
    assert_eq!(engine.render("", &args! {}).unwrap(), "");
}

#[test]
fn dotted_paths_resolve() {
    let engine = Engine::new();
    let a = args! { "user" => args! { "name" => "Tom" } };
    assert_eq!(engine.render("Hi {user.name}!", &a).unwrap(), "Hi Tom!");
}

#[test]
fn missing_value_fails() {
    let engine = Engine::new();
    let a = args! { "user" => args! {} };
    let err = engine.render("{user.missing}", &a).unwrap_err();
    assert!(matches!(err, EvalError::ValueNotFound { path } if path == "user.missing"));
}

#[test]
fn null_renders_empty() {
    let engine = Engine::new();
    let a = args! { "nick" => None::<String> };
    assert_eq!(engine.render("[{nick}]", &a).unwrap(), "[]");
}

#[test]
fn formatters_chain_left_to_right() {
    let engine = Engine::new();
    let a = args! { "p" => 12345.678 };
    assert_eq!(
        engine.render("{p|number:2|currency:¥}", &a).unwrap(),
        "¥12,345.68"
    );
}

#[test]
fn case_formatters() {
    let engine = Engine::new();
    let a = args! { "n" => "tom", "s" => "hello wide WORLD" };
    assert_eq!(engine.render("{n|upper}", &a).unwrap(), "TOM");
    assert_eq!(engine.render("{s|lower}", &a).unwrap(), "hello wide world");
    assert_eq!(engine.render("{s|title}", &a).unwrap(), "Hello Wide WORLD");
}

#[test]
fn case_formatters_stringify_numbers() {
    let engine = Engine::new();
    assert_eq!(engine.render("{n|upper}", &args! { "n" => 42 }).unwrap(), "42");
}

#[test]
fn date_formatter_uses_layout() {
    let engine = Engine::new();
    let birthday = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2001, 2, 3, 4, 5, 6)
        .unwrap();
    let a = args! { "d" => birthday, "s" => "2001-02-03T04:05:06Z" };
    assert_eq!(engine.render("{d|date}", &a).unwrap(), "2001-02-03");
    assert_eq!(engine.render("{s|date:%d/%m/%Y}", &a).unwrap(), "03/02/2001");
}

#[test]
fn formatter_failure_names_the_formatter() {
    let engine = Engine::new();
    let err = engine
        .render("{x|number}", &args! { "x" => "abc" })
        .unwrap_err();
    assert!(matches!(
        err,
        EvalError::Formatter { ref name, source: FormatError::Parse { .. } } if name == "number"
    ));
}

#[test]
fn unknown_formatter_suggests_close_names() {
    let engine = Engine::new();
    let err = engine.render("{x|uper}", &args! { "x" => "a" }).unwrap_err();
    let EvalError::UnknownFormatter { name, suggestions } = err else {
        panic!("expected unknown formatter");
    };
    assert_eq!(name, "uper");
    assert_eq!(suggestions, ["upper"]);
}

#[test]
fn numeric_conditional_selects_branch() {
    let engine = Engine::new();
    let template = "{count|eq:0?No items:{count} items}";
    assert_eq!(engine.render(template, &args! { "count" => 0 }).unwrap(), "No items");
    assert_eq!(engine.render(template, &args! { "count" => 5 }).unwrap(), "5 items");
}

#[test]
fn gt_and_lt_compare_floats() {
    let engine = Engine::new();
    let hot = "{t|gt:37.5?fever:normal}";
    let cold = "{t|lt:35?cold:ok}";
    assert_eq!(engine.render(hot, &args! { "t" => 38.2 }).unwrap(), "fever");
    assert_eq!(engine.render(hot, &args! { "t" => 37.5 }).unwrap(), "normal");
    assert_eq!(engine.render(cold, &args! { "t" => 34 }).unwrap(), "cold");
    assert_eq!(engine.render(cold, &args! { "t" => 36.6 }).unwrap(), "ok");
}

#[test]
fn string_conditional_supports_eq_only() {
    let engine = Engine::new();
    let a = args! { "role" => "admin" };
    assert_eq!(
        engine.render("{role|eq:admin?Admin:User}", &a).unwrap(),
        "Admin"
    );
    let err = engine.render("{role|gt:a?x:y}", &a).unwrap_err();
    assert!(matches!(
        err,
        EvalError::UnsupportedOperation { ref op, type_name: "string" } if op == "gt"
    ));
}

#[test]
fn conditional_sees_formatted_value() {
    let engine = Engine::new();
    let a = args! { "role" => "ADMIN" };
    assert_eq!(
        engine.render("{role|lower|eq:admin?yes:no}", &a).unwrap(),
        "yes"
    );
}

#[test]
fn conditional_rejects_other_types_and_bad_test_values() {
    let engine = Engine::new();
    let err = engine
        .render("{ok|eq:true?y:n}", &args! { "ok" => true })
        .unwrap_err();
    assert!(matches!(err, EvalError::UnsupportedType { type_name: "bool" }));

    let err = engine
        .render("{n|eq:zero?y:n}", &args! { "n" => 0 })
        .unwrap_err();
    assert!(matches!(err, EvalError::InvalidTestValue { value } if value == "zero"));

    let err = engine
        .render("{n|ge:0?y:n}", &args! { "n" => 0 })
        .unwrap_err();
    assert!(matches!(err, EvalError::UnsupportedOperation { .. }));
}

#[test]
fn unselected_branch_is_never_evaluated() {
    let engine = Engine::new();
    let a = args! { "n" => 1 };
    assert_eq!(
        engine.render("{n|eq:1?one:{missing}}", &a).unwrap(),
        "one"
    );
    assert!(engine.render("{n|eq:2?one:{missing}}", &a).is_err());
}

#[test]
fn pipe_inside_branch_breaks_the_placeholder() {
    let engine = Engine::new();
    let err = engine
        .render("{count|eq:0?none:{count|upper}}", &args! { "count" => 0 })
        .unwrap_err();
    assert!(matches!(err, EvalError::UnknownFormatter { ref name, .. } if name == "upper}"));
}

#[test]
fn unclosed_brace_renders_literally() {
    let engine = Engine::new();
    assert_eq!(engine.render("{unclosed", &args! {}).unwrap(), "{unclosed");
    assert_eq!(engine.render("{} and {|x}", &args! {}).unwrap(), "{} and {|x}");
}

#[test]
fn branch_renders_are_bounded_by_max_depth() {
    let template = "{a|eq:1?{b}:no}";
    let a = args! { "a" => 1, "b" => "yes" };

    let none_allowed = Engine::builder().max_depth(0).build();
    let err = none_allowed.render(template, &a).unwrap_err();
    assert!(matches!(err, EvalError::MaxDepthExceeded { max_depth: 0 }));
    assert_eq!(none_allowed.render("{b}", &a).unwrap(), "yes");

    let one_allowed = Engine::builder().max_depth(1).build();
    assert_eq!(one_allowed.render(template, &a).unwrap(), "yes");

    assert_eq!(Engine::new().max_depth(), 64);
}

#[test]
fn nested_conditional_is_split_into_malformed_segments() {
    let engine = Engine::new();
    let template = "{a|eq:1?{a|eq:1?deep:no}:no}";
    assert_eq!(engine.render(template, &args! { "a" => 1 }).unwrap(), template);
}

#[test]
fn parsed_templates_are_cached() {
    let engine = Engine::new();
    let template = "{n|eq:0?zero:{n} items}";

    engine.render(template, &args! { "n" => 5 }).unwrap();
    engine.render(template, &args! { "n" => 6 }).unwrap();
    assert_eq!(engine.template_cache_len(), 2);

    engine.render(template, &args! { "n" => 0 }).unwrap();
    assert_eq!(engine.template_cache_len(), 3);
}

#[test]
fn parse_returns_shared_tree() {
    let engine = Engine::new();
    let first = engine.parse("{a}");
    let second = engine.parse("{a}");
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn custom_formatters_are_per_engine() {
    let engine = Engine::new();
    engine.register_formatter("shout", |value, arg| {
        let mark = if arg.is_empty() { "!" } else { arg };
        Ok(Value::String(format!("{value}{mark}")))
    });
    let a = args! { "w" => "hey" };
    assert_eq!(engine.render("{w|shout}", &a).unwrap(), "hey!");
    assert_eq!(engine.render("{w|shout:~|upper}", &a).unwrap(), "HEY~");
    assert!(Engine::new().render("{w|shout}", &a).is_err());
}

#[test]
fn custom_formatter_errors_propagate() {
    let engine = Engine::new();
    engine.register_formatter("fail", |_, _| Err(FormatError::Custom("nope".into())));
    let err = engine.render("{w|fail}", &args! { "w" => 1 }).unwrap_err();
    assert_eq!(err.to_string(), "formatter 'fail' failed: nope");
}

#[test]
fn builtins_can_be_replaced() {
    let engine = Engine::new();
    engine.register_formatter("upper", |value, _| Ok(Value::String(format!("<{value}>"))));
    assert_eq!(engine.render("{x|upper}", &args! { "x" => "a" }).unwrap(), "<a>");
}

#[derive(Serialize)]
struct Order {
    #[serde(rename = "Customer")]
    customer: String,
    total: f64,
}

#[test]
fn records_resolve_case_insensitively() {
    let engine = Engine::new();
    let order = to_value(&Order {
        customer: "Ann".into(),
        total: 1234.5,
    })
    .unwrap();
    let a = args! { "order" => order.clone() };
    assert_eq!(
        engine
            .render("{order.customer}: {order.TOTAL|currency}", &a)
            .unwrap(),
        "Ann: $1,234.50"
    );
    assert_eq!(
        engine.render_value("{customer}", &order).unwrap(),
        "Ann"
    );
}

#[test]
fn render_value_with_hand_built_record() {
    let engine = Engine::new();
    let root = Value::from(Record::new("Ctx").with_field("Count", 2));
    assert_eq!(
        engine.render_value("{count|gt:1?many:one}", &root).unwrap(),
        "many"
    );
}

#[test]
fn branches_use_the_original_arguments() {
    let engine = Engine::new();
    let a = args! { "a" => 1, "b" => "bee" };
    assert_eq!(engine.render("{a|eq:1?{b}:x}", &a).unwrap(), "bee");
}
