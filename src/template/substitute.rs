// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use crate::config::consts::MAX_SUBSTITUTION_PASSES;
use crate::observability::messages::{pipeline::SubstitutionPassLimitReached, StructuredLog};
use crate::template::keypath;
use crate::template::scanner::{self, Segment};

/// Resolve every `{path}` placeholder in `value` against `context`.
///
/// Maps (keys and values), sequences and strings are traversed; other leaves
/// are returned unchanged. A string that is exactly one placeholder resolves
/// to the referenced value with its native type; placeholders embedded in
/// surrounding text are rendered as text. Placeholders that cannot be
/// resolved stay in the output verbatim.
pub fn substitute(value: &Value, context: &Value) -> Value {
    match value {
        Value::String(text) => substitute_text(text, context),
        Value::Array(items) => Value::Array(items.iter().map(|item| substitute(item, context)).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (stringify(&substitute_text(key, context)), substitute(item, context)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Render a value as placeholder text: strings verbatim, everything else as
/// compact JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn substitute_text(text: &str, context: &Value) -> Value {
    let mut current = text.to_string();
    // Native values are only returned while the text is one whole placeholder.
    let mut whole = true;

    for _ in 0..MAX_SUBSTITUTION_PASSES {
        let segments = scanner::parse(&current);
        let next = match segments.as_slice() {
            [Segment::Placeholder(path)] if whole => match lookup(path, context) {
                Ok(Value::String(resolved)) => resolved.clone(),
                Ok(native) => return native.clone(),
                Err(literal) => literal,
            },
            _ => {
                whole = false;
                render(&segments, context)
            }
        };

        if next == current {
            return Value::String(current);
        }
        current = next;
    }

    SubstitutionPassLimitReached {
        text,
        passes: MAX_SUBSTITUTION_PASSES,
    }
    .log();
    Value::String(current)
}

/// Resolve a placeholder's path (inner placeholders first) and look it up.
///
/// On failure returns the placeholder text with its inner placeholders
/// already resolved.
fn lookup<'a>(path: &[Segment], context: &'a Value) -> Result<&'a Value, String> {
    let key = render(path, context);
    keypath::get(context, &key).map_err(|_| format!("{{{}}}", key))
}

fn render(segments: &[Segment], context: &Value) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Literal(text) => text.clone(),
            Segment::Placeholder(path) => match lookup(path, context) {
                Ok(value) => stringify(value),
                Err(literal) => literal,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_whole_placeholder_preserves_native_type() {
        let context = json!({"x": {"y": 5}, "flag": true, "list": [1, "a"], "map": {"k": 1}, "nil": null});

        assert_eq!(substitute(&json!("{x.y}"), &context), json!(5));
        assert_eq!(substitute(&json!("{flag}"), &context), json!(true));
        assert_eq!(substitute(&json!("{list}"), &context), json!([1, "a"]));
        assert_eq!(substitute(&json!("{map}"), &context), json!({"k": 1}));
        assert_eq!(substitute(&json!("{nil}"), &context), Value::Null);
    }

    #[test]
    fn test_embedded_placeholder_is_stringified() {
        let context = json!({"x": {"y": 5}, "map": {"k": 1}, "name": "world"});

        assert_eq!(substitute(&json!("val={x.y}"), &context), json!("val=5"));
        assert_eq!(substitute(&json!("hello {name}!"), &context), json!("hello world!"));
        assert_eq!(substitute(&json!("m={map}"), &context), json!(r#"m={"k":1}"#));
        assert_eq!(substitute(&json!("{x.y}{x.y}"), &context), json!("55"));
    }

    #[test]
    fn test_missing_placeholder_is_left_literal() {
        assert_eq!(substitute(&json!("{missing}"), &json!({})), json!("{missing}"));
        assert_eq!(
            substitute(&json!("a {missing} b {x}"), &json!({"x": 1})),
            json!("a {missing} b 1")
        );
    }

    #[test]
    fn test_empty_placeholder_is_the_root() {
        let context = json!({"a": 1});
        assert_eq!(substitute(&json!("{}"), &context), context);
        assert_eq!(substitute(&json!("root={}"), &context), json!(r#"root={"a":1}"#));
    }

    #[test]
    fn test_nested_placeholders_resolve_inner_first() {
        let context = json!({"which": "b", "values": {"a": 1, "b": 2}});
        assert_eq!(substitute(&json!("{values.{which}}"), &context), json!(2));
        assert_eq!(substitute(&json!("got {values.{which}}"), &context), json!("got 2"));
    }

    #[test]
    fn test_nested_placeholder_with_missing_outer_keeps_inner_resolution() {
        let context = json!({"which": "z", "values": {"a": 1}});
        assert_eq!(substitute(&json!("{values.{which}}"), &context), json!("{values.z}"));
        assert_eq!(substitute(&json!("at {values.{which}}!"), &context), json!("at {values.z}!"));
        assert_eq!(substitute(&json!("{values.{nope}}"), &context), json!("{values.{nope}}"));
    }

    #[test]
    fn test_resolved_text_is_resolved_again() {
        let context = json!({"a": "{b}", "b": "{c}", "c": 7, "greeting": "hi {name}", "name": "bob"});
        assert_eq!(substitute(&json!("{a}"), &context), json!(7));
        assert_eq!(substitute(&json!("say: {greeting}"), &context), json!("say: hi bob"));
    }

    #[test]
    fn test_sequence_index_paths() {
        let context = json!({"items": [{"name": "first"}, {"name": "second"}]});
        assert_eq!(substitute(&json!("{items.1.name}"), &context), json!("second"));
    }

    #[test]
    fn test_containers_are_traversed_keys_included() {
        let context = json!({"key": "k", "v": 3});
        let template = json!({"{key}": ["{v}", "n={v}", 4, null], "plain": false});

        assert_eq!(
            substitute(&template, &context),
            json!({"k": [3, "n=3", 4, null], "plain": false})
        );
    }

    #[test]
    fn test_non_string_key_resolution_is_stringified() {
        let context = json!({"n": 3});
        assert_eq!(substitute(&json!({"{n}": 1}), &context), json!({"3": 1}));
    }

    #[test]
    fn test_self_reference_terminates() {
        let context = json!({"loop": "x{loop}"});
        let resolved = substitute(&json!("{loop}"), &context);
        assert!(resolved.as_str().unwrap().starts_with("xx"));
    }

    #[test]
    fn test_substitution_is_idempotent() {
        let context = json!({"a": {"b": "c"}, "n": 1, "s": "{a.b}"});
        for template in [
            json!("{a.b}"),
            json!("x{n}y{missing}"),
            json!("{s}"),
            json!({"{a.b}": ["{n}", "n={n}"]}),
            json!("{a.{missing}}"),
        ] {
            let once = substitute(&template, &context);
            let twice = substitute(&once, &context);
            assert_eq!(once, twice, "template {}", template);
        }
    }

    proptest! {
        #[test]
        fn test_text_without_braces_is_unchanged(text in "[^{}]*") {
            let context = json!({"a": 1});
            prop_assert_eq!(substitute(&json!(text.clone()), &context), json!(text));
        }
    }
}
