// SPDX-License-Identifier: Apache-2.0

// Behavior of the public API entry points on well-formed input.

use treejson::{parse, stringify, JsonValue};

#[test]
fn test_round_trip_compact_and_pretty() {
    let inputs = [
        r#""plain text""#,
        "12.5",
        "true",
        "[]",
        "{}",
        r#"[1,"two",[3,false],{"k":[]}]"#,
        r#"{"a":1,"b":{"c":["d",2.5]},"e":"f"}"#,
    ];
    for input in inputs {
        let value = parse(input).unwrap();
        assert_eq!(parse(&stringify(&value, false)).unwrap(), value, "{input}");
        assert_eq!(parse(&stringify(&value, true)).unwrap(), value, "{input}");
    }
}

#[test]
fn test_stringify_is_idempotent() {
    let value = parse(r#"{"a":[1,2],"b":"x"}"#).unwrap();
    for pretty in [false, true] {
        let once = stringify(&value, pretty);
        let twice = stringify(&parse(&once).unwrap(), pretty);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_whitespace_insensitivity() {
    let spaced = parse(" { \"a\" : 1 } ").unwrap();
    let dense = parse("{\"a\":1}").unwrap();
    assert_eq!(spaced, dense);

    assert_eq!(
        parse("\t[\n 1 ,\r\n 2 ]").unwrap(),
        parse("[1,2]").unwrap()
    );
}

#[test]
fn test_duplicate_keys_last_wins() {
    let value = parse(r#"{"a":1,"a":2}"#).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 1);
    assert_eq!(obj["a"], JsonValue::Number(2.0));
}

#[test]
fn test_escape_decoding() {
    let value = parse("\"\\n\\t\\u0041\"").unwrap();
    assert_eq!(value, JsonValue::String("\n\t\u{41}".to_string()));
}

#[test]
fn test_escaped_string_round_trips() {
    let original = JsonValue::String("quote \" backslash \\ newline \n".to_string());
    for pretty in [false, true] {
        assert_eq!(parse(&stringify(&original, pretty)).unwrap(), original);
    }
}

#[test]
fn test_pretty_print_shape() {
    let value = parse(r#"{"a":[1,2]}"#).unwrap();
    let text = stringify(&value, true);
    assert_eq!(text, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    // No trailing comma anywhere, and the output ends at the brace.
    assert!(!text.contains(",\n}"));
    assert!(!text.contains(",\n]"));
    assert!(text.ends_with('}'));
}

#[test]
fn test_deeply_nested_arrays() {
    let depth = 1000;
    let text = format!("{}0{}", "[".repeat(depth), "]".repeat(depth));

    let mut value = parse(&text).unwrap();
    for _ in 0..depth {
        let items = match value {
            JsonValue::Array(items) => items,
            other => panic!("expected array, got {}", other.type_name()),
        };
        assert_eq!(items.len(), 1);
        value = items.into_iter().next().unwrap();
    }
    assert_eq!(value, JsonValue::Number(0.0));
}

#[test]
fn test_deeply_nested_round_trip() {
    let depth = 500;
    let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let value = parse(&text).unwrap();
    assert_eq!(stringify(&value, false), text);
}

#[test]
fn test_null_and_false_survive_round_trip() {
    let value = parse(r#"[null,false]"#).unwrap();
    assert_eq!(
        value,
        JsonValue::Array(vec![JsonValue::Null, JsonValue::Bool(false)])
    );
    assert_eq!(stringify(&value, false), "[null,false]");
}

#[test]
fn test_number_formats() {
    assert_eq!(parse("0").unwrap(), JsonValue::Number(0.0));
    assert_eq!(parse("-0.5").unwrap(), JsonValue::Number(-0.5));
    assert_eq!(parse("1e3").unwrap(), JsonValue::Number(1000.0));
    assert_eq!(parse("1.5E-2").unwrap(), JsonValue::Number(0.015));
    // Leading zeros are not rejected by the relaxed grammar.
    assert_eq!(parse("007").unwrap(), JsonValue::Number(7.0));
}
