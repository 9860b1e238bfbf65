// SPDX-License-Identifier: Apache-2.0

//! Serialization of a value tree back to JSON text.
//!
//! Compact output has no interior whitespace. Pretty output puts each
//! element or pair on its own line, indented two spaces per nesting
//! level, with `": "` between object keys and values and the closing
//! bracket dedented one level below its children.

use crate::value::JsonValue;

const INDENT: &str = "  ";

/// Render `value` as JSON text.
///
/// # Examples
///
/// ```
/// use treejson::{parse, stringify};
///
/// let value = parse(r#"{ "a" : [ 1, 2 ] }"#).unwrap();
/// assert_eq!(stringify(&value, false), r#"{"a":[1,2]}"#);
/// assert_eq!(stringify(&value, true), "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
/// ```
pub fn stringify(value: &JsonValue, pretty: bool) -> String {
    let mut out = String::new();
    write_value(value, pretty, 0, &mut out);
    out
}

fn write_value(value: &JsonValue, pretty: bool, depth: usize, out: &mut String) {
    match value {
        JsonValue::Null => out.push_str("null"),
        JsonValue::Bool(true) => out.push_str("true"),
        JsonValue::Bool(false) => out.push_str("false"),
        JsonValue::Number(n) => {
            // f64 Display is the shortest representation that round-trips.
            out.push_str(&n.to_string());
        }
        JsonValue::String(s) => write_string(s, out),
        JsonValue::Array(items) => write_array(items, pretty, depth, out),
        JsonValue::Object(_) => write_object(value, pretty, depth, out),
    }
}

/// Write a string literal, escaping quotes, backslashes and controls so
/// that parsing the output restores the original string.
fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\x20' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn write_array(items: &[JsonValue], pretty: bool, depth: usize, out: &mut String) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }

    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if pretty {
            out.push('\n');
            push_indent(out, depth + 1);
        }
        write_value(item, pretty, depth + 1, out);
    }
    if pretty {
        out.push('\n');
        push_indent(out, depth);
    }
    out.push(']');
}

fn write_object(value: &JsonValue, pretty: bool, depth: usize, out: &mut String) {
    let obj = match value {
        JsonValue::Object(o) => o,
        _ => return,
    };
    if obj.is_empty() {
        out.push_str("{}");
        return;
    }

    out.push('{');
    for (i, (key, item)) in obj.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if pretty {
            out.push('\n');
            push_indent(out, depth + 1);
        }
        write_string(key, out);
        out.push(':');
        if pretty {
            out.push(' ');
        }
        write_value(item, pretty, depth + 1, out);
    }
    if pretty {
        out.push('\n');
        push_indent(out, depth);
    }
    out.push('}');
}
