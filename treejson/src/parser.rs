// SPDX-License-Identifier: Apache-2.0

//! Recursive-descent parsing of JSON text into a [`JsonValue`] tree.
//!
//! Every sub-parser takes the input text and a byte index and returns the
//! parsed value together with the index after it, or a positioned error.
//! The first failure short-circuits all enclosing parses; nothing partial
//! is ever returned.
//!
//! Recursion depth equals the nesting depth of the input. There is no
//! explicit depth limit; a ~1000-level document costs well under a
//! megabyte of stack.

use indexmap::IndexMap;

use crate::error::{ErrorKind, ParseError};
use crate::escape;
use crate::number;
use crate::tokenizer::{peek_token, skip_whitespace, TokenKind};
use crate::value::JsonValue;

/// Parse one top-level JSON value from `text`.
///
/// Trailing content after the first complete value is not inspected.
///
/// # Examples
///
/// ```
/// use treejson::{parse, JsonValue};
///
/// let value = parse(r#"[1, true, "x"]"#).unwrap();
/// assert_eq!(value.get_index(1), Some(&JsonValue::Bool(true)));
///
/// let err = parse(r#"{"a":}"#).unwrap_err();
/// assert_eq!(err.to_string(), "expected a value at index 5");
/// ```
pub fn parse(text: &str) -> Result<JsonValue, ParseError> {
    log::trace!("parse: {} bytes of input", text.len());
    let (value, _next) = parse_value(text, 0)?;
    Ok(value)
}

/// Peek one token and dispatch to the matching sub-parser.
fn parse_value(text: &str, index: usize) -> Result<(JsonValue, usize), ParseError> {
    let token = peek_token(text, index);
    match token.kind {
        TokenKind::StringStart => {
            let (s, next) = parse_string(text, index)?;
            Ok((JsonValue::String(s), next))
        }
        TokenKind::NumberStart => {
            let (n, next) = number::parse_number(text, index)?;
            Ok((JsonValue::Number(n), next))
        }
        TokenKind::ObjectOpen => parse_object(text, index),
        TokenKind::ArrayOpen => parse_array(text, index),
        TokenKind::True => Ok((JsonValue::Bool(true), token.end)),
        TokenKind::False => Ok((JsonValue::Bool(false), token.end)),
        TokenKind::Null => Ok((JsonValue::Null, token.end)),
        _ => Err(ParseError::new(ErrorKind::NoValueFound, token.start)),
    }
}

/// Parse a string literal, decoding escapes into the output.
fn parse_string(text: &str, index: usize) -> Result<(String, usize), ParseError> {
    let bytes = text.as_bytes();
    let quote = skip_whitespace(text, index);
    if bytes.get(quote) != Some(&b'"') {
        return Err(ParseError::new(ErrorKind::UnterminatedString, quote));
    }

    let mut cursor = quote + 1;
    let mut out = String::new();
    // Unescaped byte runs are copied over in one piece.
    let mut run_start = cursor;
    loop {
        match bytes.get(cursor) {
            None => return Err(ParseError::new(ErrorKind::UnterminatedString, quote)),
            Some(b'"') => {
                out.push_str(&text[run_start..cursor]);
                cursor += 1;
                break;
            }
            Some(b'\\') => {
                out.push_str(&text[run_start..cursor]);
                let backslash = cursor;
                let Some(&escaped) = bytes.get(backslash + 1) else {
                    return Err(ParseError::new(ErrorKind::UnterminatedEscape, backslash));
                };
                if escaped == b'u' {
                    let (ch, after) = escape::decode_unicode_escape(text, backslash)?;
                    out.push(ch);
                    cursor = after;
                } else if let Some(ch) = escape::unescape_byte(escaped) {
                    out.push(ch);
                    cursor = backslash + 2;
                } else {
                    // Unrecognized escapes are dropped, not flagged.
                    let skipped = text[backslash + 1..]
                        .chars()
                        .next()
                        .map(char::len_utf8)
                        .unwrap_or(1);
                    cursor = backslash + 1 + skipped;
                }
                run_start = cursor;
            }
            Some(_) => cursor += 1,
        }
    }

    Ok((out, cursor))
}

/// Parse an object, tracking whether the last thing seen was a complete
/// key/value pair for comma validation.
fn parse_object(text: &str, index: usize) -> Result<(JsonValue, usize), ParseError> {
    let open = peek_token(text, index);
    debug_assert_eq!(open.kind, TokenKind::ObjectOpen);
    let mut cursor = open.end;

    let mut map = IndexMap::new();
    let mut have_pair = false;
    loop {
        let token = peek_token(text, cursor);
        match token.kind {
            TokenKind::End => {
                return Err(ParseError::new(ErrorKind::UnterminatedObject, token.start))
            }
            TokenKind::Comma => {
                if !have_pair {
                    return Err(ParseError::new(ErrorKind::MissingKeyValue, token.start));
                }
                cursor = token.end;
                have_pair = false;
            }
            TokenKind::ObjectClose => {
                cursor = token.end;
                break;
            }
            _ => {
                if have_pair {
                    return Err(ParseError::new(ErrorKind::MissingComma, token.start));
                }
                let (key, after_key) = parse_string(text, cursor)?;
                let colon = peek_token(text, after_key);
                if colon.kind != TokenKind::Colon {
                    return Err(ParseError::new(ErrorKind::MissingColon, colon.start));
                }
                let (value, after_value) = parse_value(text, colon.end)?;
                // A duplicate key takes the position of its last occurrence.
                if map.contains_key(&key) {
                    map.shift_remove(&key);
                }
                map.insert(key, value);
                cursor = after_value;
                have_pair = true;
            }
        }
    }

    Ok((JsonValue::Object(map), cursor))
}

/// Parse an array; the same machine as objects, without keys or colons.
fn parse_array(text: &str, index: usize) -> Result<(JsonValue, usize), ParseError> {
    let open = peek_token(text, index);
    debug_assert_eq!(open.kind, TokenKind::ArrayOpen);
    let mut cursor = open.end;

    let mut items = Vec::new();
    let mut have_value = false;
    loop {
        let token = peek_token(text, cursor);
        match token.kind {
            TokenKind::End => {
                return Err(ParseError::new(ErrorKind::UnterminatedArray, token.start))
            }
            TokenKind::Comma => {
                if !have_value {
                    return Err(ParseError::new(ErrorKind::MissingValue, token.start));
                }
                cursor = token.end;
                have_value = false;
            }
            TokenKind::ArrayClose => {
                cursor = token.end;
                break;
            }
            _ => {
                if have_value {
                    return Err(ParseError::new(ErrorKind::MissingComma, token.start));
                }
                let (value, after_value) = parse_value(text, cursor)?;
                items.push(value);
                cursor = after_value;
                have_value = true;
            }
        }
    }

    Ok((JsonValue::Array(items), cursor))
}
