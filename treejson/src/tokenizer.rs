// SPDX-License-Identifier: Apache-2.0

//! Token classification over the raw input.
//!
//! [`peek_token`] looks at the next lexical unit without mutating any
//! caller state. Punctuation and the `true`/`false`/`null` literals are
//! consumed outright; strings and numbers are only classified, and their
//! dedicated parsers re-scan from the reported start position.

/// Classification of the next lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// `{`
    ObjectOpen,
    /// `}`
    ObjectClose,
    /// `[`
    ArrayOpen,
    /// `]`
    ArrayClose,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// A `"` begins a string; the body is not consumed here.
    StringStart,
    /// A digit or `-` begins a number; the body is not consumed here.
    NumberStart,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// End of input.
    End,
    /// Anything unrecognized; one byte is speculatively consumed.
    Unknown,
}

/// A classified token with its boundaries in the input.
///
/// `start` is the first non-whitespace byte of the token and anchors any
/// error reported for it. `end` is the cursor after whatever the
/// classification consumed; for `StringStart`/`NumberStart` it equals
/// `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

/// Advance past JSON insignificant whitespace.
pub(crate) fn skip_whitespace(text: &str, mut index: usize) -> usize {
    let bytes = text.as_bytes();
    while let Some(&b) = bytes.get(index) {
        if !matches!(b, b' ' | b'\t' | b'\n' | b'\r') {
            break;
        }
        index += 1;
    }
    index
}

/// Classify the next token at `index`, skipping leading whitespace.
pub(crate) fn peek_token(text: &str, index: usize) -> Token {
    let bytes = text.as_bytes();
    let start = skip_whitespace(text, index);

    let Some(&byte) = bytes.get(start) else {
        return Token {
            kind: TokenKind::End,
            start,
            end: start,
        };
    };

    let (kind, end) = match byte {
        b'{' => (TokenKind::ObjectOpen, start + 1),
        b'}' => (TokenKind::ObjectClose, start + 1),
        b'[' => (TokenKind::ArrayOpen, start + 1),
        b']' => (TokenKind::ArrayClose, start + 1),
        b',' => (TokenKind::Comma, start + 1),
        b':' => (TokenKind::Colon, start + 1),
        b'"' => (TokenKind::StringStart, start),
        b'0'..=b'9' | b'-' => (TokenKind::NumberStart, start),
        b't' if bytes[start..].starts_with(b"true") => (TokenKind::True, start + 4),
        b'f' if bytes[start..].starts_with(b"false") => (TokenKind::False, start + 5),
        b'n' if bytes[start..].starts_with(b"null") => (TokenKind::Null, start + 4),
        _ => (TokenKind::Unknown, start + 1),
    };

    Token { kind, start, end }
}
