// SPDX-License-Identifier: Apache-2.0

//! File-level convenience helpers.
//!
//! These read or write whole files; the entire input is materialized in
//! memory before parsing begins.

use std::fs;
use std::path::Path;

use crate::error::JsonError;
use crate::parser::parse;
use crate::serializer::stringify;
use crate::value::JsonValue;

/// Read the file at `path` in full and parse it as JSON.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<JsonValue, JsonError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(parse(&text)?)
}

/// Serialize `value` and write it to `path`, truncating any existing file.
pub fn write_file<P: AsRef<Path>>(
    value: &JsonValue,
    path: P,
    pretty: bool,
) -> Result<(), JsonError> {
    let path = path.as_ref();
    let text = stringify(value, pretty);
    fs::write(path, &text)?;
    log::debug!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
