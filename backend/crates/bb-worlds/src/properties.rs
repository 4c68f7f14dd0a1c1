//! `key=value` config files as written by the game server.
//!
//! Only the first line starting with `key=` is considered. Editing replaces
//! that line's value and leaves every other byte of the file untouched.

use crate::{Result as WorldResult, WorldError};

use std::path::Path;

/// Value of the first `key=` line, without its line ending.
pub fn read_value<'a>(contents: &'a str, key: &str) -> Option<&'a str> {
    contents
        .lines()
        .find_map(|line| line.strip_prefix(key)?.strip_prefix('='))
}

/// Contents with the first `key=` line's value replaced, or None if no line
/// carries the key.
pub fn replace_value(contents: &str, key: &str, value: &str) -> Option<String> {
    let prefix = format!("{key}=");
    let mut offset = 0;

    for line in contents.split_inclusive('\n') {
        if line.starts_with(&prefix) {
            let body = line.trim_end_matches(['\n', '\r']);
            let value_start = offset + prefix.len();
            let value_end = offset + body.len();

            let mut replaced = String::with_capacity(contents.len() + value.len());
            replaced.push_str(&contents[..value_start]);
            replaced.push_str(value);
            replaced.push_str(&contents[value_end..]);
            return Some(replaced);
        }
        offset += line.len();
    }

    None
}

pub async fn read_file_value(path: &Path, key: &str) -> WorldResult<Option<String>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| WorldError::io(path, e))?;

    Ok(read_value(&contents, key).map(str::to_string))
}

/// Rewrites `path` with `key` set to `value`. A file without the key is an error.
pub async fn replace_file_value(path: &Path, key: &str, value: &str) -> WorldResult<()> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| WorldError::io(path, e))?;

    let replaced =
        replace_value(&contents, key, value).ok_or_else(|| WorldError::missing_key(path, key))?;

    tokio::fs::write(path, replaced)
        .await
        .map_err(|e| WorldError::io(path, e))
}
