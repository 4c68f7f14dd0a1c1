//! Parser for `-flag=value` argument strings.
//!
//! Tokens are separated by spaces. A flag name is one or more ASCII letters,
//! a value is one or more non-space characters. When the command allows it,
//! the first token may instead be a bare positional value.

use crate::{Args, UNNAMED_ARG};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgParseError {
    #[error("malformed argument string")]
    Malformed,

    #[error("flag \"{found}\" is not allowed")]
    InvalidFlag { found: String },
}

/// Parses `input` into flag values.
///
/// Flags outside `flags` are rejected; repeating a flag keeps the last value.
pub fn parse_arg_string(
    input: &str,
    flags: &[&str],
    allow_unnamed: bool,
) -> Result<Args, ArgParseError> {
    let mut args = Args::new();

    for (index, token) in input.split(' ').filter(|t| !t.is_empty()).enumerate() {
        let Some(flag_token) = token.strip_prefix('-') else {
            if allow_unnamed && index == 0 {
                args.insert(UNNAMED_ARG, token);
                continue;
            }
            return Err(ArgParseError::Malformed);
        };

        let Some((flag, value)) = flag_token.split_once('=') else {
            return Err(ArgParseError::Malformed);
        };

        if flag.is_empty() || !flag.chars().all(|c| c.is_ascii_alphabetic()) || value.is_empty() {
            return Err(ArgParseError::Malformed);
        }

        if !flags.contains(&flag) {
            return Err(ArgParseError::InvalidFlag {
                found: flag.to_string(),
            });
        }

        args.insert(flag, value);
    }

    Ok(args)
}
