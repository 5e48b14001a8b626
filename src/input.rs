//! Parsing of whitespace separated keys entered by a user.
//!
//! Keys that fail to parse never reach a tree: a line is accepted only if
//! every key on it parses.

use std::str::FromStr;

use crate::error::{Error, Result};

/// Parse all whitespace separated keys in `input`.
///
/// Returns [`Error::EmptyInput`] if `input` holds no keys, or
/// [`Error::InvalidKey`] naming the first token that fails to parse.
pub fn parse_keys<K>(input: &str) -> Result<Vec<K>>
where
    K: FromStr,
{
    let keys = input
        .split_whitespace()
        .map(|v| v.parse().map_err(|_| Error::InvalidKey(v.to_string())))
        .collect::<Result<Vec<_>>>()?;

    if keys.is_empty() {
        return Err(Error::EmptyInput);
    }

    Ok(keys)
}

/// Parse `input` as exactly one key.
pub fn parse_key<K>(input: &str) -> Result<K>
where
    K: FromStr,
{
    let mut keys = parse_keys(input)?;
    match keys.len() {
        1 => Ok(keys.remove(0)),
        n => Err(Error::WrongKeyCount(n)),
    }
}
