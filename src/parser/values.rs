//! Scalar value parsing shared by both map formats.

use crate::error::{MapError, Result};

/// Permissive boolean parser.
///
/// Looks only at the first non-blank character: `y`, `t` or `1` is true,
/// `n`, `f` or `0` is false. Anything else yields `default`.
pub fn parse_bool(value: &str, default: bool) -> bool {
    match value.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('y' | 't' | '1') => true,
        Some('n' | 'f' | '0') => false,
        _ => default,
    }
}

/// Parse a single integer token, naming `field` in the error.
pub fn parse_int(token: &str, field: &str) -> Result<i32> {
    token.trim().parse().map_err(|_| MapError::Parse {
        message: format!("{}: '{}' is not a valid integer", field, token.trim()),
        help: None,
    })
}

/// Parse a comma-separated integer list, dropping empty entries.
pub fn parse_int_list(value: &str, field: &str) -> Result<Vec<i32>> {
    value
        .split(',')
        .filter(|token| !token.trim().is_empty())
        .map(|token| parse_int(token, field))
        .collect()
}

/// Parse the first `N` entries of a comma-separated integer tuple.
///
/// Extra entries are ignored; missing entries are an error.
pub fn parse_tuple<const N: usize>(value: &str, field: &str) -> Result<[i32; N]> {
    let tokens: Vec<&str> = value.split(',').collect();
    if tokens.len() < N {
        return Err(MapError::Parse {
            message: format!(
                "{}: expected {} comma-separated values, found {}",
                field,
                N,
                tokens.len()
            ),
            help: Some(format!("Write {} as {}", field, example_tuple(N))),
        });
    }

    let mut result = [0; N];
    for (slot, token) in result.iter_mut().zip(tokens) {
        *slot = parse_int(token, field)?;
    }
    Ok(result)
}

/// Interpret an amount override where `-1` means "not set".
pub fn amount_override(value: i32) -> Option<i32> {
    (value != -1).then_some(value)
}

/// Interpret an index override where any negative value means "not set".
pub fn index_override(value: i32) -> Option<i32> {
    (value >= 0).then_some(value)
}

/// Expand the `@` line-break token used in briefings.
pub fn expand_briefing(value: &str) -> String {
    value.replace('@', "\n")
}

fn example_tuple(n: usize) -> String {
    vec!["0"; n].join(",")
}
