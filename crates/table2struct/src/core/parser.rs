//! Column type string parsing.
//!
//! MySQL reports column types as free text such as `int(11) unsigned`,
//! `varchar(255)` or `enum('draft','published')`. The parser scans that
//! text for two token classes only:
//!
//! - a maximal run of ASCII lowercase letters
//! - a maximal run of ASCII digits
//!
//! Everything else (parentheses, quotes, commas, spaces, upper-case letters)
//! is a separator. The token count then decides how the tokens are read.

use std::str::FromStr;

use crate::error::{GenError, Result};

use super::schema::TypeDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenClass {
    Letters,
    Digits,
}

impl TokenClass {
    fn of(c: char) -> Option<Self> {
        if c.is_ascii_lowercase() {
            Some(TokenClass::Letters)
        } else if c.is_ascii_digit() {
            Some(TokenClass::Digits)
        } else {
            None
        }
    }
}

/// Split a raw type string into letter and digit tokens.
fn tokenize(raw: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut current: Option<(TokenClass, usize)> = None;

    for (idx, c) in raw.char_indices() {
        let class = TokenClass::of(c);
        match (current, class) {
            (Some((open, _)), Some(next)) if open == next => {}
            (Some((_, start)), next) => {
                tokens.push(&raw[start..idx]);
                current = next.map(|n| (n, idx));
            }
            (None, next) => {
                current = next.map(|n| (n, idx));
            }
        }
    }

    if let Some((_, start)) = current {
        tokens.push(&raw[start..]);
    }

    tokens
}

/// Parse a size token, falling back to 0 on anything that is not a number.
fn parse_size(token: &str) -> i64 {
    token.parse().unwrap_or(0)
}

/// Parse a raw column type into a [`TypeDescriptor`].
///
/// # Errors
///
/// Returns [`GenError::UnparsableType`] when the text contains no letter or
/// digit tokens at all.
pub fn parse_type(raw: &str) -> Result<TypeDescriptor> {
    let parts = tokenize(raw);

    let Some(&name) = parts.first() else {
        return Err(GenError::unparsable(raw));
    };

    if name == "enum" {
        return Ok(TypeDescriptor {
            name: name.to_string(),
            size: 0,
            extra: parts[1..].join(","),
        });
    }

    let descriptor = match parts.as_slice() {
        [name, size, extra] => TypeDescriptor {
            name: name.to_string(),
            size: parse_size(size),
            extra: extra.to_string(),
        },
        [name, size] => TypeDescriptor {
            name: name.to_string(),
            size: parse_size(size),
            extra: String::new(),
        },
        _ => TypeDescriptor::named(name),
    };

    Ok(descriptor)
}

impl FromStr for TypeDescriptor {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self> {
        parse_type(s)
    }
}
