//! Pest grammar parser for filter tokens

use pest::Parser;
use pest_derive::Parser;

use crate::error::{DockviewError, Result};
use crate::filter::FilterSet;

#[derive(Parser)]
#[grammar = "../grammar/filter.pest"]
pub struct FilterTokenParser;

/// Parse a comma-separated filter specification into a filter set.
///
/// Each comma-separated segment is one filter token, itself a query string
/// of `key=value` pairs joined by `&`.
pub fn parse_spec(spec: &str) -> Result<FilterSet> {
    let tokens: Vec<String> = spec.split(',').map(str::to_string).collect();
    parse_tokens(&tokens)
}

/// Parse a list of filter tokens into a filter set.
///
/// Any malformed token aborts the whole parse; no partial set is returned.
pub fn parse_tokens(tokens: &[String]) -> Result<FilterSet> {
    let mut set = FilterSet::new();

    for token in tokens {
        parse_token_into(token, &mut set)?;
    }

    Ok(set)
}

fn parse_token_into(token: &str, set: &mut FilterSet) -> Result<()> {
    let mut parsed = FilterTokenParser::parse(Rule::token, token).map_err(|e| {
        DockviewError::Filter {
            token: token.to_string(),
            reason: e.to_string(),
        }
    })?;

    let pairs = parsed.next().ok_or_else(|| DockviewError::Filter {
        token: token.to_string(),
        reason: "empty parse result".to_string(),
    })?;

    // Only the first value for a key counts within one token; later
    // occurrences of the same key in the same token are dropped.
    let mut seen = Vec::new();

    for pair in pairs.into_inner() {
        if pair.as_rule() != Rule::pair {
            continue;
        }

        let mut raw_key = "";
        let mut raw_value = "";
        for part in pair.into_inner() {
            match part.as_rule() {
                Rule::key => raw_key = part.as_str(),
                Rule::value => raw_value = part.as_str(),
                _ => {}
            }
        }

        let key = decode_component(raw_key, token)?;
        if key.is_empty() || seen.contains(&key) {
            continue;
        }
        let value = decode_component(raw_value, token)?;

        set.add(key.clone(), value);
        seen.push(key);
    }

    Ok(())
}

/// Decode one percent-encoded component; `+` decodes to a space.
///
/// The grammar has already validated escape shape, so only byte-level
/// decoding and UTF-8 validation remain.
fn decode_component(raw: &str, token: &str) -> Result<String> {
    let bytes = raw.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let (hi, lo) = match (
                    bytes.get(i + 1).copied().and_then(hex_digit),
                    bytes.get(i + 2).copied().and_then(hex_digit),
                ) {
                    (Some(hi), Some(lo)) => (hi, lo),
                    _ => {
                        return Err(DockviewError::Filter {
                            token: token.to_string(),
                            reason: format!("truncated percent escape in `{raw}`"),
                        })
                    }
                };
                decoded.push(hi << 4 | lo);
                i += 3;
            }
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            b => {
                decoded.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(decoded).map_err(|_| DockviewError::Filter {
        token: token.to_string(),
        reason: format!("percent escapes in `{raw}` decode to invalid UTF-8"),
    })
}

fn hex_digit(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}

// ============================================================================
// Tests
// ============================================================================
