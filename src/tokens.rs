//! Zero-allocation token parsing and range filtering.
//!
//! Lines are handled as raw bytes: a token is any run of non-whitespace
//! bytes, and only `[+-]?[0-9]+` counts as an integer literal. Anything else,
//! including non-UTF-8 bytes, is malformed and dropped without error.

use crate::config::ValueRange;
use crate::stats::FileStats;
use crate::unique::UniqueSet;

/// Result of parsing an integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedInt {
    Value(i64),
    /// Well-formed literal whose magnitude does not fit in an `i64`.
    Overflow,
}

/// How a single token was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Accepted(i64),
    Malformed,
    OutOfRange,
}

/// Parse a base-10 signed integer literal.
///
/// Returns None unless the input is an optional single `+`/`-` followed by
/// at least one ASCII digit and nothing else.
#[inline]
pub fn parse_integer(bytes: &[u8]) -> Option<ParsedInt> {
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        Some(_) => (false, bytes),
        None => return None,
    };
    if digits.is_empty() {
        return None;
    }

    // Accumulate toward the sign so i64::MIN parses without overflow.
    let mut n: i64 = 0;
    let mut overflow = false;
    for &b in digits {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        if overflow {
            continue;
        }
        let next = n.checked_mul(10).and_then(|n| {
            if negative {
                n.checked_sub(d as i64)
            } else {
                n.checked_add(d as i64)
            }
        });
        match next {
            Some(v) => n = v,
            None => overflow = true,
        }
    }

    Some(if overflow {
        ParsedInt::Overflow
    } else {
        ParsedInt::Value(n)
    })
}

/// Classify one token against the accepted range.
#[inline]
pub fn classify_token(token: &[u8], range: ValueRange) -> TokenClass {
    match parse_integer(token) {
        None => TokenClass::Malformed,
        Some(ParsedInt::Overflow) => TokenClass::OutOfRange,
        Some(ParsedInt::Value(v)) if range.contains(v) => TokenClass::Accepted(v),
        Some(ParsedInt::Value(_)) => TokenClass::OutOfRange,
    }
}

/// Whitespace-delimited tokens of a line. Empty pieces between adjacent
/// separators are skipped.
#[inline]
pub fn split_tokens(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(|b| b.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
}

/// Accepted values of a line, in the order they appear.
pub fn accepted_values(line: &[u8], range: ValueRange) -> impl Iterator<Item = i64> + '_ {
    split_tokens(line).filter_map(move |token| match classify_token(token, range) {
        TokenClass::Accepted(v) => Some(v),
        TokenClass::Malformed | TokenClass::OutOfRange => None,
    })
}

/// Scan a line, adding accepted values to `set` and counting every token.
pub fn scan_line(line: &[u8], range: ValueRange, set: &mut UniqueSet, stats: &mut FileStats) {
    stats.lines += 1;
    for token in split_tokens(line) {
        stats.tokens += 1;
        match classify_token(token, range) {
            TokenClass::Accepted(v) => {
                stats.accepted += 1;
                set.insert(v);
            }
            TokenClass::Malformed => stats.malformed += 1,
            TokenClass::OutOfRange => stats.out_of_range += 1,
        }
    }
}
