//! Parsing utilities for numeric fields and index ranges
//!
//! Pure string parsing with no I/O dependencies.

use core::ops::Range;

use crate::MatrixError;

fn invalid(content: &str, reason: &'static str) -> MatrixError {
    MatrixError::Format {
        line: None,
        content: content.into(),
        reason,
    }
}

/// Parse a non-negative index or dimension
///
/// Only ASCII digits are accepted; signs, whitespace and decimal points are
/// rejected, and a leading `-` is reported as a negative value.
pub fn parse_usize(s: &str) -> Result<usize, MatrixError> {
    if s.is_empty() {
        return Err(invalid(s, "expected a non-negative integer, found nothing"));
    }
    if s.starts_with('-') && s.len() > 1 && s[1..].bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(s, "negative values are not allowed"));
    }

    let mut result: usize = 0;
    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(invalid(s, "expected a non-negative integer"));
        }

        let digit = (byte - b'0') as usize;
        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or_else(|| invalid(s, "integer too large"))?;
    }

    Ok(result)
}

/// Parse a range string in the format "start:end" or "start-end"
///
/// Used for row range queries. The end is exclusive.
pub fn parse_range(range_str: &str) -> Result<Range<usize>, MatrixError> {
    if range_str.is_empty() {
        return Err(invalid(range_str, "empty range"));
    }

    let (start_str, end_str) = range_str
        .split_once(':')
        .or_else(|| range_str.split_once('-'))
        .ok_or_else(|| invalid(range_str, "range needs a ':' or '-' separator"))?;

    let start = parse_usize(start_str).map_err(|_| invalid(range_str, "invalid range start"))?;
    let end = parse_usize(end_str).map_err(|_| invalid(range_str, "invalid range end"))?;

    if start > end {
        return Err(invalid(range_str, "range start is after its end"));
    }

    Ok(start..end)
}
