use std::sync::LazyLock;

use engine::TransactionKind;
use regex::Regex;

/// A leading amount token, whitespace, then the rest of the line as note.
static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?[0-9]+[A-Za-z]*)\s+(.*)")
        .unwrap_or_else(|err| panic!("entry regex: {err}"))
});

const THOUSAND: i64 = 1_000;
const MILLION: i64 = 1_000_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Entry {
    pub kind: TransactionKind,
    pub amount: i64,
    pub note: String,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ParseError {
    #[error("số tiền không hợp lệ")]
    InvalidAmount,
}

/// Parses a quick entry such as `+5tr lương` or `20k ăn sáng`.
///
/// Returns `Ok(None)` when the text is not shaped like an entry at all.
///
/// Rules:
/// - `+...` => Income, anything else (`-...` or a bare number) => Expense
/// - a token containing `k` is multiplied by 1 000, else one containing `tr`
///   by 1 000 000; only the first occurrence of the unit is removed
/// - what remains of the token is read up to its first non-digit
/// - the stored amount is the absolute value
pub(crate) fn parse_entry(text: &str) -> Result<Option<Entry>, ParseError> {
    let Some(caps) = ENTRY_RE.captures(text.trim()) else {
        return Ok(None);
    };
    let (Some(token), Some(note)) = (caps.get(1), caps.get(2)) else {
        return Ok(None);
    };
    let token = token.as_str();

    let kind = if token.starts_with('+') {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    };

    let (multiplier, number) = if token.contains('k') {
        (THOUSAND, token.replacen('k', "", 1))
    } else if token.contains("tr") {
        (MILLION, token.replacen("tr", "", 1))
    } else {
        (1, token.to_string())
    };

    let amount = leading_int(&number)
        .and_then(|value| value.checked_mul(multiplier))
        .and_then(i64::checked_abs)
        .ok_or(ParseError::InvalidAmount)?;

    Ok(Some(Entry {
        kind,
        amount,
        note: note.as_str().to_string(),
    }))
}

/// Reads an optional sign followed by the leading ASCII digits of `input`,
/// ignoring whatever comes after them.
///
/// `None` when there are no digits or the value does not fit an `i64`.
fn leading_int(input: &str) -> Option<i64> {
    let (negative, rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
