// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::DomainError;

/// Matches the digit group that ends the number.
#[allow(clippy::expect_used)]
static TRAILING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)$").expect("trailing digit pattern is valid"));

/// Extracts the sequence embedded at the end of a formatted document number.
///
/// Works regardless of a year embedded before the counter:
/// `WO-2024-0001` and `WO-0001` both yield `1`.
///
/// # Errors
///
/// * `DomainError::MalformedNumber` when the number does not end in a digit
///   group
/// * `DomainError::SequenceOutOfRange` when the group is `u64::MAX` or larger,
///   since no sequence could follow it
pub fn parse_trailing_sequence(number: &str) -> Result<u64, DomainError> {
    let digits: &str = TRAILING_DIGITS
        .captures(number)
        .and_then(|captures| captures.get(1))
        .map(|digits| digits.as_str())
        .ok_or_else(|| DomainError::MalformedNumber {
            number: number.to_string(),
        })?;

    match digits.parse::<u64>() {
        Ok(sequence) if sequence < u64::MAX => Ok(sequence),
        _ => Err(DomainError::SequenceOutOfRange {
            value: number.to_string(),
        }),
    }
}
