//! Leading-digit extraction.

use crate::token::NumericToken;

/// Extracts the leading significant digit of a token.
///
/// Scans the token's textual form left to right and returns the first
/// character in `'1'..='9'` as a digit. Sign characters, leading zeros
/// and the decimal point are skipped, so `"0.005"` yields 5 and `"-42"`
/// yields 4. Returns the sentinel 0 when no such character exists, which
/// covers zero values and non-numeric noise alike.
///
/// Total over arbitrary input: malformed tokens map to 0 and land in the
/// histogram's excluded bucket instead of raising an error.
pub fn first_digit(token: &NumericToken) -> u8 {
    match token {
        NumericToken::Text(text) => first_digit_in(text),
        NumericToken::Value(v) => first_digit_in(&v.to_string()),
    }
}

fn first_digit_in(text: &str) -> u8 {
    for ch in text.chars() {
        if ('1'..='9').contains(&ch) {
            return ch as u8 - b'0';
        }
    }
    0
}
