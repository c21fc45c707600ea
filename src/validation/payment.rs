use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::validation::{MAX_CARD_DIGITS, MIN_CARD_DIGITS};

lazy_static! {
    static ref CARD_NUMBER_REGEX: Regex =
        Regex::new(&format!(r"^[0-9]{{{},{}}}$", MIN_CARD_DIGITS, MAX_CARD_DIGITS)).unwrap();
}

/// Check whether a string is a payment card number.
///
/// The number must be 13 to 19 ASCII digits with no separators and pass the
/// Luhn checksum. The length check runs first.
pub fn is_valid_credit_card(card_number: &str) -> bool {
    if !CARD_NUMBER_REGEX.is_match(card_number) {
        trace!("Card number rejected on format");
        return false;
    }

    luhn_checksum_passes(card_number)
}

/// Run the Luhn checksum over a string of ASCII digits.
///
/// The last digit is the check digit. The remaining digits are reversed and
/// every digit at an even index is doubled, subtracting 9 when the result
/// exceeds 9. The sum plus the check digit must be a multiple of 10.
/// Returns false for empty input or any non-digit character.
pub fn luhn_checksum_passes(digits: &str) -> bool {
    let mut values = Vec::with_capacity(digits.len());
    for c in digits.chars() {
        match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => values.push(d),
            _ => return false,
        }
    }

    let check_digit = match values.pop() {
        Some(d) => d,
        None => return false,
    };

    // Kept modulo 10 so the sum is bounded for any input length
    let sum = values
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .fold(0u32, |acc, v| (acc + v) % 10);

    (sum + check_digit) % 10 == 0
}
