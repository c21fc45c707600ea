use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

/// Email regex pattern: local part, single `@`, domain, alphabetic TLD of two or more letters
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(EMAIL_PATTERN).unwrap();
}

/// Check whether a string is a well-formed email address
pub fn is_valid_email(email: &str) -> bool {
    let valid = EMAIL_REGEX.is_match(email);
    trace!("Email format check: {}", valid);
    valid
}
