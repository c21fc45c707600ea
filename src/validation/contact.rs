use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

/// US phone number: optional parenthesised area code, optional `-`, `.` or space between groups
pub const PHONE_PATTERN: &str = r"^\(?([0-9]{3})\)?[-. ]?([0-9]{3})[-. ]?([0-9]{4})$";

/// US ZIP code, optionally ZIP+4
pub const ZIP_CODE_PATTERN: &str = r"^[0-9]{5}(-[0-9]{4})?$";

lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(PHONE_PATTERN).unwrap();
    static ref ZIP_CODE_REGEX: Regex = Regex::new(ZIP_CODE_PATTERN).unwrap();
}

/// Check whether a string is a US phone number in 3-3-4 grouping.
///
/// The parentheses around the area code are matched independently, so
/// `(555 123 4567` is accepted. No country code is supported.
pub fn is_valid_phone(phone: &str) -> bool {
    let valid = PHONE_REGEX.is_match(phone);
    trace!("Phone format check: {}", valid);
    valid
}

/// Check whether a string is a 5-digit ZIP code or ZIP+4
pub fn is_valid_zip_code(zip_code: &str) -> bool {
    let valid = ZIP_CODE_REGEX.is_match(zip_code);
    trace!("ZIP code format check: {}", valid);
    valid
}
