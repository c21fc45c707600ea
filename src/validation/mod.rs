// Validation module
// This module provides the stateless validators used by the storefront forms:
// email, password strength, phone, ZIP code, payment card, URL and the small
// general-purpose presence/range/date checks.

mod contact;
mod email;
mod general;
mod password;
mod payment;
mod temporal;

use std::fmt;
use std::str::FromStr;

use log::debug;

pub use contact::{is_valid_phone, is_valid_zip_code};
pub use email::is_valid_email;
pub use general::{exists, has_items, is_empty, is_in_range, is_valid_url};
pub use password::{validate_password, PasswordPolicy, PasswordRequirement, PasswordStrength};
pub use payment::{is_valid_credit_card, luhn_checksum_passes};
pub use temporal::{is_future_date, is_past_date, Clock, FixedClock, SystemClock};

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Shortest accepted payment card number
pub const MIN_CARD_DIGITS: usize = 13;

/// Longest accepted payment card number
pub const MAX_CARD_DIGITS: usize = 19;

/// Characters that satisfy the password special character rule
pub const PASSWORD_SPECIAL_CHARS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// String-shaped form fields that can be checked by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Email,
    Password,
    Phone,
    CreditCard,
    ZipCode,
    Url,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Email => write!(f, "email address"),
            FieldKind::Password => write!(f, "password"),
            FieldKind::Phone => write!(f, "phone number"),
            FieldKind::CreditCard => write!(f, "card number"),
            FieldKind::ZipCode => write!(f, "ZIP code"),
            FieldKind::Url => write!(f, "URL"),
        }
    }
}

impl FromStr for FieldKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(FieldKind::Email),
            "password" => Ok(FieldKind::Password),
            "phone" => Ok(FieldKind::Phone),
            "credit-card" | "card" => Ok(FieldKind::CreditCard),
            "zip-code" | "zip" => Ok(FieldKind::ZipCode),
            "url" => Ok(FieldKind::Url),
            _ => Err(ValidationError::UnknownField(s.to_string())),
        }
    }
}

/// Validation error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,

    #[error("Invalid {0}")]
    Invalid(FieldKind),

    #[error("Password requirements not met: {0}")]
    WeakPassword(String),

    #[error("Unknown field kind: {0}")]
    UnknownField(String),
}

/// Check a form field by kind, reporting why it was rejected.
///
/// Blank input is reported as [`ValidationError::Required`] before the
/// field-specific rule runs. Passwords use the default policy.
pub fn check_field(kind: FieldKind, value: &str) -> Result<(), ValidationError> {
    check_field_with_policy(kind, value, &PasswordPolicy::default())
}

/// Same as [`check_field`] with passwords evaluated against `policy`
pub fn check_field_with_policy(
    kind: FieldKind,
    value: &str,
    policy: &PasswordPolicy,
) -> Result<(), ValidationError> {
    debug!("Checking {} field", kind);

    if is_empty(Some(value)) {
        return Err(ValidationError::Required);
    }

    let accepted = match kind {
        FieldKind::Email => is_valid_email(value),
        FieldKind::Phone => is_valid_phone(value),
        FieldKind::CreditCard => is_valid_credit_card(value),
        FieldKind::ZipCode => is_valid_zip_code(value),
        FieldKind::Url => is_valid_url(value),
        FieldKind::Password => {
            let strength = policy.evaluate(value);
            if strength.is_valid {
                return Ok(());
            }
            let unmet = strength
                .failed_requirements_for(policy.min_length)
                .iter()
                .map(|r| r.to_string())
                .collect::<Vec<String>>()
                .join(", ");
            return Err(ValidationError::WeakPassword(unmet));
        }
    };

    if accepted {
        Ok(())
    } else {
        Err(ValidationError::Invalid(kind))
    }
}
