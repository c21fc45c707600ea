// Storefront validation library
// Pure predicates used by the storefront forms to accept or reject user input,
// plus the configuration used by the command-line harness.

pub mod config;
pub mod validation;

pub use validation::{
    check_field, check_field_with_policy, exists, has_items, is_empty, is_future_date,
    is_in_range, is_past_date, is_valid_credit_card, is_valid_email, is_valid_phone, is_valid_url, is_valid_zip_code,
    validate_password, Clock, FieldKind, FixedClock, PasswordPolicy, PasswordRequirement,
    PasswordStrength, SystemClock, ValidationError,
};
