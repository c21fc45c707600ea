use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::{MIN_PASSWORD_LENGTH, PASSWORD_SPECIAL_CHARS};

/// Password requirement types for validation
#[derive(Debug, Clone, PartialEq)]
pub enum PasswordRequirement {
    MinimumLength(usize),
    ContainsUppercase,
    ContainsLowercase,
    ContainsNumbers,
    ContainsSpecialChars,
}

impl fmt::Display for PasswordRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordRequirement::MinimumLength(len) => {
                write!(f, "Password must be at least {} characters long", len)
            }
            PasswordRequirement::ContainsUppercase => {
                write!(f, "Password must contain at least one uppercase letter")
            }
            PasswordRequirement::ContainsLowercase => {
                write!(f, "Password must contain at least one lowercase letter")
            }
            PasswordRequirement::ContainsNumbers => {
                write!(f, "Password must contain at least one number")
            }
            PasswordRequirement::ContainsSpecialChars => {
                write!(f, "Password must contain at least one special character")
            }
        }
    }
}

/// Per-rule result of a password strength check.
///
/// Every flag is computed independently so a form can show feedback for each
/// rule; `is_valid` is true only when all five hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    pub min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_special_char: bool,
    pub is_valid: bool,
}

impl PasswordStrength {
    /// Requirements this password did not meet, in rule order
    pub fn failed_requirements(&self) -> Vec<PasswordRequirement> {
        self.failed_requirements_for(MIN_PASSWORD_LENGTH)
    }

    /// Same as [`failed_requirements`](Self::failed_requirements) but reports
    /// the length rule against a custom minimum
    pub fn failed_requirements_for(&self, min_length: usize) -> Vec<PasswordRequirement> {
        let mut failed = Vec::new();

        if !self.min_length {
            failed.push(PasswordRequirement::MinimumLength(min_length));
        }
        if !self.has_uppercase {
            failed.push(PasswordRequirement::ContainsUppercase);
        }
        if !self.has_lowercase {
            failed.push(PasswordRequirement::ContainsLowercase);
        }
        if !self.has_digit {
            failed.push(PasswordRequirement::ContainsNumbers);
        }
        if !self.has_special_char {
            failed.push(PasswordRequirement::ContainsSpecialChars);
        }

        failed
    }
}

/// Password policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Minimum number of characters
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
        }
    }
}

impl PasswordPolicy {
    /// Evaluate a password against this policy
    pub fn evaluate(&self, password: &str) -> PasswordStrength {
        debug!("Evaluating password strength");

        // Length is counted in characters, not bytes
        let min_length = password.chars().count() >= self.min_length;
        let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
        let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_special_char = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));

        PasswordStrength {
            min_length,
            has_uppercase,
            has_lowercase,
            has_digit,
            has_special_char,
            is_valid: min_length && has_uppercase && has_lowercase && has_digit && has_special_char,
        }
    }
}

/// Validate a password against the default policy
pub fn validate_password(password: &str) -> PasswordStrength {
    PasswordPolicy::default().evaluate(password)
}
