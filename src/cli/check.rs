use anyhow::{anyhow, Result, Context};
use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, info};
use serde_json::json;

use storefront_validation::validation::{
    self, check_field_with_policy, Clock, FieldKind, FixedClock, PasswordPolicy, ValidationError,
};

use crate::cli::output::{mask_all, mask_tail, Outcome};

/// Which side of "now" a date must fall on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateDirection {
    Future,
    Past,
}

/// Check an email address
pub fn check_email(value: &str) -> Outcome {
    Outcome::new("email", value, validation::is_valid_email(value))
}

/// Check a password and report each rule
pub fn check_password(value: &str, policy: &PasswordPolicy, show_feedback: bool) -> Outcome {
    let strength = policy.evaluate(value);
    let messages = if show_feedback {
        strength
            .failed_requirements_for(policy.min_length)
            .iter()
            .map(|r| r.to_string())
            .collect()
    } else {
        Vec::new()
    };

    Outcome::new("password", &mask_all(value), strength.is_valid)
        .with_details(json!(strength))
        .with_messages(messages)
}

/// Check a US phone number
pub fn check_phone(value: &str) -> Outcome {
    Outcome::new("phone", value, validation::is_valid_phone(value))
}

/// Check a payment card number
pub fn check_card(value: &str) -> Outcome {
    let valid = validation::is_valid_credit_card(value);
    let mut outcome = Outcome::new("card", &mask_tail(value), valid);
    if !valid {
        let len = value.chars().count();
        let message = if !value.chars().all(|c| c.is_ascii_digit()) {
            "Card number must contain digits only".to_string()
        } else if len < validation::MIN_CARD_DIGITS || len > validation::MAX_CARD_DIGITS {
            format!(
                "Card number must be {} to {} digits long",
                validation::MIN_CARD_DIGITS,
                validation::MAX_CARD_DIGITS
            )
        } else {
            "Card number failed the checksum".to_string()
        };
        outcome = outcome.with_messages(vec![message]);
    }
    outcome
}

/// Check a ZIP code
pub fn check_zip(value: &str) -> Outcome {
    Outcome::new("zip", value, validation::is_valid_zip_code(value))
}

/// Check a URL
pub fn check_url(value: &str) -> Outcome {
    Outcome::new("url", value, validation::is_valid_url(value))
}

/// Check whether a value is blank; "valid" means the value is present
pub fn check_present(value: Option<&str>) -> Outcome {
    let empty = validation::is_empty(value);
    Outcome::new("present", value.unwrap_or(""), !empty)
        .with_details(json!({ "empty": empty }))
}

/// Check a number against inclusive bounds
pub fn check_range(value: f64, min: f64, max: f64) -> Result<Outcome> {
    if min > max {
        return Err(anyhow!("Minimum {} is greater than maximum {}", min, max));
    }

    Ok(Outcome::new("range", &value.to_string(), validation::is_in_range(value, min, max))
        .with_details(json!({ "min": min, "max": max })))
}

/// Check a date against the clock, read once so the reported "now" is the compared instant
pub fn check_date<C: Clock + ?Sized>(
    value: &str,
    direction: DateDirection,
    clock: &C,
) -> Result<Outcome> {
    let date = parse_date(value)?;
    let now = clock.now();
    let pinned = FixedClock(now);
    debug!("Comparing {} against {}", date, now);

    let (check, valid) = match direction {
        DateDirection::Future => ("future-date", validation::is_future_date(date, &pinned)),
        DateDirection::Past => ("past-date", validation::is_past_date(date, &pinned)),
    };

    Ok(Outcome::new(check, value, valid).with_details(json!({
        "date": date,
        "now": now,
    })))
}

/// Check a field by kind name, reporting the rejection reason
pub fn check_kind(kind: &str, value: &str, policy: &PasswordPolicy) -> Result<Outcome> {
    let kind: FieldKind = kind.parse().map_err(|e: ValidationError| anyhow!(e))?;
    info!("Checking field of kind {}", kind);

    let shown = match kind {
        FieldKind::Password => mask_all(value),
        FieldKind::CreditCard => mask_tail(value),
        _ => value.to_string(),
    };

    let outcome = match check_field_with_policy(kind, value, policy) {
        Ok(()) => Outcome::new(&kind.to_string(), &shown, true),
        Err(e) => {
            Outcome::new(&kind.to_string(), &shown, false).with_messages(vec![e.to_string()])
        }
    };
    Ok(outcome)
}

/// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date taken as midnight UTC
fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.with_timezone(&Utc));
    }

    let day = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .context(format!("Invalid date: {} (expected RFC 3339 or YYYY-MM-DD)", value))?;
    let midnight = day
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow!("Invalid date: {}", value))?;
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(midnight, Utc))
}
