use chrono::{Duration, TimeZone, Utc};
use rstest::{fixture, rstest};
use test_case::test_case;

use storefront_validation::{
    check_field, exists, has_items, is_empty, is_future_date, is_in_range, is_past_date,
    is_valid_credit_card, is_valid_email, is_valid_phone, is_valid_url, is_valid_zip_code,
    validate_password, FieldKind, FixedClock, PasswordPolicy, PasswordRequirement,
    ValidationError,
};

#[test_case("a@b.co", true ; "minimal address")]
#[test_case("a@b", false ; "missing top level domain")]
#[test_case("a b@c.com", false ; "whitespace in local part")]
#[test_case("orders+eu@shop.example.com", true ; "plus tag and subdomain")]
#[test_case("orders@shop.example.c", false ; "one letter top level domain")]
fn test_email(input: &str, expected: bool) {
    assert_eq!(is_valid_email(input), expected);
}

#[test]
fn test_password_all_rules_met() {
    let strength = validate_password("Abcdef1!");
    assert!(strength.min_length);
    assert!(strength.has_uppercase);
    assert!(strength.has_lowercase);
    assert!(strength.has_digit);
    assert!(strength.has_special_char);
    assert!(strength.is_valid);
}

#[test]
fn test_password_lowercase_only() {
    let strength = validate_password("abcdefgh");
    assert!(strength.min_length);
    assert!(strength.has_lowercase);
    assert!(!strength.has_uppercase);
    assert!(!strength.has_digit);
    assert!(!strength.has_special_char);
    assert!(!strength.is_valid);
    assert_eq!(
        strength.failed_requirements(),
        vec![
            PasswordRequirement::ContainsUppercase,
            PasswordRequirement::ContainsNumbers,
            PasswordRequirement::ContainsSpecialChars,
        ]
    );
}

#[test]
fn test_password_is_valid_is_conjunction() {
    for password in ["", "A", "Abcdefgh", "ABCDEF1!", "abcdef1!", "Abcdefg!", "Abcdefg1", "Ab1!"] {
        let s = validate_password(password);
        assert_eq!(
            s.is_valid,
            s.min_length && s.has_uppercase && s.has_lowercase && s.has_digit && s.has_special_char,
            "conjunction broken for {:?}",
            password
        );
        assert!(!s.is_valid, "{:?} should be rejected", password);
    }
}

#[test]
fn test_password_policy_default_matches_validate() {
    let policy = PasswordPolicy::default();
    assert_eq!(policy.evaluate("Abcdef1!"), validate_password("Abcdef1!"));
}

#[rstest]
#[case("555-123-4567", true)]
#[case("(555) 123-4567", true)]
#[case("555.123.4567", true)]
#[case("5551234567", true)]
#[case("(555 123 4567", true)]
#[case("+1 555-123-4567", false)]
#[case("555-1234", false)]
fn test_phone(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_valid_phone(input), expected);
}

#[rstest]
#[case("4532015112830366", true)]
#[case("4532015112830367", false)]
#[case("123", false)]
#[case("4532a15112830366", false)]
#[case("", false)]
fn test_credit_card(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_valid_credit_card(input), expected);
}

#[test]
fn test_credit_card_single_digit_change_detected() {
    let valid = "4532015112830366";
    assert!(is_valid_credit_card(valid));

    for pos in 0..valid.len() {
        let original = valid.as_bytes()[pos];
        let replaced = if original == b'9' { b'0' } else { original + 1 };
        let mut bytes = valid.as_bytes().to_vec();
        bytes[pos] = replaced;
        let mutated = String::from_utf8(bytes).unwrap();
        assert!(!is_valid_credit_card(&mutated), "mutation at {} not detected", pos);
    }
}

#[test]
fn test_in_range() {
    assert!(is_in_range(5, 1, 10));
    assert!(is_in_range(1, 1, 10));
    assert!(!is_in_range(11, 1, 10));
    assert!(is_in_range(-2.5, -5.0, 0.0));
}

#[test_case("12345", true)]
#[test_case("12345-6789", true)]
#[test_case("1234", false)]
#[test_case("12345-67", false)]
fn test_zip_code(input: &str, expected: bool) {
    assert_eq!(is_valid_zip_code(input), expected);
}

#[test]
fn test_is_empty() {
    assert!(is_empty(Some("   ")));
    assert!(!is_empty(Some("x")));
    assert!(is_empty(Some("")));
    assert!(is_empty(None));
}

#[test]
fn test_has_items() {
    let none: [i32; 0] = [];
    assert!(!has_items(Some(&none[..])));
    assert!(has_items(Some(&[1][..])));
    assert!(!has_items::<i32>(None));
}

#[test]
fn test_exists() {
    assert!(!exists::<i32>(None));
    assert!(exists(Some(&0)));
    assert!(exists(Some(&"")));
}

#[test]
fn test_url() {
    assert!(!is_valid_url("not a url"));
    assert!(is_valid_url("https://example.com/path"));
}

#[fixture]
fn clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2025, 3, 15, 9, 30, 0).unwrap())
}

#[rstest]
fn test_dates_against_fixed_clock(clock: FixedClock) {
    let now = clock.0;

    assert!(is_future_date(now + Duration::milliseconds(1), &clock));
    assert!(is_past_date(now - Duration::milliseconds(1), &clock));
    assert!(!is_future_date(now, &clock));
    assert!(!is_past_date(now, &clock));
}

#[rstest]
fn test_dates_are_deterministic(clock: FixedClock) {
    let date = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    let first = is_future_date(date, &clock);
    for _ in 0..10 {
        assert_eq!(is_future_date(date, &clock), first);
    }
}

#[test]
fn test_validators_are_repeatable() {
    for _ in 0..3 {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_credit_card("4532015112830366"));
        assert_eq!(validate_password("abcdefgh"), validate_password("abcdefgh"));
        assert!(!is_valid_url("not a url"));
    }
}

#[test]
fn test_check_field() {
    assert_eq!(check_field(FieldKind::Email, "a@b.co"), Ok(()));
    assert_eq!(check_field(FieldKind::ZipCode, "1234"), Err(ValidationError::Invalid(FieldKind::ZipCode)));
    assert_eq!(check_field(FieldKind::Email, "  "), Err(ValidationError::Required));
    assert!(matches!(
        check_field(FieldKind::Password, "abcdefgh"),
        Err(ValidationError::WeakPassword(_))
    ));
}
